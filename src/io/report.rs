//! Plain-text review report
//!
//! Renders the dashboard summary and the current page of transactions for
//! terminal output.

use crate::core::{PageView, Statistics};
use crate::types::ReviewError;
use std::io::Write;

/// Format a probability or ratio as a percentage with two decimals
///
/// `0.8732` becomes `"87.32%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Write the summary block and the visible rows
///
/// # Arguments
///
/// * `view` - The page of rows to list
/// * `stats` - Statistics over the filtered transactions
/// * `output` - Mutable reference to a writer for the report
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ReviewError::IoError)` if a write error occurred
pub fn write_report(
    view: &PageView,
    stats: &Statistics,
    output: &mut dyn Write,
) -> Result<(), ReviewError> {
    writeln!(output, "Transactions: {}", stats.total)?;
    writeln!(
        output,
        "High risk: {} ({:.1}%)",
        stats.high_risk_count, stats.high_risk_percentage
    )?;
    writeln!(
        output,
        "Average fraud probability: {}",
        format_percentage(stats.average_fraud_prob)
    )?;
    writeln!(
        output,
        "Risk distribution: high {}, medium {}, low {}",
        stats.high_risk_count, stats.medium_risk_count, stats.low_risk_count
    )?;
    writeln!(
        output,
        "Foreign / domestic: {} / {}",
        stats.foreign_count, stats.domestic_count
    )?;

    if view.rows.is_empty() {
        writeln!(output)?;
        writeln!(output, "No transactions found")?;
        return Ok(());
    }

    writeln!(output)?;
    writeln!(
        output,
        "{:<22} {:<6} {:>8} {:>10}  MERCHANT",
        "KEY", "RISK", "PROB", "AMOUNT_24H"
    )?;
    for row in &view.rows {
        writeln!(
            output,
            "{:<22} {:<6} {:>8} {:>10.2}  {}",
            row.key,
            row.risk.as_str(),
            format_percentage(row.transaction.prob_fraud),
            row.transaction.amount_24h,
            row.transaction.merchant_name
        )?;
    }

    if view.has_more {
        writeln!(
            output,
            "... {} more (showing {} of {}, page {})",
            view.total - view.rows.len(),
            view.rows.len(),
            view.total,
            view.page
        )?;
    }

    output.flush()?;

    Ok(())
}
