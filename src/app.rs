//! Review run orchestration
//!
//! Starts the selected ingestion source, feeds its deliveries into a
//! [`ReviewSession`] until the source goes idle or the user interrupts, then
//! renders the report or the high-risk export.

use crate::cli::CliArgs;
use crate::core::ReviewSession;
use crate::ingest::{create_source, sample_transactions, ChannelSink};
use crate::io::write_report;
use crate::types::ReviewError;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tracing::{info, warn};

/// How often the run loop checks whether the source has gone idle
const IDLE_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Run one review session and write its result to `output`
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `output` - Mutable reference to a writer for the report or CSV export
///
/// # Returns
///
/// * `Ok(())` if the session ran and its output was written (an export with
///   no eligible transactions is logged and writes nothing)
/// * `Err(ReviewError)` if the runtime could not start, the file source was
///   given no files, or writing the output failed
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), ReviewError> {
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ReviewError::runtime_error(format!("Failed to start runtime: {}", e)))?;

    let session = runtime.block_on(collect(args))?;

    render(&session, args, output)
}

/// Ingest records until the source is idle or Ctrl-C is pressed
async fn collect(args: &CliArgs) -> Result<ReviewSession, ReviewError> {
    let mut session = if args.with_samples {
        ReviewSession::with_records(sample_transactions())
    } else {
        ReviewSession::new()
    };
    session.set_criteria(args.to_criteria());

    let (sink, mut events) = ChannelSink::new();
    let mut source = create_source(args.source_type(), args.to_ingest_config(), Arc::new(sink))?;
    source.start();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut ctrl_c_armed = true;
    let mut idle_check = tokio::time::interval(IDLE_CHECK_INTERVAL);

    loop {
        tokio::select! {
            Some(event) = events.recv() => session.apply(event),
            result = &mut ctrl_c, if ctrl_c_armed => {
                ctrl_c_armed = false;
                match result {
                    Ok(()) => {
                        info!("Interrupted, stopping ingestion");
                        break;
                    }
                    Err(e) => warn!(error = %e, "Unable to listen for Ctrl-C"),
                }
            }
            _ = idle_check.tick() => {
                if !source.is_running() {
                    break;
                }
            }
        }
    }

    source.stop();
    while let Ok(event) = events.try_recv() {
        session.apply(event);
    }

    info!(
        records = session.len(),
        failed = session.failed_loads(),
        "Ingestion finished"
    );

    Ok(session)
}

fn render(
    session: &ReviewSession,
    args: &CliArgs,
    output: &mut dyn Write,
) -> Result<(), ReviewError> {
    if !args.export {
        return write_report(&session.page(args.page), &session.statistics(), output);
    }

    match session.export_high_risk() {
        Ok(text) => {
            output.write_all(text.as_bytes())?;
            output.flush()?;
            info!(records = session.high_risk().len(), "High-risk transactions exported");
            Ok(())
        }
        Err(ReviewError::EmptyExport) => {
            warn!("{}", ReviewError::EmptyExport);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["fraud-review"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    fn run_to_string(args: &CliArgs) -> String {
        let mut output = Vec::new();
        run(args, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_simulated_report() {
        let text = run_to_string(&args(&["--count", "12", "--interval-ms", "1", "--seed", "4"]));

        assert!(text.starts_with("Transactions: 12\n"));
        assert!(text.contains("... 2 more (showing 10 of 12, page 1)"));
    }

    #[test]
    fn test_samples_filtered_by_merchant() {
        let text = run_to_string(&args(&[
            "--with-samples",
            "--count",
            "1",
            "--interval-ms",
            "1",
            "--seed",
            "4",
            "--merchant",
            "vendor",
        ]));

        assert!(text.starts_with("Transactions: 1\nHigh risk: 1 (100.0%)\n"));
        assert!(text.contains("123456789-0"));
    }

    #[test]
    fn test_export_samples() {
        let text = run_to_string(&args(&[
            "--with-samples",
            "--count",
            "1",
            "--interval-ms",
            "1",
            "--seed",
            "4",
            "--merchant",
            "krispy",
            "--export",
        ]));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("txn_count_24h,"));
        assert!(lines[1].ends_with(",830329091,830329091,\"Krispy Kreme #685312\""));
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let text = run_to_string(&args(&[
            "--count",
            "3",
            "--interval-ms",
            "1",
            "--max-prob",
            "0.5",
            "--export",
        ]));
        assert!(text.is_empty());
    }

    #[test]
    fn test_file_source_without_files_fails() {
        let mut output = Vec::new();
        let result = run(&args(&["--source", "files"]), &mut output);
        assert_eq!(result, Err(ReviewError::NoInputFiles));
        assert!(output.is_empty());
    }
}
