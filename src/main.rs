//! Fraud Review CLI
//!
//! Command-line front end for reviewing scored transactions.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --seed 7 --count 30 --interval-ms 50
//! cargo run -- --with-samples --risk red,yellow --page 2
//! cargo run -- records/*.json --export > high_risk.csv
//! RUST_LOG=fraud_review_engine=debug cargo run -- --foreign-only
//! ```
//!
//! Transactions are streamed from the simulated generator or read from JSON
//! files, filtered with the given flags, and summarized on stdout. With
//! `--export` the high-risk subset is written as CSV instead. Logs go to
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (runtime failure, no input files for the file source, write failure)

use fraud_review_engine::{app, cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fraud_review_engine=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = app::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
