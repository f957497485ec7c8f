//! End-to-end integration tests
//!
//! These tests validate the complete review pipeline using predefined record
//! fixtures. Each test:
//! 1. Lists every file in a fixture directory (JSON records, notes, expected outputs)
//! 2. Streams them through the file source into a review session
//! 3. Exports the filtered high-risk transactions as CSV
//! 4. Compares actual output with the expected CSV
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Non-JSON files being skipped
//! - Malformed records being reported without stopping the batch
//! - Newest-first export order
//! - Filters applied before export
//! - Exports with nothing eligible

#[cfg(test)]
mod tests {
    use clap::Parser;
    use fraud_review_engine::app;
    use fraud_review_engine::cli::CliArgs;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;

    /// All files of a fixture directory, sorted by name
    fn fixture_files(fixture_dir: &str) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(fixture_dir)
            .unwrap_or_else(|e| panic!("Failed to list {}: {}", fixture_dir, e))
            .map(|entry| entry.expect("Failed to read directory entry").path())
            .collect();
        files.sort();
        files
    }

    /// Build CLI arguments reading `files` with a short delivery interval
    fn cli_args(files: &[PathBuf], extra: &[&str]) -> CliArgs {
        let mut argv = vec!["fraud-review".to_string()];
        argv.extend(files.iter().map(|path| path.display().to_string()));
        argv.extend(["--interval-ms".to_string(), "1".to_string()]);
        argv.extend(extra.iter().map(|arg| arg.to_string()));
        CliArgs::try_parse_from(argv).expect("Failed to parse arguments")
    }

    /// Run a fixture through the pipeline and compare with an expected file
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "mixed_inputs")
    /// * `extra` - Additional command-line flags
    /// * `expected_file` - Expected output file inside the fixture directory
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Fixture files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str, extra: &[&str], expected_file: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let expected_path = format!("{}/{}", fixture_dir, expected_file);

        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let args = cli_args(&fixture_files(&fixture_dir), extra);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        app::run(&args, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to run review: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (flags: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, extra, actual_output, expected_output
        );
    }

    #[rstest]
    #[case::all_high_risk("mixed_inputs", &["--export"], "expected.csv")]
    #[case::foreign_only("mixed_inputs", &["--export", "--foreign-only"], "expected_foreign.csv")]
    #[case::merchant_filter("mixed_inputs", &["--export", "--merchant", "KRISPY"], "expected_krispy.csv")]
    #[case::risk_filter("mixed_inputs", &["--export", "--risk", "yellow,green"], "expected_empty.csv")]
    #[case::nothing_eligible("mixed_inputs", &["--export", "--max-prob", "0.5"], "expected_empty.csv")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] extra: &[&str],
        #[case] expected_file: &str,
    ) {
        run_test_fixture(fixture, extra, expected_file);
    }

    #[test]
    fn test_report_for_mixed_inputs() {
        let args = cli_args(&fixture_files("tests/fixtures/mixed_inputs"), &[]);

        let mut output = Vec::new();
        app::run(&args, &mut output).expect("Failed to run review");
        let report = String::from_utf8(output).expect("Report is not UTF-8");

        assert!(report.starts_with("Transactions: 3\nHigh risk: 2 (66.7%)\n"));
        assert!(report.contains("Risk distribution: high 2, medium 0, low 1"));
        assert!(report.contains("Foreign / domestic: 1 / 2"));
        assert!(!report.contains("Not A Record File"));
        assert!(!report.contains("AliExpress"));

        let vendor = report.find("Unknown Vendor Ltd").expect("missing a.json row");
        let krispy = report.find("Krispy Kreme #685312").expect("missing d.json row");
        let amazon = report.find("Amazon Marketplace").expect("missing b.json row");
        assert!(vendor < krispy && krispy < amazon);
    }

    #[test]
    fn test_simulated_run_is_reproducible() {
        let run_once = || {
            let args = CliArgs::try_parse_from([
                "fraud-review",
                "--seed",
                "21",
                "--count",
                "25",
                "--interval-ms",
                "1",
                "--page",
                "3",
            ])
            .expect("Failed to parse arguments");
            let mut output = Vec::new();
            app::run(&args, &mut output).expect("Failed to run review");
            String::from_utf8(output).expect("Report is not UTF-8")
        };

        let first = run_once();
        assert_eq!(first, run_once());
        assert!(first.starts_with("Transactions: 25\n"));
        assert!(!first.contains("more (showing"));
    }
}
