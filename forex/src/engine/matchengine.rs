//! Match Engine
//!
//! Runs one record file through validation, loading, matching and reporting.
//! A record error aborts the run before matching and no report is written;
//! report failures are logged by the writer and do not fail the run.

pub use super::entry::{MatchOutcome, Order};
pub use super::matchlogic::{MatchSummary, Matcher};
pub use super::records::{RecordError, RecordLoader};
pub use super::report::ReportWriter;

use super::currency::CodeValidator;
use log::info;
use std::path::Path;

/// Result of a completed run
#[derive(Debug)]
pub struct TradeRun {
    /// Every loaded order with its final outcome, in file order
    pub orders: Vec<Order>,
    pub summary: MatchSummary,
    /// Whether the report was written in full
    pub report_written: bool,
}

#[derive(Default)]
pub struct MatchEngine {
    loader: RecordLoader,
    matcher: Matcher,
}

impl MatchEngine {
    pub fn new(validator: CodeValidator) -> MatchEngine {
        MatchEngine {
            loader: RecordLoader::new(validator),
            matcher: Matcher::new(),
        }
    }

    /// Loads and matches the record file without writing a report
    pub fn match_file<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> Result<(Vec<Order>, MatchSummary), RecordError> {
        let mut orders = self.loader.load_file(input)?;
        let summary = self.matcher.match_orders(&mut orders);
        info!(
            "matched {} orders into {} trades, rejected {}",
            summary.matched,
            summary.trades(),
            summary.rejected
        );
        Ok((orders, summary))
    }

    pub fn run<P: AsRef<Path>>(
        &self,
        input: P,
        report: &ReportWriter,
    ) -> Result<TradeRun, RecordError> {
        let (orders, summary) = self.match_file(input)?;
        let report_written = report.write_report(&orders);
        Ok(TradeRun {
            orders,
            summary,
            report_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::currency::KnownCodes;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("orders.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    fn run(contents: &str) -> (TempDir, PathBuf, Result<TradeRun, RecordError>) {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, contents);
        let output = dir.path().join("orders_result.csv");
        let result = MatchEngine::default().run(&input, &ReportWriter::new(&output));
        (dir, output, result)
    }

    fn report_lines(output: &Path) -> Vec<String> {
        fs::read_to_string(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_matched_pair() {
        let (_dir, output, result) = run(
            "id,account,pair,action,price\n1,acc1,EUR/USD,BUY,1.20\n2,acc2,EUR/USD,SELL,1.10\n",
        );
        let run = result.unwrap();
        assert!(run.report_written);
        assert_eq!(run.summary.trades(), 1);
        assert_eq!(
            report_lines(&output),
            vec![
                "id,account,pair,action,price,match",
                "1,acc1,EUR/USD,BUY,1.20,2",
                "2,acc2,EUR/USD,SELL,1.10,1",
            ]
        );
    }

    #[test]
    fn test_buyer_below_ask() {
        let (_dir, output, result) =
            run("1,acc1,EUR/USD,BUY,1.00\n2,acc2,EUR/USD,SELL,1.10\n");
        assert_eq!(result.unwrap().summary.rejected, 2);
        assert_eq!(
            report_lines(&output)[1..],
            [
                "1,acc1,EUR/USD,BUY,1.00,REJECTED",
                "2,acc2,EUR/USD,SELL,1.10,REJECTED",
            ]
        );
    }

    #[test]
    fn test_same_account() {
        let (_dir, output, result) =
            run("1,acc1,EUR/USD,BUY,1.20\n2,acc1,EUR/USD,SELL,1.10\n");
        assert_eq!(result.unwrap().summary.rejected, 2);
        assert!(report_lines(&output)[1..]
            .iter()
            .all(|line| line.ends_with(",REJECTED")));
    }

    #[test]
    fn test_malformed_pair_aborts_without_report() {
        let (_dir, output, result) = run(
            "1,acc1,EUR/USD,BUY,1.20\n2,acc2,EUR/USD,SELL,1.10\n3,acc3,EU/US,BUY,1.0\n",
        );
        assert!(matches!(result, Err(RecordError::InvalidPair { line: 3, .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_bad_price_aborts_without_report() {
        let (_dir, output, result) = run("1,acc1,EUR/USD,BUY,abc\n");
        assert!(matches!(result, Err(RecordError::InvalidPrice { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_first_candidate_wins() {
        let (_dir, output, result) = run(
            "1,acc1,EUR/USD,BUY,1.20\n2,acc2,EUR/USD,SELL,1.10\n3,acc3,EUR/USD,SELL,1.05\n",
        );
        let run = result.unwrap();
        assert_eq!(run.orders[0].outcome(), MatchOutcome::MatchedWith(2));
        assert_eq!(run.orders[2].outcome(), MatchOutcome::Rejected);
        assert_eq!(report_lines(&output)[3], "3,acc3,EUR/USD,SELL,1.05,REJECTED");
    }

    #[test]
    fn test_report_failure_does_not_fail_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "1,acc1,EUR/USD,BUY,1.20\n2,acc2,EUR/USD,SELL,1.10\n");
        let report = ReportWriter::new(dir.path().join("missing").join("out.csv"));

        let run = MatchEngine::default().run(&input, &report).unwrap();
        assert!(!run.report_written);
        assert_eq!(run.summary.matched, 2);
    }

    #[test]
    fn test_extra_codes() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "1,acc1,BTC/USD,BUY,65000\n2,acc2,BTC/USD,SELL,64000\n");
        let engine = MatchEngine::new(CodeValidator::new(
            KnownCodes::iso4217().with_extra_codes(["BTC"]),
        ));

        let (orders, summary) = engine.match_file(&input).unwrap();
        assert_eq!(summary.trades(), 1);
        assert_eq!(orders[1].outcome(), MatchOutcome::MatchedWith(1));
        assert!(MatchEngine::default().match_file(&input).is_err());
    }
}
