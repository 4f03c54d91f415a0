//! Command line surface
//!
//! The input file is checked here so the loader only ever sees an existing,
//! non-empty `.csv` file.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Match buy and sell orders of individual currency pairs", long_about = None)]
pub struct Cli {
    /// Runtime config file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute trade orders when prices match or reject them
    Trade {
        /// Record file with id,account,pair,action,price rows
        file: PathBuf,

        /// Report file, defaults to <stem><output_suffix>.csv next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("{} is not a .csv file", .0.display())]
    NotCsv(PathBuf),

    #[error("{} is empty", .0.display())]
    Empty(PathBuf),

    #[error("report path {} is the input file", .0.display())]
    OverwritesInput(PathBuf),

    #[error("failed to inspect {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn check_input_file(path: &Path) -> Result<(), InputError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InputError::NotFound(path.to_path_buf()))
        }
        Err(source) => {
            return Err(InputError::Metadata {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if !metadata.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }
    if path.extension().map_or(true, |ext| ext != "csv") {
        return Err(InputError::NotCsv(path.to_path_buf()));
    }
    if metadata.len() == 0 {
        return Err(InputError::Empty(path.to_path_buf()));
    }
    Ok(())
}

/// Refuses a report path that resolves to the input file, which writing the
/// report would truncate. A report that does not exist yet cannot be the input.
pub fn check_report_path(input: &Path, report: &Path) -> Result<(), InputError> {
    match (std::fs::canonicalize(input), std::fs::canonicalize(report)) {
        (Ok(input), Ok(report)) if input == report => {
            Err(InputError::OverwritesInput(report))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_input_file() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("orders.csv");
        fs::write(&good, "1,acc1,EUR/USD,BUY,1.20\n").unwrap();
        assert!(check_input_file(&good).is_ok());

        assert!(matches!(
            check_input_file(&dir.path().join("missing.csv")),
            Err(InputError::NotFound(_))
        ));

        let text = dir.path().join("orders.txt");
        fs::write(&text, "1,acc1,EUR/USD,BUY,1.20\n").unwrap();
        assert!(matches!(check_input_file(&text), Err(InputError::NotCsv(_))));

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        assert!(matches!(check_input_file(&empty), Err(InputError::Empty(_))));

        assert!(matches!(
            check_input_file(dir.path()),
            Err(InputError::NotAFile(_))
        ));
    }

    #[test]
    fn test_check_report_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("orders.csv");
        fs::write(&input, "1,acc1,EUR/USD,BUY,1.20\n").unwrap();

        assert!(matches!(
            check_report_path(&input, &input),
            Err(InputError::OverwritesInput(_))
        ));
        assert!(matches!(
            check_report_path(&input, &dir.path().join(".").join("orders.csv")),
            Err(InputError::OverwritesInput(_))
        ));
        assert!(check_report_path(&input, &dir.path().join("orders_result.csv")).is_ok());

        let existing = dir.path().join("previous.csv");
        fs::write(&existing, "").unwrap();
        assert!(check_report_path(&input, &existing).is_ok());
    }

    #[test]
    fn test_parse_trade_command() {
        let cli = Cli::try_parse_from(["forex", "trade", "orders.csv", "-o", "out.csv"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        match cli.command {
            Command::Trade { file, output } => {
                assert_eq!(file, PathBuf::from("orders.csv"));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
        }
        assert!(Cli::try_parse_from(["forex", "trade"]).is_err());
    }
}
