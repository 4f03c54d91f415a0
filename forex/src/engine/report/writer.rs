use crate::engine::entry::Order;
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REPORT_HEADER: &str = "id,account,pair,action,price,match";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

/// Renders one report record, without line terminator
pub fn format_row(order: &Order) -> String {
    format!(
        "{},{},{},{},{},{}",
        order.id,
        order.account,
        order.pair,
        order.action,
        order.price,
        order.outcome()
    )
}

/// Writes the header and one record per order, in list order.
/// Returns the number of order records written.
pub fn write_orders<W: Write>(writer: &mut W, orders: &[Order]) -> Result<usize, ReportError> {
    writeln!(writer, "{}", REPORT_HEADER)?;
    for order in orders {
        writeln!(writer, "{}", format_row(order))?;
    }
    writer.flush()?;
    Ok(orders.len())
}

/// Writes the report file for a finished matching pass
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_write(&self, orders: &[Order]) -> Result<usize, ReportError> {
        let file = File::create(&self.path).map_err(|source| ReportError::Create {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        write_orders(&mut writer, orders)
    }

    /// Writes the report, logging instead of returning any failure.
    /// Rows already flushed before a failure stay on disk.
    pub fn write_report(&self, orders: &[Order]) -> bool {
        match self.try_write(orders) {
            Ok(rows) => {
                info!("wrote {} orders to {}", rows, self.path.display());
                true
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }
}
