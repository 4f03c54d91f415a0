//! Record Loader
//!
//! Validates the whole record file before building any order, then turns every
//! data row into an unresolved [`Order`]. Header rows are skipped.

use crate::engine::currency::{CodeValidator, PairError};
use crate::engine::entry::{Order, OrderAction, OrderId};
use crate::engine::records::row::{read_rows_from_path, RawRow};
use log::{error, info};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Labels of the header row, in column order
pub const CATEGORY_LABELS: [&str; 5] = ["id", "account", "pair", "action", "price"];

const ID_COLUMN: usize = 0;
const ACCOUNT_COLUMN: usize = 1;
const PAIR_COLUMN: usize = 2;
const ACTION_COLUMN: usize = 3;
const PRICE_COLUMN: usize = 4;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: field {field} is empty")]
    EmptyField { line: usize, field: usize },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {source}")]
    InvalidPair {
        line: usize,
        #[source]
        source: PairError,
    },

    #[error("line {line}: order id {value:?} is not an integer")]
    InvalidId { line: usize, value: String },

    #[error("line {line}: price {value:?} is not a number")]
    InvalidPrice { line: usize, value: String },

    #[error("line {line}: duplicate order id {id}")]
    DuplicateId { line: usize, id: OrderId },
}

/// Trims every field. A field left empty by trimming fails the row.
pub fn clean_row(row: &RawRow) -> Result<Vec<String>, RecordError> {
    row.fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let field = field.trim();
            if field.is_empty() {
                Err(RecordError::EmptyField {
                    line: row.line,
                    field: index + 1,
                })
            } else {
                Ok(field.to_string())
            }
        })
        .collect()
}

/// True for the header row: any field equal to a category label
pub fn is_category_row<S: AsRef<str>>(fields: &[S]) -> bool {
    fields
        .iter()
        .any(|field| CATEGORY_LABELS.contains(&field.as_ref()))
}

fn check_field_count(line: usize, fields: &[String]) -> Result<(), RecordError> {
    if fields.len() != CATEGORY_LABELS.len() {
        return Err(RecordError::FieldCount {
            line,
            expected: CATEGORY_LABELS.len(),
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_price(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Loads orders from a record file, checking every currency pair with the
/// wrapped validator
pub struct RecordLoader {
    validator: CodeValidator,
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new(CodeValidator::default())
    }
}

impl RecordLoader {
    /// Creates a loader that validates pairs with `validator`
    pub fn new(validator: CodeValidator) -> Self {
        Self { validator }
    }

    /// Checks every row's shape and currency pair before any order is built
    pub fn validate_rows(&self, rows: &[RawRow]) -> Result<(), RecordError> {
        for row in rows {
            let fields = clean_row(row)?;
            check_field_count(row.line, &fields)?;
            if is_category_row(&fields) {
                continue;
            }
            self.validator
                .parse_currency_pair(&fields[PAIR_COLUMN])
                .map_err(|source| RecordError::InvalidPair {
                    line: row.line,
                    source,
                })?;
        }
        Ok(())
    }

    /// Boolean form of [`validate_rows`](Self::validate_rows); the failure is logged
    pub fn is_valid_file(&self, rows: &[RawRow]) -> bool {
        match self.validate_rows(rows) {
            Ok(()) => true,
            Err(e) => {
                error!("invalid record file: {}", e);
                false
            }
        }
    }

    /// Builds one unresolved order per data row, in file order.
    /// Any row that does not parse fails the whole load.
    pub fn store_orders(&self, rows: &[RawRow]) -> Result<Vec<Order>, RecordError> {
        let mut orders = Vec::with_capacity(rows.len());
        let mut seen_ids = HashSet::new();

        for row in rows {
            let fields = clean_row(row)?;
            if is_category_row(&fields) {
                continue;
            }
            check_field_count(row.line, &fields)?;

            let id_text = &fields[ID_COLUMN];
            let id: OrderId = id_text.parse().map_err(|_| RecordError::InvalidId {
                line: row.line,
                value: id_text.clone(),
            })?;
            if !seen_ids.insert(id) {
                return Err(RecordError::DuplicateId { line: row.line, id });
            }

            let pair = self
                .validator
                .parse_currency_pair(&fields[PAIR_COLUMN])
                .map_err(|source| RecordError::InvalidPair {
                    line: row.line,
                    source,
                })?;

            let price_text = &fields[PRICE_COLUMN];
            let price = parse_price(price_text).ok_or_else(|| RecordError::InvalidPrice {
                line: row.line,
                value: price_text.clone(),
            })?;

            orders.push(Order::new(
                id,
                fields[ACCOUNT_COLUMN].clone(),
                pair,
                OrderAction::parse(&fields[ACTION_COLUMN]),
                price,
            ));
        }

        Ok(orders)
    }

    /// Reads, validates and loads the record file at `path`
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Order>, RecordError> {
        let rows = read_rows_from_path(path.as_ref())?;
        self.validate_rows(&rows)?;
        let orders = self.store_orders(&rows)?;
        info!(
            "loaded {} orders from {}",
            orders.len(),
            path.as_ref().display()
        );
        Ok(orders)
    }
}
