//! Currency Validation
//!
//! Checks that pair text such as `EUR/USD` is well formed and made of known codes.

use crate::engine::currency::{CodeSet, KnownCodes};
use crate::engine::entry::pair::{CurrencyPair, PAIR_SEPARATOR};
use log::{debug, error};
use thiserror::Error;

/// Header label of the pair column. Accepted as a valid pair so a header line
/// reaching validation does not fail it.
pub const HEADER_PAIR_TOKEN: &str = "pair";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("currency pair {0:?} has no '/' separator")]
    MissingSeparator(String),

    #[error("currency pair {text:?} has {parts} codes, expected 2")]
    WrongCodeCount { text: String, parts: usize },

    #[error("unknown currency code {0:?}")]
    UnknownCode(String),
}

/// Validates currency codes and pairs against a known-code set
pub struct CodeValidator {
    codes: Box<dyn CodeSet>,
}

impl Default for CodeValidator {
    fn default() -> Self {
        Self::new(KnownCodes::iso4217())
    }
}

impl CodeValidator {
    pub fn new(codes: impl CodeSet + 'static) -> Self {
        Self {
            codes: Box::new(codes),
        }
    }

    /// Checks every code, stopping at the first unknown one
    pub fn check_currency_codes<'a, I>(&self, codes: I) -> Result<(), PairError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match codes.into_iter().find(|code| !self.codes.is_known_code(code)) {
            Some(unknown) => Err(PairError::UnknownCode(unknown.to_string())),
            None => Ok(()),
        }
    }

    /// Returns true iff every code is known. The failing code is not reported
    /// to the caller.
    pub fn is_currency_code<'a, I>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.check_currency_codes(codes) {
            Ok(()) => true,
            Err(e) => {
                error!("record file contains an invalid currency code");
                debug!("{}", e);
                false
            }
        }
    }

    /// Splits `DOMINANT/QUOTE` and checks both codes
    pub fn parse_currency_pair(&self, text: &str) -> Result<CurrencyPair, PairError> {
        if !text.contains(PAIR_SEPARATOR) {
            return Err(PairError::MissingSeparator(text.to_string()));
        }
        let codes: Vec<&str> = text.split(PAIR_SEPARATOR).collect();
        if codes.len() != 2 {
            return Err(PairError::WrongCodeCount {
                text: text.to_string(),
                parts: codes.len(),
            });
        }
        self.check_currency_codes(codes.iter().copied())?;
        Ok(CurrencyPair::new(codes[0], codes[1]))
    }

    /// Like [`parse_currency_pair`](Self::parse_currency_pair), but accepts the
    /// header token and returns a bare verdict.
    pub fn find_currency_pair(&self, text: &str) -> bool {
        if text == HEADER_PAIR_TOKEN {
            return true;
        }
        match self.parse_currency_pair(text) {
            Ok(_) => true,
            Err(PairError::UnknownCode(code)) => {
                error!("record file contains an invalid currency code");
                debug!("unknown currency code {:?}", code);
                false
            }
            Err(e) => {
                error!("record file contains an invalid currency pair: {}", e);
                false
            }
        }
    }
}
