//! Currency Pair Types
//!
//! A traded pair is written `DOMINANT/QUOTE`, e.g. `EUR/USD`.

use std::fmt;

/// Separator between the dominant and quote codes
pub const PAIR_SEPARATOR: char = '/';

/// Represents a currency pair made of two known currency codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    /// Dominant (base) currency code, e.g. "EUR"
    pub dominant: String,
    /// Quote currency code, e.g. "USD"
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(dominant: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            dominant: dominant.into(),
            quote: quote.into(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.dominant, PAIR_SEPARATOR, self.quote)
    }
}
