//! Currency Module
//!
//! Known currency codes and the validator that checks currency pairs against them:
//! - `codes`: the known-code set (ISO 4217 plus configured extras)
//! - `validator`: pair and code validation used before any order is built

pub mod codes;
pub mod validator;

pub use codes::{CodeSet, KnownCodes};
pub use validator::{CodeValidator, PairError, HEADER_PAIR_TOKEN};
