//! Match Logic Module
//!
//! This module implements the order pairing algorithm. Every order is compared
//! against every other order in file order and the first compatible counterpart
//! wins; resolved orders are never revisited.

pub mod matcher;

pub use matcher::{can_trade, MatchSummary, Matcher};
