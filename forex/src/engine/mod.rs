//! Match Engine Module
//!
//! This module contains the components of the order matching pipeline:
//! - `currency`: Known currency codes and pair validation
//! - `entry`: Order and currency pair definitions
//! - `records`: Loading the record file into orders
//! - `matchlogic`: The pairing algorithm
//! - `report`: Writing the final outcome of every order
//! - `matchengine`: The pipeline tying the stages together

pub mod currency;
pub mod entry;
pub mod matchengine;
pub mod matchlogic;
pub mod records;
pub mod report;
