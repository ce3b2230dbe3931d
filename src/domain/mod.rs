//! Core domain types and logic.

pub mod ohlcv;
pub mod indicator;
pub mod engine;
pub mod streaming;
pub mod rule_eval;
pub mod strategy;
pub mod analysis;
pub mod universe;
pub mod config_validation;
pub mod error;
