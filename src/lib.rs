//! skippump: EMA/band signal generator that sits out pump-and-dump spikes.
//!
//! Hexagonal architecture: pure indicator and signal logic in [`domain`], port traits in
//! [`ports`], concrete CSV/INI implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
