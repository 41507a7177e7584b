//! Flightclaim Backend Library
//!
//! Off-chain computation units for a flight-delay insurance oracle, plus a
//! local simulation harness. Exposes core modules for use by binaries and
//! tests.

pub mod claim;
pub mod codec;
pub mod error;
pub mod feed;
pub mod insurance;
pub mod models;
pub mod simulator;
