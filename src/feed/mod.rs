//! Flight data feed access

mod client;
mod stub;

pub use client::{FlightFeed, HttpFlightFeed};
pub use stub::StubFlightFeed;
