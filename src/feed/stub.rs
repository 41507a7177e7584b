//! Testing utilities for the flight feed
//!
//! Canned in-memory feed used by unit and integration tests: serves a fixed
//! record list or a fixed failure, and counts fetches so tests can verify
//! that configuration errors short-circuit before any network call.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use super::FlightFeed;
use crate::error::FunctionError;
use crate::models::FlightRecord;

pub struct StubFlightFeed {
    records: Vec<FlightRecord>,
    failure: Option<FunctionError>,
    fetch_count: Arc<RwLock<u64>>,
}

impl StubFlightFeed {
    pub fn with_records(records: Vec<FlightRecord>) -> Self {
        Self {
            records,
            failure: None,
            fetch_count: Arc::new(RwLock::new(0)),
        }
    }

    pub fn failing(failure: FunctionError) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(failure),
            fetch_count: Arc::new(RwLock::new(0)),
        }
    }

    pub fn fetch_count(&self) -> u64 {
        *self.fetch_count.read()
    }
}

#[async_trait]
impl FlightFeed for StubFlightFeed {
    async fn fetch(&self, _url: &str) -> Result<Vec<FlightRecord>, FunctionError> {
        *self.fetch_count.write() += 1;

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.records.clone()),
        }
    }
}
