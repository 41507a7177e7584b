//! HTTP fetch capability for the flight data feed
//!
//! One GET per invocation, `accept: application/json`. Timeout and
//! cancellation policy live entirely in the HTTP client; the claim checker
//! imposes no retry of its own, so any transport failure surfaces
//! immediately as an upstream error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::FunctionError;
use crate::models::FlightRecord;

/// Injected fetch capability: the single seam the claim checker suspends on
#[async_trait]
pub trait FlightFeed: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<FlightRecord>, FunctionError>;
}

/// reqwest-backed feed client
#[derive(Clone)]
pub struct HttpFlightFeed {
    client: Client,
}

impl HttpFlightFeed {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FlightFeed for HttpFlightFeed {
    async fn fetch(&self, url: &str) -> Result<Vec<FlightRecord>, FunctionError> {
        let started = Utc::now();

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FunctionError::Upstream(format!("flight data request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(FunctionError::Upstream(format!(
                "flight data request returned {}",
                response.status()
            )));
        }

        let records: Vec<FlightRecord> = response.json().await.map_err(|_| {
            FunctionError::Upstream("flight data not available in the response".to_string())
        })?;

        debug!(
            count = records.len(),
            elapsed_ms = (Utc::now() - started).num_milliseconds(),
            "flight feed fetched"
        );

        Ok(records)
    }
}
