//! Data model for the flight feed and claim queries

use serde::{Deserialize, Deserializer, Serialize};

/// One flight as reported by the external data feed.
///
/// Ephemeral: lives for the duration of a single invocation, never mutated.
/// `delay_minutes` is deserialized leniently so a single malformed field
/// surfaces as a per-record validation failure instead of rejecting the
/// whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    /// ISO-8601-like, compared as an opaque string
    pub departure_time: String,
    pub arrival_airport: String,
    pub arrival_time: String,
    #[serde(default, deserialize_with = "lenient_delay_minutes")]
    pub delay_minutes: Option<u32>,
    /// e.g. "Delayed", "Cancelled", "On Time"
    pub status: String,
}

/// Accepts a non-negative integer; anything else (absent, string, float,
/// negative) becomes `None` and is judged when the record is actually used.
fn lenient_delay_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|v| u32::try_from(v).ok()))
}

/// Caller-supplied filter key: exact match on all six identity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimQuery {
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    pub departure_datetime: String,
    pub arrival_airport: String,
    pub arrival_datetime: String,
}

impl ClaimQuery {
    /// Logical AND of six case-sensitive string equalities.
    /// No trimming, no normalization, no partial matching.
    pub fn matches(&self, flight: &FlightRecord) -> bool {
        flight.flight_number == self.flight_number
            && flight.airline == self.airline
            && flight.departure_airport == self.departure_airport
            && flight.departure_time == self.departure_datetime
            && flight.arrival_airport == self.arrival_airport
            && flight.arrival_time == self.arrival_datetime
    }
}

/// One entry of the mode-A claim result, serialized to the feed's casing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOutcome {
    pub is_claimable: bool,
    pub delay_minutes: u32,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret feed URL; absent means ClaimChecker fails with a config error
    pub flight_data_url: Option<String>,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let flight_data_url = std::env::var("FLIGHT_DATA_URL")
            .ok()
            .filter(|url| !url.is_empty());

        let http_timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(10);

        Ok(Self {
            flight_data_url,
            http_timeout_secs,
        })
    }
}
