//! Claim checker: one fetch, a six-field exact filter, an eligibility verdict
//!
//! Fail-fast throughout: a missing feed URL, an unusable upstream payload,
//! an empty match set, or a malformed matched record each abort the run with
//! its own error class. Nothing is retried and nothing is defaulted.

use tracing::{debug, info};

use crate::error::FunctionError;
use crate::feed::FlightFeed;
use crate::insurance::{CANCELLED_STATUS, CLAIM_DELAY_THRESHOLD_MINUTES};
use crate::models::{ClaimOutcome, ClaimQuery, FlightRecord};

/// How the result of a check is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimOutputMode {
    /// One `{isClaimable, delayMinutes}` entry per matching flight,
    /// in feed order, serialized as JSON text
    #[default]
    AllMatches,
    /// Only the first matching flight's delay, as a single integer
    FirstMatch,
}

/// Outcome of a claim check, shaped by [`ClaimOutputMode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimResult {
    Outcomes(Vec<ClaimOutcome>),
    DelayMinutes(u32),
}

/// Delay of 180 minutes or more, or a cancelled flight
pub fn is_claim_eligible(delay_minutes: u32, status: &str) -> bool {
    delay_minutes >= CLAIM_DELAY_THRESHOLD_MINUTES || status == CANCELLED_STATUS
}

/// Run one claim check.
///
/// The feed URL comes from the request's secrets and is validated before
/// the fetch capability is touched, so a missing secret never costs a
/// network round trip.
pub async fn check(
    query: &ClaimQuery,
    feed_url: Option<&str>,
    mode: ClaimOutputMode,
    feed: &dyn FlightFeed,
) -> Result<ClaimResult, FunctionError> {
    let url = feed_url.filter(|u| !u.is_empty()).ok_or_else(|| {
        FunctionError::Config("flight data URL is not set in secrets".to_string())
    })?;

    let records = feed.fetch(url).await?;
    debug!(records = records.len(), "flight feed payload received");

    // Exact match on all six fields, preserving feed order
    let matched: Vec<&FlightRecord> = records.iter().filter(|f| query.matches(f)).collect();

    if matched.is_empty() {
        return Err(FunctionError::NotFound(
            "no flights matching the provided parameters".to_string(),
        ));
    }

    info!(
        flight_number = %query.flight_number,
        matches = matched.len(),
        ?mode,
        "claim query matched"
    );

    match mode {
        ClaimOutputMode::AllMatches => {
            let outcomes = matched
                .iter()
                .map(|flight| {
                    let delay = valid_delay(flight)?;
                    Ok(ClaimOutcome {
                        is_claimable: is_claim_eligible(delay, &flight.status),
                        delay_minutes: delay,
                    })
                })
                .collect::<Result<Vec<_>, FunctionError>>()?;
            Ok(ClaimResult::Outcomes(outcomes))
        }
        ClaimOutputMode::FirstMatch => {
            let delay = valid_delay(matched[0])?;
            Ok(ClaimResult::DelayMinutes(delay))
        }
    }
}

/// A matched record with an absent, non-numeric, or negative delay is
/// malformed and terminal
fn valid_delay(flight: &FlightRecord) -> Result<u32, FunctionError> {
    flight.delay_minutes.ok_or_else(|| {
        FunctionError::Validation(format!(
            "invalid delayMinutes for flight {}",
            flight.flight_number
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::StubFlightFeed;

    fn query() -> ClaimQuery {
        ClaimQuery {
            flight_number: "AF456".to_string(),
            airline: "Air France".to_string(),
            departure_airport: "Charles de Gaulle Airport".to_string(),
            departure_datetime: "2025-01-05T19:00:00".to_string(),
            arrival_airport: "Toronto Pearson International Airport".to_string(),
            arrival_datetime: "2025-01-05T22:30:00".to_string(),
        }
    }

    fn matching_record(delay_minutes: Option<u32>, status: &str) -> FlightRecord {
        FlightRecord {
            flight_number: "AF456".to_string(),
            airline: "Air France".to_string(),
            departure_airport: "Charles de Gaulle Airport".to_string(),
            departure_time: "2025-01-05T19:00:00".to_string(),
            arrival_airport: "Toronto Pearson International Airport".to_string(),
            arrival_time: "2025-01-05T22:30:00".to_string(),
            delay_minutes,
            status: status.to_string(),
        }
    }

    fn other_record(flight_number: &str) -> FlightRecord {
        FlightRecord {
            flight_number: flight_number.to_string(),
            airline: "Air Canada".to_string(),
            departure_airport: "Toronto Pearson International Airport".to_string(),
            departure_time: "2025-01-06T08:00:00".to_string(),
            arrival_airport: "Vancouver International Airport".to_string(),
            arrival_time: "2025-01-06T10:15:00".to_string(),
            delay_minutes: Some(15),
            status: "On Time".to_string(),
        }
    }

    #[test]
    fn eligibility_threshold_and_cancellation() {
        assert!(!is_claim_eligible(179, "Delayed"));
        assert!(is_claim_eligible(180, "Delayed"));
        assert!(is_claim_eligible(0, "Cancelled"));
        assert!(!is_claim_eligible(0, "On Time"));
    }

    #[tokio::test]
    async fn missing_feed_url_fails_before_any_fetch() {
        let feed = StubFlightFeed::with_records(vec![matching_record(Some(200), "Delayed")]);

        for url in [None, Some("")] {
            let err = check(&query(), url, ClaimOutputMode::AllMatches, &feed)
                .await
                .unwrap_err();
            assert!(matches!(err, FunctionError::Config(_)));
        }
        assert_eq!(feed.fetch_count(), 0);
    }

    #[tokio::test]
    async fn upstream_failure_propagates_unchanged() {
        let feed = StubFlightFeed::failing(FunctionError::Upstream(
            "flight data not available in the response".to_string(),
        ));

        let err = check(&query(), Some("https://feed"), ClaimOutputMode::AllMatches, &feed)
            .await
            .unwrap_err();
        assert!(matches!(err, FunctionError::Upstream(_)));
        assert_eq!(feed.fetch_count(), 1);
    }

    #[tokio::test]
    async fn single_match_in_three_record_feed() {
        let feed = StubFlightFeed::with_records(vec![
            other_record("AC101"),
            matching_record(Some(200), "Delayed"),
            other_record("AC202"),
        ]);

        let result = check(&query(), Some("https://feed"), ClaimOutputMode::AllMatches, &feed)
            .await
            .unwrap();
        assert_eq!(
            result,
            ClaimResult::Outcomes(vec![ClaimOutcome {
                is_claimable: true,
                delay_minutes: 200,
            }])
        );

        let result = check(&query(), Some("https://feed"), ClaimOutputMode::FirstMatch, &feed)
            .await
            .unwrap();
        assert_eq!(result, ClaimResult::DelayMinutes(200));
    }

    #[tokio::test]
    async fn short_delay_match_is_not_claimable() {
        let feed = StubFlightFeed::with_records(vec![matching_record(Some(45), "Delayed")]);

        let result = check(&query(), Some("https://feed"), ClaimOutputMode::AllMatches, &feed)
            .await
            .unwrap();
        assert_eq!(
            result,
            ClaimResult::Outcomes(vec![ClaimOutcome {
                is_claimable: false,
                delay_minutes: 45,
            }])
        );
    }

    #[tokio::test]
    async fn cancelled_match_is_claimable_regardless_of_delay() {
        let feed = StubFlightFeed::with_records(vec![matching_record(Some(0), "Cancelled")]);

        let result = check(&query(), Some("https://feed"), ClaimOutputMode::AllMatches, &feed)
            .await
            .unwrap();
        assert_eq!(
            result,
            ClaimResult::Outcomes(vec![ClaimOutcome {
                is_claimable: true,
                delay_minutes: 0,
            }])
        );
    }

    #[tokio::test]
    async fn multiple_matches_preserve_feed_order() {
        let feed = StubFlightFeed::with_records(vec![
            matching_record(Some(45), "Delayed"),
            other_record("AC101"),
            matching_record(Some(200), "Delayed"),
        ]);

        let result = check(&query(), Some("https://feed"), ClaimOutputMode::AllMatches, &feed)
            .await
            .unwrap();
        assert_eq!(
            result,
            ClaimResult::Outcomes(vec![
                ClaimOutcome {
                    is_claimable: false,
                    delay_minutes: 45,
                },
                ClaimOutcome {
                    is_claimable: true,
                    delay_minutes: 200,
                },
            ])
        );

        // first-match mode takes the earliest match, not the most delayed
        let result = check(&query(), Some("https://feed"), ClaimOutputMode::FirstMatch, &feed)
            .await
            .unwrap();
        assert_eq!(result, ClaimResult::DelayMinutes(45));
    }

    #[tokio::test]
    async fn zero_matches_fail_with_not_found_in_both_modes() {
        let feed = StubFlightFeed::with_records(vec![other_record("AC101"), other_record("AC202")]);

        for mode in [ClaimOutputMode::AllMatches, ClaimOutputMode::FirstMatch] {
            let err = check(&query(), Some("https://feed"), mode, &feed)
                .await
                .unwrap_err();
            assert!(matches!(err, FunctionError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn empty_feed_fails_with_not_found() {
        let feed = StubFlightFeed::with_records(Vec::new());

        let err = check(&query(), Some("https://feed"), ClaimOutputMode::AllMatches, &feed)
            .await
            .unwrap_err();
        assert!(matches!(err, FunctionError::NotFound(_)));
    }

    #[tokio::test]
    async fn malformed_delay_on_matched_record_is_terminal_in_both_modes() {
        let feed = StubFlightFeed::with_records(vec![matching_record(None, "Delayed")]);

        for mode in [ClaimOutputMode::AllMatches, ClaimOutputMode::FirstMatch] {
            let err = check(&query(), Some("https://feed"), mode, &feed)
                .await
                .unwrap_err();
            assert!(matches!(err, FunctionError::Validation(_)));
        }
    }
}
