//! Runs one request against a unit and collects everything the caller of a
//! real request would see: captured terminal output plus either encoded
//! response bytes or an error string. Argument parsing happens here, before
//! the unit proper, so a malformed arg is a typed validation failure and
//! never a panic inside the computation.

use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::info;

use super::{FunctionSource, RequestConfig};
use crate::claim::{self, ClaimOutputMode, ClaimResult};
use crate::codec::{encode_string, encode_uint256, ReturnType};
use crate::error::FunctionError;
use crate::feed::FlightFeed;
use crate::insurance::{calculate, format_value, InsuranceVariant};
use crate::models::ClaimQuery;

/// What one simulated run produced
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// Console lines the unit printed before returning or failing
    pub captured_output: Vec<String>,
    pub response_bytes: Option<Vec<u8>>,
    pub error_string: Option<String>,
}

impl SimulationOutput {
    pub fn response_hexstring(&self) -> Option<String> {
        self.response_bytes
            .as_ref()
            .map(|bytes| format!("0x{}", hex::encode(bytes)))
    }
}

/// Simulate one request. Failures never escape as Err: they land in
/// `error_string`, paired with whatever output was captured before the
/// failure point, the way the real harness reports them.
pub async fn simulate(config: &RequestConfig, feed: &dyn FlightFeed) -> SimulationOutput {
    info!(source = ?config.source, args = config.args.len(), "simulating request");

    let mut captured = Vec::new();
    match run(config, feed, &mut captured).await {
        Ok(bytes) => SimulationOutput {
            captured_output: captured,
            response_bytes: Some(bytes),
            error_string: None,
        },
        Err(err) => SimulationOutput {
            captured_output: captured,
            response_bytes: None,
            error_string: Some(format!("{err:#}")),
        },
    }
}

async fn run(
    config: &RequestConfig,
    feed: &dyn FlightFeed,
    captured: &mut Vec<String>,
) -> Result<Vec<u8>> {
    match config.source {
        FunctionSource::CalculateInsurance { variant } => {
            run_calculate_insurance(config, variant, captured)
        }
        FunctionSource::CheckClaim { mode } => run_check_claim(config, mode, feed).await,
    }
}

fn run_calculate_insurance(
    config: &RequestConfig,
    variant: InsuranceVariant,
    captured: &mut Vec<String>,
) -> Result<Vec<u8>> {
    let delay: u32 = int_arg(&config.args, 0, "delay")?;
    let base_value: u64 = int_arg(&config.args, 1, "insurance value")?;
    let status = arg(&config.args, 2, "status")?;

    let value = calculate(variant, base_value, delay, status);
    captured.push(format!("Insurance Value: {}", format_value(value)));

    let bytes = match config.expected_return_type {
        // truncated toward zero before the fixed-width encoding
        ReturnType::Uint256 => encode_uint256(value.trunc() as u128).to_vec(),
        ReturnType::String => encode_string(&format_value(value)),
    };
    Ok(bytes)
}

async fn run_check_claim(
    config: &RequestConfig,
    mode: ClaimOutputMode,
    feed: &dyn FlightFeed,
) -> Result<Vec<u8>> {
    let query = ClaimQuery {
        flight_number: arg(&config.args, 0, "flight number")?.to_string(),
        airline: arg(&config.args, 1, "airline")?.to_string(),
        departure_airport: arg(&config.args, 2, "departure airport")?.to_string(),
        departure_datetime: arg(&config.args, 3, "departure datetime")?.to_string(),
        arrival_airport: arg(&config.args, 4, "arrival airport")?.to_string(),
        arrival_datetime: arg(&config.args, 5, "arrival datetime")?.to_string(),
    };

    let result = claim::check(
        &query,
        config.secrets.flight_data_url.as_deref(),
        mode,
        feed,
    )
    .await?;

    let bytes = match result {
        ClaimResult::Outcomes(outcomes) => {
            let json = serde_json::to_string(&outcomes)
                .context("failed to serialize claim results")?;
            encode_string(&json)
        }
        ClaimResult::DelayMinutes(delay) => encode_uint256(u128::from(delay)).to_vec(),
    };
    Ok(bytes)
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, FunctionError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| FunctionError::Validation(format!("missing argument {index} ({name})")))
}

fn int_arg<T: FromStr>(args: &[String], index: usize, name: &str) -> Result<T, FunctionError> {
    arg(args, index, name)?.parse().map_err(|_| {
        FunctionError::Validation(format!("argument {index} ({name}) is not a number"))
    })
}
