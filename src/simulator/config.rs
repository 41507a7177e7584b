//! Request configuration: which unit to run, with which args and secrets
//!
//! Each configuration fixes one return encoding per deployment; the prebuilt
//! configurations below mirror the shipped request setups and keep the
//! encoding coherent with the unit's output mode.

use crate::claim::ClaimOutputMode;
use crate::codec::ReturnType;
use crate::insurance::InsuranceVariant;

/// Which computation unit a request runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionSource {
    CalculateInsurance { variant: InsuranceVariant },
    CheckClaim { mode: ClaimOutputMode },
}

/// Named secrets supplied to a run, never passed as positional args
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub flight_data_url: Option<String>,
}

/// One simulated request: unit, positional string args, secrets, and the
/// return encoding the caller expects back
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub source: FunctionSource,
    pub args: Vec<String>,
    pub secrets: Secrets,
    pub expected_return_type: ReturnType,
}

impl RequestConfig {
    /// Claim requests derive their encoding from the output mode:
    /// the match list is JSON text, a single delay is a uint256.
    pub fn for_claim(mode: ClaimOutputMode, args: Vec<String>, secrets: Secrets) -> Self {
        let expected_return_type = match mode {
            ClaimOutputMode::AllMatches => ReturnType::String,
            ClaimOutputMode::FirstMatch => ReturnType::Uint256,
        };
        Self {
            source: FunctionSource::CheckClaim { mode },
            args,
            secrets,
            expected_return_type,
        }
    }
}

/// Shipped insurance request: 300 minutes of delay on a 10000 policy.
/// Args are positional: delay, insurance value, status.
pub fn calculate_insurance_config() -> RequestConfig {
    RequestConfig {
        source: FunctionSource::CalculateInsurance {
            variant: InsuranceVariant::StatusAware,
        },
        args: vec![
            "300".to_string(),
            "10000".to_string(),
            "Delayed".to_string(),
        ],
        secrets: Secrets::default(),
        expected_return_type: ReturnType::String,
    }
}

/// Shipped claim request for flight AF456 CDG -> YYZ.
/// Args are positional: flight number, airline, departure airport,
/// departure datetime, arrival airport, arrival datetime.
pub fn check_claim_config(flight_data_url: Option<String>) -> RequestConfig {
    RequestConfig::for_claim(
        ClaimOutputMode::AllMatches,
        vec![
            "AF456".to_string(),
            "Air France".to_string(),
            "Charles de Gaulle Airport".to_string(),
            "2025-01-05T19:00:00".to_string(),
            "Toronto Pearson International Airport".to_string(),
            "2025-01-05T22:30:00".to_string(),
        ],
        Secrets { flight_data_url },
    )
}
