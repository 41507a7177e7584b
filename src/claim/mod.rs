//! Claim eligibility checking against the external flight feed

mod checker;

pub use checker::{check, is_claim_eligible, ClaimOutputMode, ClaimResult};
