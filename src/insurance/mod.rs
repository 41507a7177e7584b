//! Insurance payout calculation

mod calculator;

pub use calculator::{
    calculate, format_value, InsuranceVariant, CANCELLED_STATUS,
    CLAIM_DELAY_THRESHOLD_MINUTES, SURCHARGE_INTERVAL_MINUTES, SURCHARGE_RATE,
};
