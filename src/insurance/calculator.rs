//! Adjusted insurance value from flight delay and status
//!
//! Pure calculation, no I/O. Inputs are parsed and validated by the
//! simulation harness before this module is entered.

/// Flight status that doubles the payout outright
pub const CANCELLED_STATUS: &str = "Cancelled";

/// Delay at or beyond which the surcharge schedule starts
pub const CLAIM_DELAY_THRESHOLD_MINUTES: u32 = 180;

/// Width of one surcharge interval beyond the threshold
pub const SURCHARGE_INTERVAL_MINUTES: u32 = 30;

/// Surcharge per completed or partial interval (5%, non-compounding)
pub const SURCHARGE_RATE: f64 = 0.05;

/// Which of the two observed calculation behaviors to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsuranceVariant {
    /// Cancellation doubles the payout and takes precedence over the
    /// delay surcharge. This is the intended behavior and the default.
    #[default]
    StatusAware,
    /// Superseded behavior that ignores cancellation entirely and only
    /// applies the delay surcharge. Kept selectable so deployments that
    /// shipped it stay reproducible.
    DelayOnly,
}

/// Compute the adjusted insurance value.
///
/// Status-aware rules:
/// - status "Cancelled": `base_value * 2`, delay ignored
/// - delay >= 180: 5% of `base_value` per started 30-minute interval
///   beyond 180 minutes, added once (no compounding)
/// - otherwise: `base_value` unchanged
///
/// A delay of exactly 180 starts zero intervals and leaves the value
/// unchanged; 181 through 210 count as one interval.
pub fn calculate(variant: InsuranceVariant, base_value: u64, delay: u32, status: &str) -> f64 {
    let base = base_value as f64;

    if variant == InsuranceVariant::StatusAware && status == CANCELLED_STATUS {
        return base * 2.0;
    }

    if delay >= CLAIM_DELAY_THRESHOLD_MINUTES {
        let intervals =
            (delay - CLAIM_DELAY_THRESHOLD_MINUTES).div_ceil(SURCHARGE_INTERVAL_MINUTES);
        return base + intervals as f64 * base * SURCHARGE_RATE;
    }

    base
}

/// Decimal rendering of the full value: whole numbers without a trailing
/// ".0", fractional values as-is.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i128)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_below_threshold() {
        for delay in [0, 1, 60, 179] {
            assert_eq!(
                calculate(InsuranceVariant::StatusAware, 10000, delay, "Delayed"),
                10000.0
            );
        }
    }

    #[test]
    fn threshold_exactly_starts_zero_intervals() {
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 180, "Delayed"),
            10000.0
        );
    }

    #[test]
    fn partial_interval_counts_as_one() {
        // 181 through 210 are all one interval
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 181, "Delayed"),
            10500.0
        );
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 210, "Delayed"),
            10500.0
        );
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 211, "Delayed"),
            11000.0
        );
    }

    #[test]
    fn three_hundred_minutes_is_four_intervals() {
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 300, "Delayed"),
            12000.0
        );
    }

    #[test]
    fn cancellation_doubles_and_overrides_delay() {
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 300, "Cancelled"),
            20000.0
        );
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 0, "Cancelled"),
            20000.0
        );
    }

    #[test]
    fn cancellation_check_is_case_sensitive() {
        assert_eq!(
            calculate(InsuranceVariant::StatusAware, 10000, 0, "cancelled"),
            10000.0
        );
    }

    #[test]
    fn delay_only_variant_ignores_cancellation() {
        assert_eq!(
            calculate(InsuranceVariant::DelayOnly, 10000, 0, "Cancelled"),
            10000.0
        );
        // surcharge still applies
        assert_eq!(
            calculate(InsuranceVariant::DelayOnly, 10000, 300, "Cancelled"),
            12000.0
        );
    }

    #[test]
    fn format_value_drops_trailing_zero_fraction() {
        assert_eq!(format_value(12000.0), "12000");
        assert_eq!(format_value(10500.5), "10500.5");
    }
}
