//! Mathematical utility functions for the energy cascade
//!
//! Rounding and loss-splitting rules shared by the calculator, the parameter
//! providers and the diagram labels.

use crate::constants::RESPIRATION_SHARE;

/// Assert that the deviation between two values is less than a threshold
///
/// This macro combines deviation calculation with assertion for cleaner test code.
/// It calculates the percentage deviation between `actual` and `expected`, then
/// asserts that this deviation is less than the specified `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Linear interpolation between two values
///
/// # Examples
/// ```
/// use trophic_cascade::math_utils::lerp;
///
/// assert_eq!(lerp(7.0, 15.0, 0.5), 11.0);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Round a value to a fixed number of decimal places
///
/// # Examples
/// ```
/// use trophic_cascade::math_utils::round_to_decimals;
///
/// assert_eq!(round_to_decimals(12.34, 1), 12.3);
/// assert_eq!(round_to_decimals(7.05, 0), 7.0);
/// ```
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Split a loss into (respiration, decomposition)
///
/// Respiration is the rounded 75% share, capped at the loss itself so that a
/// loss under one unit cannot round past itself. Decomposition takes whatever
/// is left, so the two always add back up to `total_loss` and neither is negative.
///
/// # Examples
/// ```
/// use trophic_cascade::math_utils::split_loss;
///
/// assert_eq!(split_loss(800.0), (600.0, 200.0));
/// assert_eq!(split_loss(7.0), (5.0, 2.0));
/// ```
pub fn split_loss(total_loss: f64) -> (f64, f64) {
    let respiration = (RESPIRATION_SHARE * total_loss).round().min(total_loss);
    (respiration, total_loss - respiration)
}

/// Integer flavour of [`split_loss`] used by the display view
pub fn split_loss_units(total_loss: u64) -> (u64, u64) {
    let respiration = (RESPIRATION_SHARE * total_loss as f64).round() as u64;
    (respiration, total_loss - respiration)
}

/// Calculate the percentage deviation between two values
///
/// Uses the expected value as the reference (base) for the percentage calculation.
///
/// # Examples
/// ```
/// use trophic_cascade::math_utils::deviation;
///
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(7.0, 15.0, 0.25), 9.0);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(12.345, 0), 12.0);
        assert_eq!(round_to_decimals(12.36, 1), 12.4);
        assert_eq!(round_to_decimals(14.96, 1), 15.0);
        assert_eq!(round_to_decimals(3.14159, 2), 3.14);
    }

    #[test]
    fn test_split_loss() {
        assert_eq!(split_loss(800.0), (600.0, 200.0));
        assert_eq!(split_loss(160.0), (120.0, 40.0));
        assert_eq!(split_loss(32.0), (24.0, 8.0));
        // 0.75 * 7 = 5.25 rounds down to 5
        assert_eq!(split_loss(7.0), (5.0, 2.0));
        assert_eq!(split_loss(0.0), (0.0, 0.0));
        // 0.75 * 0.8 = 0.6 would round to 1
        assert_eq!(split_loss(0.8), (0.8, 0.0));
        assert_eq!(split_loss(0.5), (0.0, 0.5));
    }

    #[test]
    fn test_split_loss_units() {
        assert_eq!(split_loss_units(7), (5, 2));
        assert_eq!(split_loss_units(2), (2, 0)); // 1.5 rounds away from zero
        assert_eq!(split_loss_units(1), (1, 0));
        assert_eq!(split_loss_units(0), (0, 0));
        for loss in 0..500u64 {
            let (r, d) = split_loss_units(loss);
            assert_eq!(r + d, loss);
        }
    }

    #[test]
    fn test_deviation() {
        assert_eq!(deviation(105.0, 100.0), 5.0);
        assert_eq!(deviation(100.0, 100.0), 0.0);
        assert_eq!(deviation(0.0, 0.0), 0.0);
        assert_eq!(deviation(10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_assert_deviation_macro() {
        assert_deviation!(105.0, 100.0, 10.0);
        assert_deviation!(2.0 * 52.5, 100.0, 10.0);
        assert_deviation!(1530.0, 1500.0, 5.0, "energy should be within 5%");
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_fails() {
        assert_deviation!(120.0, 100.0, 10.0);
    }
}
