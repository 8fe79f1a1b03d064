//! Result rounding and display formatting.
//!
//! Results are rounded to a fixed number of decimal places with a
//! compensated routine that counters binary representation error, then
//! rendered either as a plain decimal or, past a magnitude threshold, in
//! normalized exponential notation.

use serde::{Deserialize, Serialize};

/// Default number of decimal places kept in results.
pub const DEFAULT_PRECISION: u32 = 3;

/// Default magnitude at which results switch to exponential notation.
pub const DEFAULT_EXPONENT_THRESHOLD: f64 = 1e8;

/// Default number of fractional digits in exponential notation.
pub const DEFAULT_EXPONENT_DIGITS: usize = 3;

/// Scaled magnitude past which a value carries no fractional digits worth rounding.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round half toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round `num` to `scale` decimal places, compensating for representation error.
///
/// A first pass rounds half-up. When the value was rounded down, the residual
/// is re-examined one digit further: a residual that only misses the halfway
/// point through representation error (e.g. `1.0005` stored as
/// `1.000499999...`) nudges the result up by one unit in the last place.
///
/// Non-finite input is returned unchanged, and so is input whose scaled value
/// reaches `1e15` or overflows: no fractional digits survive at that magnitude.
///
/// ```rust
/// use chaincalc::format::round_number;
///
/// assert_eq!(round_number(1.0 / 3.0, 3), 0.333);
/// assert_eq!(round_number(0.1 + 0.2, 3), 0.3);
/// assert_eq!(round_number(1.0005, 3), 1.001);
/// assert_eq!(round_number(-1e306, 3), -1e306);
/// ```
pub fn round_number(num: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    let scaled = num * factor;
    if !scaled.is_finite() || scaled.abs() >= ROUNDING_LIMIT {
        return num;
    }
    let mut steps = round_half_up(scaled);
    let residual = num - steps / factor;
    if residual > 0.0 {
        // Integer step count keeps the result on the k / 10^scale grid.
        steps += (2.0 * round_half_up(residual * factor * 10.0) / 10.0).floor();
    }
    steps / factor
}

/// Display rules for computed results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub precision: u32,
    pub exponent_threshold: f64,
    pub exponent_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            exponent_threshold: DEFAULT_EXPONENT_THRESHOLD,
            exponent_digits: DEFAULT_EXPONENT_DIGITS,
        }
    }
}

impl NumberFormat {
    /// Round and render `value`.
    ///
    /// ```rust
    /// use chaincalc::format::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.format(8.0), "8");
    /// assert_eq!(format.format(123_456_789.0), "1.235e+8");
    /// assert_eq!(format.format(f64::INFINITY), "Infinity");
    /// ```
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }

        let rounded = round_number(value, self.precision);
        if rounded == 0.0 {
            return "0".to_string();
        }
        if rounded.abs() >= self.exponent_threshold {
            return exponential(rounded, self.exponent_digits);
        }
        rounded.to_string()
    }
}

/// Normalized exponential notation with an explicit exponent sign.
fn exponential(value: f64, digits: usize) -> String {
    let raw = format!("{:.*e}", digits, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Round and render `value` with the default display rules.
pub fn format_result(value: f64) -> String {
    NumberFormat::default().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_positive_infinity_tiebreak() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn rounds_to_scale() {
        assert_eq!(round_number(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_number(12.0, 3), 12.0);
        assert_eq!(round_number(-1.0 / 3.0, 3), -0.333);
    }

    #[test]
    fn compensates_borderline_residuals() {
        assert_eq!(round_number(1.0005, 3), 1.001);
        assert_eq!(round_number(1.00049, 3), 1.001);
        assert_eq!(round_number(1.00044, 3), 1.0);
        assert_eq!(round_number(1.0004, 3), 1.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(round_number(f64::INFINITY, 3), f64::INFINITY);
        assert!(round_number(f64::NAN, 3).is_nan());
    }

    #[test]
    fn huge_values_are_left_unrounded() {
        assert_eq!(round_number(1e306, 3), 1e306);
        assert_eq!(round_number(-1e306, 3), -1e306);
        assert_eq!(round_number(f64::MAX, 3), f64::MAX);
        assert_eq!(round_number(f64::MIN, 10), f64::MIN);
        assert_eq!(round_number(4_503_599_627_370_497.0, 3), 4_503_599_627_370_497.0);
    }

    #[test]
    fn plain_results_drop_trailing_zeros() {
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(1.0 / 3.0), "0.333");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(-4.25), "-4.25");
    }

    #[test]
    fn tiny_results_render_as_zero() {
        assert_eq!(format_result(0.0001), "0");
        assert_eq!(format_result(-0.0001), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn large_results_use_exponential_notation() {
        assert_eq!(format_result(1e8), "1.000e+8");
        assert_eq!(format_result(123_456_789.0), "1.235e+8");
        assert_eq!(format_result(-250_000_000.0), "-2.500e+8");
        assert_eq!(format_result(99_999_999.0), "99999999");
    }

    #[test]
    fn magnitudes_near_the_f64_limit_stay_finite() {
        assert_eq!(format_result(1e306), "1.000e+306");
        assert_eq!(format_result(-1e306), "-1.000e+306");
        assert_eq!(format_result(f64::MAX), "1.798e+308");
        assert_eq!(format_result(f64::MIN), "-1.798e+308");
    }

    #[test]
    fn non_finite_results_use_platform_names() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn custom_format_respects_settings() {
        let format = NumberFormat {
            precision: 1,
            exponent_threshold: 1000.0,
            exponent_digits: 1,
        };
        assert_eq!(format.format(0.26), "0.3");
        assert_eq!(format.format(1234.0), "1.2e+3");
    }

    #[test]
    fn exponential_keeps_negative_exponents() {
        assert_eq!(exponential(0.00012, 2), "1.20e-4");
    }
}
