//! Numeric helpers used by every pricing formula.
//!
//! All functions here are total: malformed or non-finite input collapses to
//! zero (or the given fallback) instead of failing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{CM_PER_INCH, ROUNDING_EPS, ROUNDING_THRESHOLD};

/// Leading decimal number, dot separator (commas are normalized first).
static NUMBER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)").expect("valid number regex"));

/// `P` followed by optional whitespace and a decimal pitch in millimeters.
static PITCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)p\s*(\d+(?:[.,]\d+)?)").expect("valid pitch regex"));

/// Parse a number typed by a user, accepting `,` or `.` as decimal separator.
///
/// Trailing text after the number is ignored (`"3 m"` is 3). Returns
/// `fallback` when no finite number can be read.
pub fn parse_lenient_number(raw: &str, fallback: f64) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    NUMBER_PREFIX
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(fallback)
}

/// Round up only when the fractional part reaches 0.51.
///
/// `2.50` gives 2 and `2.51` gives 3. This is deliberately not standard
/// rounding; display values of diagonals go through it.
pub fn round_half_up_at_51(n: f64) -> f64 {
    if !n.is_finite() {
        return 0.0;
    }
    let floor = n.floor();
    if n - floor + ROUNDING_EPS >= ROUNDING_THRESHOLD {
        n.ceil()
    } else {
        floor
    }
}

/// Standard rounding to the nearest integer, halves toward +infinity.
pub fn round_half_up(n: f64) -> f64 {
    if !n.is_finite() {
        return 0.0;
    }
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Extract the pixel pitch in millimeters from a product label.
///
/// `"P3.91 haute luminosité"` gives 3.91; a label without a pitch gives 0.
pub fn extract_pitch_millimeters(label: &str) -> f64 {
    PITCH
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_lenient_number(m.as_str(), 0.0))
        .unwrap_or(0.0)
}

/// Diagonal of a `width` x `height` panel (meters) in centimeters.
pub fn compute_diagonal_cm(width_m: f64, height_m: f64) -> f64 {
    finite_or_zero((width_m * width_m + height_m * height_m).sqrt() * 100.0)
}

/// Convert centimeters to inches.
pub fn cm_to_inches(cm: f64) -> f64 {
    finite_or_zero(cm / CM_PER_INCH)
}

/// Replace NaN and infinities with zero.
#[inline]
pub fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Divide, yielding zero for a zero divisor or a non-finite result.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

/// Clamp a count (months, quantity) to at least one.
#[inline]
pub fn clamp_count(n: i64) -> u32 {
    n.clamp(1, u32::MAX as i64) as u32
}

/// Round an amount to cents.
pub fn round_to_cents(amount: f64) -> f64 {
    finite_or_zero((amount * 100.0).round() / 100.0)
}

/// Format an amount with exactly two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", finite_or_zero(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.000001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    // ==================== parse_lenient_number tests ====================

    #[test]
    fn test_parse_lenient_number_comma() {
        assert_eq!(parse_lenient_number("2,5", 0.0), 2.5);
    }

    #[test]
    fn test_parse_lenient_number_dot() {
        assert_eq!(parse_lenient_number(" 3.75 ", 0.0), 3.75);
    }

    #[test]
    fn test_parse_lenient_number_garbage() {
        assert_eq!(parse_lenient_number("abc", 0.0), 0.0);
        assert_eq!(parse_lenient_number("", 7.0), 7.0);
        assert_eq!(parse_lenient_number("NaN", 1.0), 1.0);
        assert_eq!(parse_lenient_number("inf", 1.0), 1.0);
    }

    #[test]
    fn test_parse_lenient_number_trailing_text() {
        assert_eq!(parse_lenient_number("3 m", 0.0), 3.0);
        assert_eq!(parse_lenient_number("-1,25x", 0.0), -1.25);
        assert_eq!(parse_lenient_number(".5", 0.0), 0.5);
    }

    // ==================== round_half_up_at_51 tests ====================

    #[test]
    fn test_round_half_up_at_51_threshold() {
        assert_eq!(round_half_up_at_51(2.50), 2.0);
        assert_eq!(round_half_up_at_51(2.51), 3.0);
        assert_eq!(round_half_up_at_51(10.51), 11.0);
        assert_eq!(round_half_up_at_51(2.509), 2.0);
    }

    #[test]
    fn test_round_half_up_at_51_ranges() {
        assert_eq!(round_half_up_at_51(7.0), 7.0);
        assert_eq!(round_half_up_at_51(7.2), 7.0);
        assert_eq!(round_half_up_at_51(7.99), 8.0);
        assert_eq!(round_half_up_at_51(223.6068), 224.0);
    }

    #[test]
    fn test_round_half_up_at_51_non_finite() {
        assert_eq!(round_half_up_at_51(f64::NAN), 0.0);
        assert_eq!(round_half_up_at_51(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_round_half_up_is_standard() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(122.77), 123.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    // ==================== extract_pitch_millimeters tests ====================

    #[test]
    fn test_extract_pitch_with_suffix() {
        assert!(approx_eq(
            extract_pitch_millimeters("P3.91 haute luminosité"),
            3.91
        ));
    }

    #[test]
    fn test_extract_pitch_case_and_space() {
        assert!(approx_eq(extract_pitch_millimeters("Mur p 2,5 indoor"), 2.5));
        assert!(approx_eq(extract_pitch_millimeters("LED P10"), 10.0));
    }

    #[test]
    fn test_extract_pitch_missing() {
        assert_eq!(extract_pitch_millimeters("no pitch here"), 0.0);
        assert_eq!(extract_pitch_millimeters(""), 0.0);
    }

    // ==================== diagonal tests ====================

    #[test]
    fn test_compute_diagonal_cm() {
        assert!(approx_eq(compute_diagonal_cm(3.0, 4.0), 500.0));
        assert_eq!(compute_diagonal_cm(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_cm_to_inches() {
        assert!(approx_eq(cm_to_inches(254.0), 100.0));
    }

    // ==================== guard tests ====================

    #[test]
    fn test_safe_div_zero() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(10.0, 4.0), 2.5);
        assert_eq!(safe_div(f64::NAN, 4.0), 0.0);
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(-4), 1);
        assert_eq!(clamp_count(36), 36);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(123.0), "123.00");
        assert_eq!(format_amount(19.956), "19.96");
        assert_eq!(format_amount(f64::NAN), "0.00");
    }
}
