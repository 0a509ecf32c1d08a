//! Request checks run before pricing.
//!
//! Validation never changes the computed amounts: the engines clamp and
//! default on their own. It only surfaces what the agent should double-check.

use crate::config::min_linear_meters;
use crate::model::{Catalog, OtherProductLineInput, QuoteRequest, WallLineInput};
use crate::units::{extract_pitch_millimeters, parse_lenient_number};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a whole quote request.
///
/// With a catalog, financing durations are checked against the allowed list.
pub fn validate_request(request: &QuoteRequest, catalog: Option<&Catalog>) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if request.is_empty() {
        result.add_warning("Quote has no lines");
    }

    for (idx, line) in request.wall_lines.iter().enumerate() {
        result.merge(validate_wall_line(line, idx + 1, catalog));
    }

    for (idx, line) in request.other_lines.iter().enumerate() {
        result.merge(validate_other_line(line, idx + 1, catalog));
    }

    result
}

/// Validate a single wall line.
pub fn validate_wall_line(
    line: &WallLineInput,
    line_num: usize,
    catalog: Option<&Catalog>,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let width = parse_lenient_number(&line.width_m, f64::NAN);
    let height = parse_lenient_number(&line.height_m, f64::NAN);
    if width.is_nan() || height.is_nan() {
        result.add_warning(format!(
            "Wall {}: Unreadable dimensions ('{}' x '{}'), surface counts as 0",
            line_num, line.width_m, line.height_m
        ));
    } else if width <= 0.0 || height <= 0.0 {
        result.add_warning(format!(
            "Wall {}: Zero or negative dimensions ({}x{})",
            line_num, width, height
        ));
    }

    if extract_pitch_millimeters(&line.pitch_label) <= 0.0 {
        result.add_warning(format!(
            "Wall {}: No pitch found in '{}', resolution unknown",
            line_num, line.pitch_label
        ));
    }

    let min_linear = min_linear_meters(&line.category_name);
    let linear = parse_lenient_number(&line.linear_meter_raw, 0.0);
    if linear < min_linear {
        result.add_warning(format!(
            "Wall {}: Linear meters {} raised to minimum {}",
            line_num, linear, min_linear
        ));
    }

    if line.unit_price_eur_per_m2 < 0.0 {
        result.add_error(format!(
            "Wall {}: Negative unit price ({})",
            line_num, line.unit_price_eur_per_m2
        ));
    }

    if line.finish_monthly_price < 0.0 {
        result.add_error(format!(
            "Wall {}: Negative finish price ({})",
            line_num, line.finish_monthly_price
        ));
    }

    check_counts(
        &mut result,
        &format!("Wall {}", line_num),
        line.quantity,
        line.financing_months,
        catalog,
    );

    result
}

/// Validate a single other-product line.
pub fn validate_other_line(
    line: &OtherProductLineInput,
    line_num: usize,
    catalog: Option<&Catalog>,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if line.base_price < 0.0 || line.memory_option_price < 0.0 {
        result.add_error(format!(
            "Other {}: Negative price (base {}, memory {})",
            line_num, line.base_price, line.memory_option_price
        ));
    }

    check_counts(
        &mut result,
        &format!("Other {}", line_num),
        line.quantity,
        line.leasing_months,
        catalog,
    );

    result
}

fn check_counts(
    result: &mut ValidationResult,
    prefix: &str,
    quantity: i64,
    months: i64,
    catalog: Option<&Catalog>,
) {
    if quantity < 1 {
        result.add_warning(format!("{}: Quantity {} clamped to 1", prefix, quantity));
    }

    if months < 1 {
        result.add_warning(format!("{}: Duration {} clamped to 1 month", prefix, months));
    } else if let Some(catalog) = catalog {
        if !catalog.is_allowed_duration(months) {
            result.add_warning(format!(
                "{}: Duration {} months is not offered (allowed: {:?})",
                prefix, months, catalog.leasing_durations
            ));
        }
    }
}
