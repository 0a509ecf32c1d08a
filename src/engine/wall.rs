//! LED-wall line pricing.
//!
//! The steps run in a fixed order; each intermediate value feeds the next
//! and rounding only happens where noted. Reordering any step changes the
//! quoted amount.

use crate::config::{
    min_linear_meters, MIN_DELIVERY_EUR, MIN_INSTALL_EUR, MIN_TIRAGE_EUR, PARTS_SURFACE_RATIO,
    PURCHASE_FACTOR,
};
use crate::model::{CoefficientSet, WallCostBreakdown, WallLineInput, WallLineResult};
use crate::units::{
    clamp_count, cm_to_inches, compute_diagonal_cm, extract_pitch_millimeters, finite_or_zero,
    parse_lenient_number, round_half_up, round_half_up_at_51, round_to_cents, safe_div,
};

/// Compute the full quote of one LED-wall line.
pub fn compute_wall_quote(input: &WallLineInput, coeffs: &CoefficientSet) -> WallLineResult {
    // Dimensions and surface
    let width = parse_lenient_number(&input.width_m, 0.0).max(0.0);
    let height = parse_lenient_number(&input.height_m, 0.0).max(0.0);
    let surface = finite_or_zero(width * height);

    // Diagonal, display only
    let diagonal_cm_raw = compute_diagonal_cm(width, height);
    let inches_raw = cm_to_inches(diagonal_cm_raw);

    let (width_px, height_px) = pixel_counts(width, height, &input.pitch_label);

    // Fixation
    let linear_used = min_linear_meters(&input.category_name)
        .max(parse_lenient_number(&input.linear_meter_raw, 0.0));
    let container_cost = finite_or_zero(linear_used * 2.0 * coeffs.option_screen_per_linear_meter);

    let months = clamp_count(input.financing_months);

    let breakdown = cost_breakdown(
        surface,
        input.unit_price_eur_per_m2,
        container_cost,
        months,
        coeffs,
    );

    let displayed = if input.financing_type.is_purchase() {
        breakdown.purchase_price
    } else {
        breakdown.monthly
    };
    let total = round_half_up(displayed) as i64;

    let quantity = clamp_count(input.quantity);
    let finish_amount = finite_or_zero(input.finish_monthly_price) * f64::from(quantity);
    let line_amount = round_to_cents(f64::from(quantity) * total as f64 + finish_amount);

    WallLineResult {
        surface_m2: surface,
        diagonal_cm: round_half_up_at_51(diagonal_cm_raw),
        diagonal_inches: round_half_up_at_51(inches_raw),
        width_px,
        height_px,
        linear_meter_used: linear_used,
        container_cost_eur: container_cost,
        monthly_or_purchase_total: total,
        quantity,
        finish_amount,
        line_amount_ht: line_amount,
        breakdown,
    }
}

/// Pixel resolution, `None` when the pitch or a dimension is unknown.
fn pixel_counts(width: f64, height: f64, pitch_label: &str) -> (Option<u32>, Option<u32>) {
    let pitch_mm = extract_pitch_millimeters(pitch_label);
    if width > 0.0 && height > 0.0 && pitch_mm > 0.0 {
        (pixel_count(width, pitch_mm), pixel_count(height, pitch_mm))
    } else {
        (None, None)
    }
}

/// Pixels along one axis, `None` when the count does not fit a `u32`.
fn pixel_count(meters: f64, pitch_mm: f64) -> Option<u32> {
    let count = (meters * 1000.0 / pitch_mm).floor();
    (count.is_finite() && count <= f64::from(u32::MAX)).then_some(count as u32)
}

/// Cost buildup from surface to monthly and purchase prices.
fn cost_breakdown(
    surface: f64,
    unit_price: f64,
    container_cost: f64,
    months: u32,
    coeffs: &CoefficientSet,
) -> WallCostBreakdown {
    // Ancillary costs with minimum floors
    let tirage = finite_or_zero(coeffs.option_tirage_per_m2 * surface).max(MIN_TIRAGE_EUR);
    let delivery = finite_or_zero(coeffs.option_delivery_per_m2 * surface).max(MIN_DELIVERY_EUR);
    let install = finite_or_zero(surface * coeffs.install_price_per_m2).max(MIN_INSTALL_EUR);

    // Gross buildup (USD side). Accessories are flat, not surface-scaled.
    let accessories_total = finite_or_zero(coeffs.accessories_cost + coeffs.local_cost_china_france);
    let parts_total =
        finite_or_zero(surface * PARTS_SURFACE_RATIO * unit_price * coeffs.customs_duty_factor);
    let screen_total = finite_or_zero((unit_price + container_cost) * surface);
    let gross_total = screen_total + accessories_total + parts_total;

    // The per-linear-meter coefficient is also charged here as a flat per-m² surcharge.
    let eur_total = finite_or_zero(
        safe_div(gross_total, coeffs.eur_usd_rate)
            + install
            + coeffs.option_screen_per_linear_meter * surface
            + delivery
            + tirage,
    );

    let after_leasing = safe_div(eur_total, coeffs.leasing_coefficient);
    let after_margin = safe_div(after_leasing, coeffs.catalog_margin);

    let monthly = safe_div(after_margin, f64::from(months));
    let purchase_price = finite_or_zero(after_margin * PURCHASE_FACTOR);

    WallCostBreakdown {
        tirage,
        delivery,
        install,
        accessories_total,
        parts_total,
        screen_total,
        gross_total,
        eur_total,
        after_leasing,
        after_margin,
        monthly,
        purchase_price,
    }
}
