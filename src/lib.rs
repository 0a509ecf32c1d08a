//! ledquote-rs - Pricing engine for LED-wall and display product quotes.
//!
//! Turns raw form inputs (panel dimensions, pitch label, fixation length,
//! financing terms, quantity) and a set of global coefficients into monthly
//! or purchase prices, then combines the lines into HT / TVA / TTC totals.
//!
//! # Example
//!
//! ```
//! use ledquote_rs::{compute_wall_quote, CoefficientSet, FinancingType, WallLineInput};
//!
//! let input = WallLineInput {
//!     width_m: "2".into(),
//!     height_m: "1".into(),
//!     pitch_label: "P2.5".into(),
//!     unit_price_eur_per_m2: 500.0,
//!     linear_meter_raw: "2.5".into(),
//!     financing_months: 63,
//!     financing_type: FinancingType::MaintenanceRental,
//!     ..Default::default()
//! };
//! let result = compute_wall_quote(&input, &CoefficientSet::default());
//! assert_eq!(result.width_px, Some(800));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod selection;
pub mod units;
pub mod validation;

// Re-exports for convenience
pub use config::FinancingType;
pub use engine::{aggregate, compute_other_line, compute_wall_quote, price_selection};
pub use error::{QuoteError, Result};
pub use generator::generate_recap;
pub use model::{
    Catalog, CoefficientSet, OtherProductLineInput, OtherProductLineResult, QuoteReport,
    QuoteRequest, QuoteTotals, WallLineInput, WallLineResult,
};
pub use parser::{parse_catalog_file, parse_request_file};
pub use selection::{ProductId, RowId, RowPatch, SelectionState};
pub use validation::{validate_request, ValidationResult};

/// Price every line of a request and aggregate the totals.
pub fn price_quote(request: &QuoteRequest, coeffs: &CoefficientSet) -> QuoteReport {
    let wall_lines: Vec<WallLineResult> = request
        .wall_lines
        .iter()
        .map(|line| compute_wall_quote(line, coeffs))
        .collect();

    let other_lines: Vec<OtherProductLineResult> =
        request.other_lines.iter().map(compute_other_line).collect();

    let totals = aggregate(&wall_lines, &other_lines);

    QuoteReport {
        wall_lines,
        other_lines,
        totals,
    }
}

/// Load a request file and price it.
///
/// Validation warnings are logged but never block the quote.
pub fn price_quote_file(input_path: &std::path::Path, coeffs: &CoefficientSet) -> Result<QuoteReport> {
    let request = parse_request_file(input_path)?;

    let validation = validate_request(&request, None);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    Ok(price_quote(&request, coeffs))
}
