//! Pricing of non-wall product lines.

use crate::config::{FinancingType, PURCHASE_FACTOR};
use crate::error::Result;
use crate::model::{Catalog, OtherProductLineInput, OtherProductLineResult};
use crate::selection::{ProductId, SelectionState};
use crate::units::{clamp_count, finite_or_zero};

/// Compute the unit price and line total of an "other product" line.
///
/// A purchase costs the whole leasing duration discounted by the purchase
/// factor. This is independent of the wall purchase formula.
pub fn compute_other_line(input: &OtherProductLineInput) -> OtherProductLineResult {
    let monthly_unit = finite_or_zero(input.base_price + input.memory_option_price);
    let months = clamp_count(input.leasing_months);

    let unit_price = if input.financing_type.is_purchase() {
        monthly_unit * f64::from(months) * PURCHASE_FACTOR
    } else {
        monthly_unit
    };

    let quantity = clamp_count(input.quantity);

    OtherProductLineResult {
        label: input.label.clone(),
        unit_price,
        quantity,
        line_total: finite_or_zero(unit_price * f64::from(quantity)),
    }
}

/// Price every checked row of a product's active duration bucket.
pub fn price_selection(
    state: &SelectionState,
    product_id: &ProductId,
    catalog: &Catalog,
    financing_type: FinancingType,
) -> Result<Vec<OtherProductLineResult>> {
    let inputs = state.line_inputs(product_id, catalog, financing_type)?;
    Ok(inputs.iter().map(compute_other_line).collect())
}
