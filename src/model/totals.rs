//! Quote totals (HT / TVA / TTC).

use serde::Serialize;

use crate::config::float_cmp::approx_zero;

/// Totals of a whole quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Sum of all line amounts, before the subscription surcharge.
    pub sum_ht_excluding_surcharge: f64,
    /// Flat surcharge, 0 when the quote has no lines.
    pub fixed_surcharge_eur: f64,
    pub total_ht: f64,
    pub vat_rate: f64,
    pub total_vat: f64,
    pub total_ttc: f64,
}

impl QuoteTotals {
    /// Whether the quote carried no line at all.
    pub fn is_empty(&self) -> bool {
        approx_zero(self.fixed_surcharge_eur) && approx_zero(self.total_ht)
    }
}
