//! LED-wall quote line: raw form inputs and the computed result.

use serde::{Deserialize, Serialize};

use super::amount;
use super::catalog::{Catalog, LedProduct};
use crate::config::FinancingType;
use crate::error::{QuoteError, Result};

/// Raw inputs for one LED-wall line, as typed in the quoting form.
///
/// Dimensions and linear meters stay raw text; the engine parses them
/// leniently (comma or dot decimals, garbage reads as zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WallLineInput {
    /// Panel width in meters.
    #[serde(deserialize_with = "amount::lenient_text")]
    pub width_m: String,
    /// Panel height in meters.
    #[serde(deserialize_with = "amount::lenient_text")]
    pub height_m: String,
    /// Product label containing the `P<mm>` pitch.
    pub pitch_label: String,
    /// Catalog price of the selected product.
    #[serde(deserialize_with = "amount::lenient_price")]
    pub unit_price_eur_per_m2: f64,
    /// Fixation length entered by the agent.
    #[serde(deserialize_with = "amount::lenient_text")]
    pub linear_meter_raw: String,
    /// Only used to pick the linear-meter floor.
    pub category_name: String,
    #[serde(deserialize_with = "amount::lenient_count")]
    pub financing_months: i64,
    pub financing_type: FinancingType,
    #[serde(deserialize_with = "amount::lenient_count")]
    pub quantity: i64,
    /// Monthly finish (finition) add-on, folded into the line amount.
    #[serde(deserialize_with = "amount::lenient_price")]
    pub finish_monthly_price: f64,
}

impl Default for WallLineInput {
    fn default() -> Self {
        Self {
            width_m: String::new(),
            height_m: String::new(),
            pitch_label: String::new(),
            unit_price_eur_per_m2: 0.0,
            linear_meter_raw: String::new(),
            category_name: String::new(),
            financing_months: 1,
            financing_type: FinancingType::default(),
            quantity: 1,
            finish_monthly_price: 0.0,
        }
    }
}

impl WallLineInput {
    /// Create a line for a catalog product with the given dimensions.
    pub fn for_product(
        product: &LedProduct,
        width_m: impl Into<String>,
        height_m: impl Into<String>,
    ) -> Self {
        Self {
            width_m: width_m.into(),
            height_m: height_m.into(),
            pitch_label: product.pitch_label.clone(),
            unit_price_eur_per_m2: product.unit_price_eur_per_m2,
            category_name: product.category_name.clone(),
            ..Default::default()
        }
    }

    /// Set the fixation length.
    pub fn with_linear_meters(mut self, raw: impl Into<String>) -> Self {
        self.linear_meter_raw = raw.into();
        self
    }

    /// Set financing type and duration.
    pub fn with_financing(mut self, financing_type: FinancingType, months: i64) -> Self {
        self.financing_type = financing_type;
        self.financing_months = months;
        self
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the monthly finish add-on.
    pub fn with_finish(mut self, monthly_price: f64) -> Self {
        self.finish_monthly_price = monthly_price;
        self
    }

    /// Set the finish add-on from a catalog finish id.
    pub fn with_catalog_finish(self, catalog: &Catalog, finish_id: &str) -> Result<Self> {
        let finish = catalog
            .find_finish(finish_id)
            .ok_or_else(|| QuoteError::UnknownFinish {
                finish_id: finish_id.to_string(),
            })?;
        Ok(self.with_finish(finish.monthly_price))
    }
}

/// Intermediate figures of the wall cost buildup, in EUR.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallCostBreakdown {
    pub tirage: f64,
    pub delivery: f64,
    pub install: f64,
    pub accessories_total: f64,
    pub parts_total: f64,
    pub screen_total: f64,
    pub gross_total: f64,
    pub eur_total: f64,
    pub after_leasing: f64,
    pub after_margin: f64,
    pub monthly: f64,
    pub purchase_price: f64,
}

/// Computed quote for one LED-wall line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallLineResult {
    pub surface_m2: f64,
    /// Diagonal in centimeters, display-rounded at .51.
    pub diagonal_cm: f64,
    /// Diagonal in inches, display-rounded at .51.
    pub diagonal_inches: f64,
    /// `None` when pitch or dimensions are unknown.
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
    pub linear_meter_used: f64,
    pub container_cost_eur: f64,
    /// Unit monthly (or purchase) price, rounded to an integer.
    pub monthly_or_purchase_total: i64,
    pub quantity: u32,
    /// Finish add-on included in `line_amount_ht`.
    pub finish_amount: f64,
    /// `quantity × total` plus the finish add-on, serialized with 2 decimals.
    #[serde(serialize_with = "amount::serialize")]
    pub line_amount_ht: f64,
    pub breakdown: WallCostBreakdown,
}

impl WallLineResult {
    /// Line amount in the 2-decimal convention.
    pub fn line_amount_display(&self) -> String {
        crate::units::format_amount(self.line_amount_ht)
    }

    /// Resolution as `W x H` pixels, when known.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        Some((self.width_px?, self.height_px?))
    }
}
