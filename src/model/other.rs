//! Non-wall product line (totems, screens, kiosks sold by size).

use serde::{Deserialize, Serialize};

use super::amount;
use crate::config::FinancingType;

/// Inputs for one "other product" line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherProductLineInput {
    /// Size label shown on the recap (e.g. `55"`).
    pub label: String,
    /// Monthly base price of the selected size.
    #[serde(deserialize_with = "amount::lenient_price")]
    pub base_price: f64,
    /// Price of the selected memory add-on, 0 when none.
    #[serde(deserialize_with = "amount::lenient_price")]
    pub memory_option_price: f64,
    #[serde(deserialize_with = "amount::lenient_count")]
    pub quantity: i64,
    pub financing_type: FinancingType,
    #[serde(deserialize_with = "amount::lenient_count")]
    pub leasing_months: i64,
}

impl Default for OtherProductLineInput {
    fn default() -> Self {
        Self {
            label: String::new(),
            base_price: 0.0,
            memory_option_price: 0.0,
            quantity: 1,
            financing_type: FinancingType::default(),
            leasing_months: 1,
        }
    }
}

/// Computed price of an "other product" line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherProductLineResult {
    pub label: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}
