//! Reference data supplied by the catalog service.

use serde::{Deserialize, Serialize};

/// A selectable LED-wall product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedProduct {
    pub id: String,
    pub name: String,
    /// Label holding the `P<mm>` pitch.
    pub pitch_label: String,
    pub unit_price_eur_per_m2: f64,
    pub category_name: String,
}

/// One size row of an "other product".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizeRow {
    pub id: String,
    pub size_label: String,
    pub base_price: f64,
}

/// A non-wall product sold by size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherProduct {
    pub id: String,
    pub name: String,
    pub sizes: Vec<SizeRow>,
}

impl OtherProduct {
    /// Find a size row by id.
    pub fn find_row(&self, row_id: &str) -> Option<&SizeRow> {
        self.sizes.iter().find(|r| r.id == row_id)
    }
}

/// Memory add-on for other products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryOption {
    pub id: String,
    pub label: String,
    pub price: f64,
}

/// Finish (finition) add-on for wall lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finish {
    pub id: String,
    pub label: String,
    pub monthly_price: f64,
}

/// All reference data needed to price a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub led_products: Vec<LedProduct>,
    pub other_products: Vec<OtherProduct>,
    pub memory_options: Vec<MemoryOption>,
    pub finishes: Vec<Finish>,
    /// Allowed leasing durations in months.
    pub leasing_durations: Vec<u32>,
}

impl Catalog {
    /// Find an LED-wall product by id.
    pub fn find_led_product(&self, id: &str) -> Option<&LedProduct> {
        self.led_products.iter().find(|p| p.id == id)
    }

    /// Find an other product by id.
    pub fn find_other_product(&self, id: &str) -> Option<&OtherProduct> {
        self.other_products.iter().find(|p| p.id == id)
    }

    /// Find a memory option by id.
    pub fn find_memory_option(&self, id: &str) -> Option<&MemoryOption> {
        self.memory_options.iter().find(|m| m.id == id)
    }

    /// Find a finish by id.
    pub fn find_finish(&self, id: &str) -> Option<&Finish> {
        self.finishes.iter().find(|f| f.id == id)
    }

    /// Check a leasing duration against the allowed list.
    ///
    /// An empty list allows every duration.
    pub fn is_allowed_duration(&self, months: i64) -> bool {
        self.leasing_durations.is_empty()
            || self.leasing_durations.iter().any(|&m| i64::from(m) == months)
    }
}
