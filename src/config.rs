//! Pricing constants and settings shared by every engine.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Tolerance applied before comparing a fractional part against
/// [`ROUNDING_THRESHOLD`] (2.51 - 2.0 is 0.50999... in binary).
pub const ROUNDING_EPS: f64 = 1e-9;

/// Fractional part from which display values round up.
pub const ROUNDING_THRESHOLD: f64 = 0.51;

/// Category name that raises the linear-meter floor.
pub const SPECIAL_GROUP: &str = "Groupe Spécial";

/// Minimum fixation length in meters.
pub const MIN_LINEAR_METERS: f64 = 2.5;

/// Minimum fixation length in meters for [`SPECIAL_GROUP`].
pub const MIN_LINEAR_METERS_SPECIAL: f64 = 5.0;

/// Floor for the cable-pull (tirage) cost, in EUR.
pub const MIN_TIRAGE_EUR: f64 = 250.0;

/// Floor for the delivery cost, in EUR.
pub const MIN_DELIVERY_EUR: f64 = 300.0;

/// Floor for the installation cost, in EUR.
pub const MIN_INSTALL_EUR: f64 = 750.0;

/// Share of the screen surface priced as spare parts.
pub const PARTS_SURFACE_RATIO: f64 = 0.1;

/// Multiplier turning a financed amount into a one-time purchase price.
pub const PURCHASE_FACTOR: f64 = 0.6;

/// Subscription surcharge added once per non-empty quote, in EUR.
pub const FIXED_SURCHARGE_EUR: f64 = 19.95;

/// VAT rate (TVA).
pub const VAT_RATE: f64 = 0.20;

/// Leasing duration used when a product has no active duration yet.
pub const DEFAULT_LEASING_MONTHS: u32 = 63;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Financing type of a quote line.
///
/// Deserialization goes through [`FinancingType::parse`], so case and
/// surrounding whitespace are ignored and `null` reads as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancingType {
    /// One-time purchase price.
    Purchase,
    /// Short-term rental for an event.
    EventRental,
    /// Long-term rental including maintenance.
    #[default]
    MaintenanceRental,
}

impl FinancingType {
    /// Parse a financing type from its wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "purchase" => Some(FinancingType::Purchase),
            "event_rental" => Some(FinancingType::EventRental),
            "maintenance_rental" => Some(FinancingType::MaintenanceRental),
            _ => None,
        }
    }

    /// Wire name of this financing type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancingType::Purchase => "purchase",
            FinancingType::EventRental => "event_rental",
            FinancingType::MaintenanceRental => "maintenance_rental",
        }
    }

    /// Only purchases take the discounted one-time branch.
    pub fn is_purchase(&self) -> bool {
        matches!(self, FinancingType::Purchase)
    }
}

impl<'de> Deserialize<'de> for FinancingType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(FinancingType::default()),
            Some(raw) => FinancingType::parse(&raw)
                .ok_or_else(|| de::Error::custom(format!("unknown financing type '{}'", raw))),
        }
    }
}

impl std::fmt::Display for FinancingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum linear meters for a product category.
pub fn min_linear_meters(category_name: &str) -> f64 {
    if category_name == SPECIAL_GROUP {
        MIN_LINEAR_METERS_SPECIAL
    } else {
        MIN_LINEAR_METERS
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
