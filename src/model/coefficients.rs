//! Global pricing coefficients with defaults and legacy key aliases.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{QuoteError, Result};
use crate::units::parse_lenient_number;

/// A single named coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    AccessoriesCost,
    LocalCostChinaFrance,
    LeasingCoefficient,
    CatalogMargin,
    CustomsDutyFactor,
    EurUsdRate,
    OptionScreenPerLinearMeter,
    OptionTiragePerM2,
    OptionDeliveryPerM2,
    InstallPricePerM2,
    OptionPaintPerM2,
    OptionCasingPerM2,
    OptionConnectionPerM2,
    ContainerPricePerM2,
}

/// Accepted record keys per coefficient, in lookup order.
///
/// The modern name comes first; the remaining names are the legacy
/// (French) keys still present in older coefficient records.
pub const ALIASES: &[(Coefficient, &[&str])] = &[
    (
        Coefficient::AccessoriesCost,
        &["accessoriesCost", "coutAccessoires", "accessoires"],
    ),
    (
        Coefficient::LocalCostChinaFrance,
        &["localCostChinaFrance", "coutLocalChineFrance", "fraisChineFrance"],
    ),
    (
        Coefficient::LeasingCoefficient,
        &["leasingCoefficient", "coefLeasing", "coeffLeasing"],
    ),
    (
        Coefficient::CatalogMargin,
        &["catalogMargin", "margeCatalogue", "marge"],
    ),
    (
        Coefficient::CustomsDutyFactor,
        &["customsDutyFactor", "droitsDouane", "douane"],
    ),
    (Coefficient::EurUsdRate, &["eurUsdRate", "tauxEurUsd", "euroDollar"]),
    (
        Coefficient::OptionScreenPerLinearMeter,
        &["optionScreenPerLinearMeter", "optionEcranMl", "prixMetreLineaire"],
    ),
    (
        Coefficient::OptionTiragePerM2,
        &["optionTiragePerM2", "optionTirageM2", "tirage"],
    ),
    (
        Coefficient::OptionDeliveryPerM2,
        &["optionDeliveryPerM2", "optionLivraisonM2", "livraison"],
    ),
    (
        Coefficient::InstallPricePerM2,
        &["installPricePerM2", "prixInstallationM2", "installation"],
    ),
    (
        Coefficient::OptionPaintPerM2,
        &["optionPaintPerM2", "optionPeintureM2", "peinture"],
    ),
    (
        Coefficient::OptionCasingPerM2,
        &["optionCasingPerM2", "optionCaissonM2", "caisson"],
    ),
    (
        Coefficient::OptionConnectionPerM2,
        &["optionConnectionPerM2", "optionRaccordementM2", "raccordement"],
    ),
    (
        Coefficient::ContainerPricePerM2,
        &["containerPricePerM2", "prixContainerM2", "container"],
    ),
];

impl Coefficient {
    /// Modern record key of this coefficient.
    pub fn key(&self) -> &'static str {
        self.aliases()[0]
    }

    /// All accepted record keys, modern first.
    pub fn aliases(&self) -> &'static [&'static str] {
        ALIASES
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(&[])
    }
}

/// Named bag of global pricing coefficients.
///
/// Built once per quoting session and passed explicitly to every formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientSet {
    pub accessories_cost: f64,
    pub local_cost_china_france: f64,
    pub leasing_coefficient: f64,
    pub catalog_margin: f64,
    pub customs_duty_factor: f64,
    pub eur_usd_rate: f64,
    pub option_screen_per_linear_meter: f64,
    /// Cable-pull cost per m².
    pub option_tirage_per_m2: f64,
    pub option_delivery_per_m2: f64,
    pub install_price_per_m2: f64,
    pub option_paint_per_m2: f64,
    pub option_casing_per_m2: f64,
    pub option_connection_per_m2: f64,
    pub container_price_per_m2: f64,
}

impl Default for CoefficientSet {
    fn default() -> Self {
        Self {
            accessories_cost: 350.0,
            local_cost_china_france: 1200.0,
            leasing_coefficient: 0.85,
            catalog_margin: 0.65,
            customs_duty_factor: 1.14,
            eur_usd_rate: 1.08,
            option_screen_per_linear_meter: 45.0,
            option_tirage_per_m2: 60.0,
            option_delivery_per_m2: 80.0,
            install_price_per_m2: 250.0,
            option_paint_per_m2: 35.0,
            option_casing_per_m2: 120.0,
            option_connection_per_m2: 40.0,
            container_price_per_m2: 90.0,
        }
    }
}

impl CoefficientSet {
    /// Get a coefficient value.
    pub fn get(&self, coefficient: Coefficient) -> f64 {
        match coefficient {
            Coefficient::AccessoriesCost => self.accessories_cost,
            Coefficient::LocalCostChinaFrance => self.local_cost_china_france,
            Coefficient::LeasingCoefficient => self.leasing_coefficient,
            Coefficient::CatalogMargin => self.catalog_margin,
            Coefficient::CustomsDutyFactor => self.customs_duty_factor,
            Coefficient::EurUsdRate => self.eur_usd_rate,
            Coefficient::OptionScreenPerLinearMeter => self.option_screen_per_linear_meter,
            Coefficient::OptionTiragePerM2 => self.option_tirage_per_m2,
            Coefficient::OptionDeliveryPerM2 => self.option_delivery_per_m2,
            Coefficient::InstallPricePerM2 => self.install_price_per_m2,
            Coefficient::OptionPaintPerM2 => self.option_paint_per_m2,
            Coefficient::OptionCasingPerM2 => self.option_casing_per_m2,
            Coefficient::OptionConnectionPerM2 => self.option_connection_per_m2,
            Coefficient::ContainerPricePerM2 => self.container_price_per_m2,
        }
    }

    /// Set a coefficient value.
    pub fn set(&mut self, coefficient: Coefficient, value: f64) {
        let slot = match coefficient {
            Coefficient::AccessoriesCost => &mut self.accessories_cost,
            Coefficient::LocalCostChinaFrance => &mut self.local_cost_china_france,
            Coefficient::LeasingCoefficient => &mut self.leasing_coefficient,
            Coefficient::CatalogMargin => &mut self.catalog_margin,
            Coefficient::CustomsDutyFactor => &mut self.customs_duty_factor,
            Coefficient::EurUsdRate => &mut self.eur_usd_rate,
            Coefficient::OptionScreenPerLinearMeter => &mut self.option_screen_per_linear_meter,
            Coefficient::OptionTiragePerM2 => &mut self.option_tirage_per_m2,
            Coefficient::OptionDeliveryPerM2 => &mut self.option_delivery_per_m2,
            Coefficient::InstallPricePerM2 => &mut self.install_price_per_m2,
            Coefficient::OptionPaintPerM2 => &mut self.option_paint_per_m2,
            Coefficient::OptionCasingPerM2 => &mut self.option_casing_per_m2,
            Coefficient::OptionConnectionPerM2 => &mut self.option_connection_per_m2,
            Coefficient::ContainerPricePerM2 => &mut self.container_price_per_m2,
        };
        *slot = value;
    }

    /// Build a coefficient set from a flat key-value record.
    ///
    /// Each coefficient takes the first usable value among its aliases.
    /// Missing, null, non-numeric or non-finite entries keep the default.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let mut coeffs = Self::default();

        for (coefficient, keys) in ALIASES {
            let resolved = keys
                .iter()
                .find_map(|key| record.get(*key).and_then(numeric_value).map(|v| (*key, v)));

            match resolved {
                Some((key, value)) => {
                    if key != coefficient.key() {
                        debug!("Coefficient {} read from legacy key '{}'", coefficient.key(), key);
                    }
                    coeffs.set(*coefficient, value);
                }
                None => debug!(
                    "Coefficient {} missing, using default {}",
                    coefficient.key(),
                    coeffs.get(*coefficient)
                ),
            }
        }

        coeffs
    }

    /// Build a coefficient set from any JSON value (non-objects give defaults).
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(record) => Self::from_record(record),
            _ => Self::default(),
        }
    }

    /// Load a coefficient record from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let value = crate::parser::read_json_value(path)?;
        if !value.is_object() {
            return Err(QuoteError::InvalidJson {
                path: path.to_path_buf(),
                message: "coefficient record must be a JSON object".to_string(),
            });
        }
        Ok(Self::from_value(&value))
    }

    /// Load a coefficient record, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(coeffs) => coeffs,
            Err(e) => {
                warn!("Using default coefficients: {}", e);
                Self::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CoefficientSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Read a record entry as a finite number (JSON number or numeric string).
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let v = parse_lenient_number(s, f64::NAN);
            v.is_finite().then_some(v)
        }
        _ => None,
    }
}
