//! Per-product, per-duration selection of size rows.
//!
//! Every transition consumes the old state and returns the new one, so a UI
//! event loop can treat them as pure functions. Buckets are keyed by leasing
//! duration: switching duration only changes which bucket is active, so
//! switching back restores the previous selection untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{FinancingType, DEFAULT_LEASING_MONTHS};
use crate::error::{QuoteError, Result};
use crate::model::{Catalog, OtherProductLineInput};
use crate::units::clamp_count;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

/// Identifier of a size row within a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-row overrides of a checked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSelection {
    pub memory_option_id: Option<String>,
    pub quantity: u32,
}

/// Checked rows for one leasing duration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationBucket {
    pub checked_rows: BTreeMap<RowId, RowSelection>,
}

/// Selection of one product across every duration visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    pub active_leasing_months: u32,
    pub buckets_by_months: BTreeMap<u32, DurationBucket>,
}

impl ProductSelection {
    fn new(months: u32) -> Self {
        let mut buckets_by_months = BTreeMap::new();
        buckets_by_months.insert(months, DurationBucket::default());
        Self {
            active_leasing_months: months,
            buckets_by_months,
        }
    }

    /// Bucket of the active duration.
    pub fn active_bucket(&self) -> Option<&DurationBucket> {
        self.buckets_by_months.get(&self.active_leasing_months)
    }

    fn active_bucket_mut(&mut self) -> &mut DurationBucket {
        self.buckets_by_months
            .entry(self.active_leasing_months)
            .or_default()
    }
}

/// Partial update of a checked row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPatch {
    /// `Some(None)` clears the memory choice.
    pub memory_option_id: Option<Option<String>>,
    pub quantity: Option<i64>,
}

impl RowPatch {
    /// Patch only the quantity.
    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    /// Patch only the memory choice.
    pub fn memory(memory_option_id: Option<&str>) -> Self {
        Self {
            memory_option_id: Some(memory_option_id.map(str::to_string)),
            ..Default::default()
        }
    }
}

/// Selection state of a quote-building session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    products: BTreeMap<ProductId, ProductSelection>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the bucket for `months` if missing, leaving other buckets alone.
    ///
    /// A product seen for the first time becomes active on `months`.
    #[must_use]
    pub fn ensure_product_bucket(mut self, product_id: &ProductId, months: u32) -> Self {
        self.products
            .entry(product_id.clone())
            .or_insert_with(|| ProductSelection::new(months))
            .buckets_by_months
            .entry(months)
            .or_default();
        self
    }

    /// Switch the active duration of a product without clearing any bucket.
    #[must_use]
    pub fn set_active_months(self, product_id: &ProductId, months: u32) -> Self {
        let mut state = self.ensure_product_bucket(product_id, months);
        if let Some(product) = state.products.get_mut(product_id) {
            product.active_leasing_months = months;
        }
        state
    }

    /// Check or uncheck a row in the active bucket only.
    ///
    /// A newly checked row starts with quantity 1 and `default_memory_id`.
    #[must_use]
    pub fn toggle_row(
        mut self,
        product_id: &ProductId,
        row_id: &RowId,
        default_memory_id: Option<&str>,
    ) -> Self {
        let bucket = self
            .products
            .entry(product_id.clone())
            .or_insert_with(|| ProductSelection::new(DEFAULT_LEASING_MONTHS))
            .active_bucket_mut();

        if bucket.checked_rows.remove(row_id).is_none() {
            bucket.checked_rows.insert(
                row_id.clone(),
                RowSelection {
                    memory_option_id: default_memory_id.map(str::to_string),
                    quantity: 1,
                },
            );
        }
        self
    }

    /// Update a checked row of the active bucket.
    ///
    /// Returns the state unchanged when the row is not checked there, so a
    /// stale edit never resurrects an unchecked row.
    #[must_use]
    pub fn update_row_fields(mut self, product_id: &ProductId, row_id: &RowId, patch: RowPatch) -> Self {
        let row = self
            .products
            .get_mut(product_id)
            .and_then(|p| {
                let months = p.active_leasing_months;
                p.buckets_by_months.get_mut(&months)
            })
            .and_then(|b| b.checked_rows.get_mut(row_id));

        if let Some(row) = row {
            if let Some(memory_option_id) = patch.memory_option_id {
                row.memory_option_id = memory_option_id;
            }
            if let Some(quantity) = patch.quantity {
                row.quantity = clamp_count(quantity);
            }
        }
        self
    }

    /// Get a product's selection.
    pub fn product(&self, product_id: &ProductId) -> Option<&ProductSelection> {
        self.products.get(product_id)
    }

    /// Active leasing duration of a product.
    pub fn active_months(&self, product_id: &ProductId) -> Option<u32> {
        self.product(product_id).map(|p| p.active_leasing_months)
    }

    /// Checked row of the active bucket.
    pub fn row(&self, product_id: &ProductId, row_id: &RowId) -> Option<&RowSelection> {
        self.product(product_id)?
            .active_bucket()?
            .checked_rows
            .get(row_id)
    }

    /// Check if a row is checked in the active bucket.
    pub fn is_checked(&self, product_id: &ProductId, row_id: &RowId) -> bool {
        self.row(product_id, row_id).is_some()
    }

    /// Number of checked rows across every product's active bucket.
    pub fn checked_count(&self) -> usize {
        self.products
            .values()
            .filter_map(|p| p.active_bucket())
            .map(|b| b.checked_rows.len())
            .sum()
    }

    /// Resolve the active bucket of a product into pricing inputs.
    pub fn line_inputs(
        &self,
        product_id: &ProductId,
        catalog: &Catalog,
        financing_type: FinancingType,
    ) -> Result<Vec<OtherProductLineInput>> {
        let Some(selection) = self.product(product_id) else {
            return Ok(Vec::new());
        };
        let Some(bucket) = selection.active_bucket() else {
            return Ok(Vec::new());
        };
        if bucket.checked_rows.is_empty() {
            return Ok(Vec::new());
        }

        let product = catalog
            .find_other_product(product_id.as_str())
            .ok_or_else(|| QuoteError::UnknownProduct {
                product_id: product_id.to_string(),
            })?;

        bucket
            .checked_rows
            .iter()
            .map(|(row_id, row)| -> Result<OtherProductLineInput> {
                let size = product
                    .find_row(row_id.as_str())
                    .ok_or_else(|| QuoteError::UnknownRow {
                        product_id: product_id.to_string(),
                        row_id: row_id.to_string(),
                    })?;

                let memory_option_price = row
                    .memory_option_id
                    .as_deref()
                    .and_then(|id| catalog.find_memory_option(id))
                    .map(|m| m.price)
                    .unwrap_or(0.0);

                Ok(OtherProductLineInput {
                    label: format!("{} {}", product.name, size.size_label),
                    base_price: size.base_price,
                    memory_option_price,
                    quantity: i64::from(row.quantity),
                    financing_type,
                    leasing_months: i64::from(selection.active_leasing_months),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemoryOption, OtherProduct, SizeRow};
    use pretty_assertions::assert_eq;

    fn ids() -> (ProductId, RowId, RowId) {
        (ProductId::from("totem"), RowId::from("55"), RowId::from("43"))
    }

    // ==================== ensure_product_bucket tests ====================

    #[test]
    fn test_ensure_bucket_creates_empty_bucket() {
        let (product, _, _) = ids();
        let state = SelectionState::new().ensure_product_bucket(&product, 36);
        let selection = state.product(&product).unwrap();
        assert_eq!(selection.active_leasing_months, 36);
        assert!(selection.buckets_by_months[&36].checked_rows.is_empty());
    }

    #[test]
    fn test_ensure_bucket_is_idempotent() {
        let (product, row, _) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .toggle_row(&product, &row, None);
        let again = state.clone().ensure_product_bucket(&product, 36);
        assert_eq!(state, again);
    }

    #[test]
    fn test_ensure_bucket_keeps_active_duration() {
        let (product, _, _) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .ensure_product_bucket(&product, 63);
        assert_eq!(state.active_months(&product), Some(36));
        assert!(state.product(&product).unwrap().buckets_by_months.contains_key(&63));
    }

    // ==================== toggle_row tests ====================

    #[test]
    fn test_toggle_row_on_and_off() {
        let (product, row, _) = ids();
        let state = SelectionState::new().toggle_row(&product, &row, Some("m64"));
        assert!(state.is_checked(&product, &row));
        assert_eq!(state.active_months(&product), Some(DEFAULT_LEASING_MONTHS));
        assert_eq!(
            state.row(&product, &row),
            Some(&RowSelection {
                memory_option_id: Some("m64".into()),
                quantity: 1
            })
        );

        let state = state.toggle_row(&product, &row, Some("m64"));
        assert!(!state.is_checked(&product, &row));
    }

    #[test]
    fn test_untoggle_only_affects_active_bucket() {
        let (product, row, _) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .toggle_row(&product, &row, None)
            .set_active_months(&product, 63)
            .toggle_row(&product, &row, None)
            .toggle_row(&product, &row, None);

        assert!(!state.is_checked(&product, &row));
        let state = state.set_active_months(&product, 36);
        assert!(state.is_checked(&product, &row));
    }

    // ==================== duration round-trip ====================

    #[test]
    fn test_switching_duration_restores_selection() {
        let (product, row_r, row_other) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .toggle_row(&product, &row_r, Some("m64"))
            .update_row_fields(&product, &row_r, RowPatch::quantity(4));
        let before = state.row(&product, &row_r).cloned();

        let state = state
            .set_active_months(&product, 63)
            .toggle_row(&product, &row_other, None);
        assert!(!state.is_checked(&product, &row_r));
        assert!(state.is_checked(&product, &row_other));

        let state = state.set_active_months(&product, 36);
        assert_eq!(state.row(&product, &row_r).cloned(), before);
        assert!(!state.is_checked(&product, &row_other));
        assert_eq!(state.row(&product, &row_r).unwrap().quantity, 4);
    }

    // ==================== update_row_fields tests ====================

    #[test]
    fn test_update_missing_row_is_noop() {
        let (product, row, other) = ids();
        let state = SelectionState::new().toggle_row(&product, &row, None);
        let updated = state
            .clone()
            .update_row_fields(&product, &other, RowPatch::quantity(5));
        assert_eq!(state, updated);

        let unknown = ProductId::from("kiosk");
        let updated = state
            .clone()
            .update_row_fields(&unknown, &row, RowPatch::quantity(5));
        assert_eq!(state, updated);
    }

    #[test]
    fn test_update_row_in_other_bucket_is_noop() {
        let (product, row, _) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .toggle_row(&product, &row, None)
            .set_active_months(&product, 63);
        let updated = state
            .clone()
            .update_row_fields(&product, &row, RowPatch::quantity(9));
        assert_eq!(state, updated);
    }

    #[test]
    fn test_update_memory_and_quantity_clamp() {
        let (product, row, _) = ids();
        let state = SelectionState::new()
            .toggle_row(&product, &row, Some("m64"))
            .update_row_fields(&product, &row, RowPatch::memory(None))
            .update_row_fields(&product, &row, RowPatch::quantity(0));
        let selected = state.row(&product, &row).unwrap();
        assert_eq!(selected.memory_option_id, None);
        assert_eq!(selected.quantity, 1);
    }

    // ==================== line_inputs tests ====================

    fn catalog() -> Catalog {
        Catalog {
            other_products: vec![OtherProduct {
                id: "totem".into(),
                name: "Totem".into(),
                sizes: vec![SizeRow {
                    id: "55".into(),
                    size_label: "55\"".into(),
                    base_price: 100.0,
                }],
            }],
            memory_options: vec![MemoryOption {
                id: "m64".into(),
                label: "64 Go".into(),
                price: 20.0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_line_inputs_resolve_catalog() {
        let (product, row, _) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .toggle_row(&product, &row, Some("m64"));
        let inputs = state
            .line_inputs(&product, &catalog(), FinancingType::MaintenanceRental)
            .unwrap();
        assert_eq!(
            inputs,
            vec![OtherProductLineInput {
                label: "Totem 55\"".into(),
                base_price: 100.0,
                memory_option_price: 20.0,
                quantity: 1,
                financing_type: FinancingType::MaintenanceRental,
                leasing_months: 36,
            }]
        );
    }

    #[test]
    fn test_line_inputs_unknown_memory_is_free() {
        let (product, row, _) = ids();
        let state = SelectionState::new().toggle_row(&product, &row, Some("m999"));
        let inputs = state
            .line_inputs(&product, &catalog(), FinancingType::Purchase)
            .unwrap();
        assert_eq!(inputs[0].memory_option_price, 0.0);
    }

    #[test]
    fn test_line_inputs_unknown_row() {
        let (product, _, row_43) = ids();
        let state = SelectionState::new().toggle_row(&product, &row_43, None);
        let err = state
            .line_inputs(&product, &catalog(), FinancingType::Purchase)
            .unwrap_err();
        assert!(matches!(err, QuoteError::UnknownRow { .. }));
    }

    #[test]
    fn test_line_inputs_unknown_product() {
        let product = ProductId::from("kiosk");
        let state = SelectionState::new().toggle_row(&product, &RowId::from("1"), None);
        let err = state
            .line_inputs(&product, &catalog(), FinancingType::Purchase)
            .unwrap_err();
        assert!(matches!(err, QuoteError::UnknownProduct { .. }));
    }

    #[test]
    fn test_line_inputs_empty_selection() {
        let product = ProductId::from("kiosk");
        let inputs = SelectionState::new()
            .line_inputs(&product, &catalog(), FinancingType::Purchase)
            .unwrap();
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_serde_round_trip_keeps_buckets() {
        let (product, row, _) = ids();
        let state = SelectionState::new()
            .set_active_months(&product, 36)
            .toggle_row(&product, &row, Some("m64"))
            .set_active_months(&product, 63);
        let json = serde_json::to_string(&state).unwrap();
        let back: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
        assert_eq!(back.checked_count(), 0);
    }
}
