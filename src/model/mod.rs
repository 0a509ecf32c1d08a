//! Data model types for quote computation.

pub(crate) mod amount;
mod catalog;
mod coefficients;
mod other;
mod quote;
mod totals;
mod wall;

pub use catalog::{Catalog, Finish, LedProduct, MemoryOption, OtherProduct, SizeRow};
pub use coefficients::{Coefficient, CoefficientSet, ALIASES};
pub use other::{OtherProductLineInput, OtherProductLineResult};
pub use quote::{QuoteReport, QuoteRequest};
pub use totals::QuoteTotals;
pub use wall::{WallCostBreakdown, WallLineInput, WallLineResult};
