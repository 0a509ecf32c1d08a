//! Pricing engines: wall lines, other-product lines and quote totals.

mod aggregate;
mod other;
mod wall;

pub use aggregate::aggregate;
pub use other::{compute_other_line, price_selection};
pub use wall::compute_wall_quote;
