//! Selection state of "other products" while a quote is being built.

mod state;

pub use state::{
    DurationBucket, ProductId, ProductSelection, RowId, RowPatch, RowSelection, SelectionState,
};
