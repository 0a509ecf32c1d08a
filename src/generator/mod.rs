//! Recap generator module.

mod recap;

pub use recap::{generate_recap, RecapWriter};
