//! Stat accumulation

mod aggregator;

pub use aggregator::{format_value, StatVector};
