//! search_core - Picks the best two rings and amulet from a set of items

mod search;

pub use search::{find_best, triples, Combination};

use thiserror::Error;

/// Why no combination could be formed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Not enough rings to choose from (need at least 2, found {found})")]
    NotEnoughRings { found: usize },
    #[error("No amulets available")]
    NoAmulets,
}
