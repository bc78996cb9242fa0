//! item_core - Parses exported jewelry text into structured items
//!
//! An export is a sequence of item blocks separated by blank lines, each one
//! the text the game client copies to the clipboard for a single item.

mod block;
mod file;
mod item;
mod types;

pub use block::{parse_block, BlockParser, Section};
pub use file::{load_items, parse_items, split_blocks, ParsedItems};
pub use item::Item;
pub use types::ItemKind;

use std::path::PathBuf;
use thiserror::Error;

/// Error loading an export file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },
    #[error("Error reading '{path}': {error}")]
    Read {
        error: std::io::Error,
        path: PathBuf,
    },
}
