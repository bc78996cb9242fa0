//! Splitting an export into item blocks and loading it from disk

use crate::block::parse_block;
use crate::item::Item;
use crate::types::ItemKind;
use crate::LoadError;
use log::{debug, info};
use std::io::ErrorKind;
use std::path::Path;

/// Items recovered from an export, plus how many blocks were dropped
#[derive(Debug, Clone, Default)]
pub struct ParsedItems {
    pub items: Vec<Item>,
    /// Non-empty blocks that lacked a jewelry class or a name
    pub dropped: usize,
}

impl ParsedItems {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_kind(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

/// Split text into blocks of non-blank lines
///
/// A line that is empty or whitespace-only ends the current block.
pub fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Parse every item block in an export
pub fn parse_items(text: &str) -> ParsedItems {
    let text = text.trim_start_matches('\u{feff}');
    let mut parsed = ParsedItems::default();

    for (index, block) in split_blocks(text).into_iter().enumerate() {
        match parse_block(block) {
            Some(item) => {
                debug!("Block {}: {} '{}'", index, item.kind, item.name);
                parsed.items.push(item);
            }
            None => parsed.dropped += 1,
        }
    }

    parsed
}

/// Read and parse an export file
pub fn load_items(path: &Path) -> Result<ParsedItems, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            error: e,
            path: path.to_path_buf(),
        },
    })?;

    let parsed = parse_items(&content);
    info!(
        "Loaded {} items from {} ({} blocks skipped)",
        parsed.items.len(),
        path.display(),
        parsed.dropped
    );
    Ok(parsed)
}
