//! Block parser - the state machine that turns one item block into an Item
//!
//! Lines are fed one at a time. Metadata lines are recognised by fixed
//! prefixes; stat lines are routed to the implicit or explicit vector
//! depending on the current [`Section`].

use crate::item::Item;
use crate::types::ItemKind;
use log::{debug, warn};
use stat_core::{apply_line, StatVector, IMPLICIT_MARKER};

const SEPARATOR: &str = "--------";
const CLASS_PREFIX: &str = "Класс предмета:";
const RARITY_PREFIX: &str = "Редкость:";
/// The line after this one carries the item name
const RARE_RARITY_LINE: &str = "Редкость: Редкий";
const REQUIRED_LEVEL_PREFIX: &str = "Требуется: Уровень";
const ITEM_LEVEL_PREFIX: &str = "Уровень предмета:";

/// Where the parser is within an item block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Header and properties; stat lines are ignored
    #[default]
    SeekingMeta,
    /// Just read an implicit modifier
    InImplicit,
    /// Reading rolled modifiers
    InExplicit,
}

/// Incremental parser for a single item block
#[derive(Debug, Default)]
pub struct BlockParser {
    section: Section,
    kind: Option<ItemKind>,
    rarity: Option<String>,
    name: Option<String>,
    base_type: Option<String>,
    item_level: u32,
    required_level: u32,
    explicit: StatVector,
    implicit: StatVector,
    /// Whether the previous line was exactly the rare rarity line
    after_rare: bool,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Feed the next raw line of the block
    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        let after_rare = std::mem::replace(&mut self.after_rare, line == RARE_RARITY_LINE);

        if line.is_empty() || line == SEPARATOR {
            return;
        }

        if let Some(class) = line.strip_prefix(CLASS_PREFIX) {
            if let Some(kind) = ItemKind::from_class(class.trim()) {
                self.kind = Some(kind);
            }
        } else if let Some(rarity) = line.strip_prefix(RARITY_PREFIX) {
            self.rarity = Some(rarity.trim().to_string());
        } else if after_rare {
            self.read_name(line);
        } else if line.starts_with(REQUIRED_LEVEL_PREFIX) {
            let value = line.split_whitespace().last().unwrap_or_default();
            self.required_level = parse_level(value, line);
        } else if let Some(level) = line.strip_prefix(ITEM_LEVEL_PREFIX) {
            self.item_level = parse_level(level.trim(), line);
        } else if line.contains(IMPLICIT_MARKER) {
            self.section = Section::InImplicit;
            apply_line(line, &mut self.implicit);
        } else {
            match self.section {
                Section::SeekingMeta => {}
                Section::InImplicit => {
                    self.section = Section::InExplicit;
                    apply_line(line, &mut self.explicit);
                }
                Section::InExplicit => {
                    apply_line(line, &mut self.explicit);
                }
            }
        }
    }

    /// Name line heuristic: the base type is always the last two words
    fn read_name(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 3 {
            let split = parts.len() - 2;
            self.name = Some(parts[..split].join(" "));
            self.base_type = Some(parts[split..].join(" "));
        } else {
            debug!("Name line '{}' has fewer than three words, ignored", line);
        }
    }

    /// Build the item, or `None` if no jewelry class or name was found
    pub fn finish(self) -> Option<Item> {
        match (self.kind, self.name) {
            (Some(kind), Some(name)) => Some(Item {
                name,
                base_type: self.base_type.unwrap_or_default(),
                kind,
                rarity: self.rarity.unwrap_or_default(),
                item_level: self.item_level,
                required_level: self.required_level,
                explicit: self.explicit,
                implicit: self.implicit,
            }),
            (kind, name) => {
                debug!(
                    "Dropping block: kind={:?}, name={:?}",
                    kind,
                    name.as_deref()
                );
                None
            }
        }
    }
}

fn parse_level(value: &str, line: &str) -> u32 {
    value.parse().unwrap_or_else(|_| {
        warn!("Unreadable level in '{}', using 0", line);
        0
    })
}

/// Parse one block of lines into an item
pub fn parse_block<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<Item> {
    let mut parser = BlockParser::new();
    for line in lines {
        parser.feed(line);
    }
    parser.finish()
}
