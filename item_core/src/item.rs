use crate::types::ItemKind;
use serde::Serialize;
use stat_core::StatVector;
use std::fmt;

/// A parsed piece of jewelry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Display name (everything on the name line except the base type)
    pub name: String,
    /// Base type display name, the last two words of the name line
    pub base_type: String,
    /// Ring or amulet
    pub kind: ItemKind,
    /// Rarity as written in the export, e.g. "Редкий"
    pub rarity: String,
    pub item_level: u32,
    pub required_level: u32,
    /// Rolled modifiers
    pub explicit: StatVector,
    /// Modifiers inherent to the base type
    pub implicit: StatVector,
}

impl Item {
    /// Explicit and implicit modifiers combined
    pub fn total_stats(&self) -> StatVector {
        self.explicit + self.implicit
    }

    pub fn is_ring(&self) -> bool {
        self.kind == ItemKind::Ring
    }

    pub fn is_amulet(&self) -> bool {
        self.kind == ItemKind::Amulet
    }
}

fn write_indented(f: &mut fmt::Formatter<'_>, stats: &StatVector) -> fmt::Result {
    for (stat, value) in stats.iter_nonzero() {
        writeln!(f)?;
        write!(
            f,
            "  {}: {}",
            stat,
            stat_core::stat_block::format_value(value)
        )?;
    }
    Ok(())
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header
        writeln!(f, "══ {} ══", self.name)?;
        writeln!(f, "{} ({})", self.base_type, self.kind)?;
        writeln!(f, "Rarity: {}", self.rarity)?;
        writeln!(f, "Item level: {}", self.item_level)?;
        write!(f, "Required level: {}", self.required_level)?;

        if !self.implicit.is_zero() {
            writeln!(f)?;
            write!(f, "Implicit")?;
            write_indented(f, &self.implicit)?;
        }

        writeln!(f)?;
        write!(f, "Modifiers")?;
        write_indented(f, &self.explicit)
    }
}
