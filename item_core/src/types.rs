use serde::Serialize;
use std::fmt;

/// Localized item class names as they appear on the `Класс предмета:` line
const RING_CLASS: &str = "Кольца";
const AMULET_CLASS: &str = "Амулеты";

/// Jewelry slot an item fits into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Ring,
    Amulet,
}

impl ItemKind {
    /// Classify an item class value by substring; anything else is not jewelry
    pub fn from_class(class: &str) -> Option<ItemKind> {
        if class.contains(RING_CLASS) {
            Some(ItemKind::Ring)
        } else if class.contains(AMULET_CLASS) {
            Some(ItemKind::Amulet)
        } else {
            None
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Ring => write!(f, "Ring"),
            ItemKind::Amulet => write!(f, "Amulet"),
        }
    }
}
