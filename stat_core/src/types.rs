//! Stat catalogue shared by every crate in the workspace

use serde::Serialize;
use std::fmt;

/// A character attribute that jewelry can modify
///
/// Variant order is the canonical order used for iteration, display and
/// JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    // Attributes
    Strength,
    Dexterity,
    Intelligence,
    // Resources
    Health,
    EnergyShield,
    Mana,
    Spirit,
    // Defenses
    Armor,
    Evasion,
    Block,
    // Resistances
    FireResistance,
    LightningResistance,
    ColdResistance,
    ChaosResistance,
    // Offense
    Accuracy,
    PhysicalDamageMin,
    PhysicalDamageMax,
    FireDamageMin,
    FireDamageMax,
    // Recovery
    HealthRegen,
    LifeLeechPercent,
    ManaLeechPercent,
    ManaRegenPercent,
    // Utility
    ItemRarityPercent,
    EvasionPercent,
}

impl Stat {
    /// Number of stats in the catalogue
    pub const COUNT: usize = 25;

    /// Every stat in canonical order
    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Strength,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Health,
        Stat::EnergyShield,
        Stat::Mana,
        Stat::Spirit,
        Stat::Armor,
        Stat::Evasion,
        Stat::Block,
        Stat::FireResistance,
        Stat::LightningResistance,
        Stat::ColdResistance,
        Stat::ChaosResistance,
        Stat::Accuracy,
        Stat::PhysicalDamageMin,
        Stat::PhysicalDamageMax,
        Stat::FireDamageMin,
        Stat::FireDamageMax,
        Stat::HealthRegen,
        Stat::LifeLeechPercent,
        Stat::ManaLeechPercent,
        Stat::ManaRegenPercent,
        Stat::ItemRarityPercent,
        Stat::EvasionPercent,
    ];

    /// Position of this stat in [`Stat::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// snake_case key used in weight files and JSON output
    pub fn key(self) -> &'static str {
        match self {
            Stat::Strength => "strength",
            Stat::Dexterity => "dexterity",
            Stat::Intelligence => "intelligence",
            Stat::Health => "health",
            Stat::EnergyShield => "energy_shield",
            Stat::Mana => "mana",
            Stat::Spirit => "spirit",
            Stat::Armor => "armor",
            Stat::Evasion => "evasion",
            Stat::Block => "block",
            Stat::FireResistance => "fire_resistance",
            Stat::LightningResistance => "lightning_resistance",
            Stat::ColdResistance => "cold_resistance",
            Stat::ChaosResistance => "chaos_resistance",
            Stat::Accuracy => "accuracy",
            Stat::PhysicalDamageMin => "physical_damage_min",
            Stat::PhysicalDamageMax => "physical_damage_max",
            Stat::FireDamageMin => "fire_damage_min",
            Stat::FireDamageMax => "fire_damage_max",
            Stat::HealthRegen => "health_regen",
            Stat::LifeLeechPercent => "life_leech_percent",
            Stat::ManaLeechPercent => "mana_leech_percent",
            Stat::ManaRegenPercent => "mana_regen_percent",
            Stat::ItemRarityPercent => "item_rarity_percent",
            Stat::EvasionPercent => "evasion_percent",
        }
    }

    /// Look up a stat by its snake_case key
    pub fn from_key(key: &str) -> Option<Stat> {
        Stat::ALL.iter().copied().find(|stat| stat.key() == key)
    }

    /// Human-readable label, e.g. "Fire resistance"
    pub fn label(self) -> String {
        let spaced = self.key().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether this stat is one of the four resistances
    pub fn is_resistance(self) -> bool {
        matches!(
            self,
            Stat::FireResistance
                | Stat::LightningResistance
                | Stat::ColdResistance
                | Stat::ChaosResistance
        )
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
