//! Phrase table for Russian item text, in dispatch priority order

use crate::types::Stat;
use regex::Regex;
use serde::Serialize;

/// Which phrase template claimed a stat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Resistance,
    AllAttributes,
    Strength,
    Dexterity,
    Intelligence,
    MaximumLife,
    MaximumMana,
    Accuracy,
    EvasionPercent,
    ItemRarity,
    LifeRegeneration,
    ManaRegeneration,
    AddedPhysical,
    AddedFire,
    LifeLeech,
    ManaLeech,
}

/// What a matched pattern does with its captured numbers
#[derive(Debug, Clone, Copy)]
pub(crate) enum Effect {
    /// One whole number; the target resistance is chosen by element word
    Resistance,
    /// One whole number added to every listed stat
    Flat(&'static [Stat]),
    /// One decimal number
    Decimal(Stat),
    /// `from N to M` added to a min/max pair
    Range(Stat, Stat),
}

#[derive(Debug)]
pub(crate) struct LinePattern {
    pub kind: PatternKind,
    /// Every keyword must be a substring of the line
    pub keywords: &'static [&'static str],
    pub regex: Regex,
    pub effect: Effect,
}

impl LinePattern {
    pub fn matches(&self, line: &str) -> bool {
        self.keywords.iter().all(|keyword| line.contains(keyword))
    }
}

/// Element word → resistance, checked in order
pub(crate) const RESISTANCE_ELEMENTS: [(&str, Stat); 4] = [
    ("огню", Stat::FireResistance),
    ("молнии", Stat::LightningResistance),
    ("холоду", Stat::ColdResistance),
    ("хаосу", Stat::ChaosResistance),
];

const PLUS_NUMBER: &str = r"\+(\d+)";
const PERCENT: &str = r"(\d+)%";
const DECIMAL_PERCENT: &str = r"(\d+\.?\d*)%";
const RANGE: &str = r"от (\d+) до (\d+)";

fn pattern(
    kind: PatternKind,
    keywords: &'static [&'static str],
    regex: &str,
    effect: Effect,
) -> LinePattern {
    LinePattern {
        kind,
        keywords,
        // Every expression in this table is a literal
        regex: Regex::new(regex).expect("invalid built-in stat regex"),
        effect,
    }
}

pub(crate) fn build_patterns() -> Vec<LinePattern> {
    use PatternKind::*;

    vec![
        pattern(
            Resistance,
            &["+", "к сопротивлению"],
            r"\+(\d+)%",
            Effect::Resistance,
        ),
        pattern(
            AllAttributes,
            &["ко всем характеристикам"],
            PLUS_NUMBER,
            Effect::Flat(&[Stat::Strength, Stat::Dexterity, Stat::Intelligence]),
        ),
        pattern(Strength, &["к силе"], PLUS_NUMBER, Effect::Flat(&[Stat::Strength])),
        pattern(Dexterity, &["к ловкости"], PLUS_NUMBER, Effect::Flat(&[Stat::Dexterity])),
        pattern(
            Intelligence,
            &["к интеллекту"],
            PLUS_NUMBER,
            Effect::Flat(&[Stat::Intelligence]),
        ),
        pattern(
            MaximumLife,
            &["к максимуму здоровья"],
            PLUS_NUMBER,
            Effect::Flat(&[Stat::Health]),
        ),
        pattern(MaximumMana, &["к максимуму маны"], PLUS_NUMBER, Effect::Flat(&[Stat::Mana])),
        pattern(Accuracy, &["к меткости"], PLUS_NUMBER, Effect::Flat(&[Stat::Accuracy])),
        pattern(
            EvasionPercent,
            &["увеличение уклонения"],
            PERCENT,
            Effect::Flat(&[Stat::EvasionPercent]),
        ),
        pattern(
            ItemRarity,
            &["повышение редкости найденных предметов"],
            PERCENT,
            Effect::Flat(&[Stat::ItemRarityPercent]),
        ),
        pattern(
            LifeRegeneration,
            &["Регенерация", "здоровья в секунду"],
            r"Регенерация (\d+\.?\d*)",
            Effect::Decimal(Stat::HealthRegen),
        ),
        pattern(
            ManaRegeneration,
            &["повышение скорости регенерации маны"],
            PERCENT,
            Effect::Flat(&[Stat::ManaRegenPercent]),
        ),
        pattern(
            AddedPhysical,
            &["Добавляет от", "физического урона к атакам"],
            RANGE,
            Effect::Range(Stat::PhysicalDamageMin, Stat::PhysicalDamageMax),
        ),
        pattern(
            AddedFire,
            &["Добавляет от", "урона от огня к атакам"],
            RANGE,
            Effect::Range(Stat::FireDamageMin, Stat::FireDamageMax),
        ),
        pattern(
            LifeLeech,
            &["физического урона от атак похищается в виде здоровья"],
            DECIMAL_PERCENT,
            Effect::Decimal(Stat::LifeLeechPercent),
        ),
        pattern(
            ManaLeech,
            &["физического урона от атак похищается в виде маны"],
            DECIMAL_PERCENT,
            Effect::Decimal(Stat::ManaLeechPercent),
        ),
    ]
}
