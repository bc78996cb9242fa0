//! Stat-line parser - turns one line of item text into stat deltas
//!
//! Lines are matched against a fixed phrase table in priority order. The first
//! pattern whose keywords all appear in the line claims it, even if its number
//! cannot be extracted; later patterns are never tried for that line.

mod patterns;

pub use patterns::PatternKind;

use crate::stat_block::StatVector;
use log::debug;
use patterns::{build_patterns, Effect, LinePattern, RESISTANCE_ELEMENTS};
use regex::Captures;
use std::sync::OnceLock;

/// Marker the game appends to implicit modifier lines
pub const IMPLICIT_MARKER: &str = "(implicit)";

static PATTERNS: OnceLock<Vec<LinePattern>> = OnceLock::new();

fn patterns() -> &'static [LinePattern] {
    PATTERNS.get_or_init(build_patterns)
}

/// Parse one stat line and add its values to `stats`
///
/// Returns the pattern that claimed the line, or `None` for lines that match
/// nothing (decorative text, unsupported modifiers). Neither case is an error.
pub fn apply_line(line: &str, stats: &mut StatVector) -> Option<PatternKind> {
    let cleaned = line.replace(IMPLICIT_MARKER, "");
    let line = cleaned.trim();

    let pattern = patterns().iter().find(|p| p.matches(line))?;
    match pattern.regex.captures(line) {
        Some(caps) => {
            if !apply_effect(pattern, &caps, line, stats) {
                debug!("{:?} value out of range in '{}', skipped", pattern.kind, line);
            }
        }
        None => debug!("{:?} keywords matched but no value in '{}', skipped", pattern.kind, line),
    }
    Some(pattern.kind)
}

/// Parse a line into a fresh vector
pub fn parse_line(line: &str) -> StatVector {
    let mut stats = StatVector::zero();
    apply_line(line, &mut stats);
    stats
}

fn apply_effect(pattern: &LinePattern, caps: &Captures, line: &str, stats: &mut StatVector) -> bool {
    match pattern.effect {
        Effect::Resistance => {
            let Some(value) = whole(caps, 1) else {
                return false;
            };
            if let Some((_, stat)) = RESISTANCE_ELEMENTS
                .iter()
                .find(|(element, _)| line.contains(element))
            {
                stats.add_to(*stat, value);
            }
            true
        }
        Effect::Flat(targets) => {
            let Some(value) = whole(caps, 1) else {
                return false;
            };
            for stat in targets {
                stats.add_to(*stat, value);
            }
            true
        }
        Effect::Decimal(stat) => {
            let Some(value) = decimal(caps, 1) else {
                return false;
            };
            stats.add_to(stat, value);
            true
        }
        Effect::Range(min_stat, max_stat) => {
            let (Some(min), Some(max)) = (whole(caps, 1), whole(caps, 2)) else {
                return false;
            };
            stats.add_to(min_stat, min);
            stats.add_to(max_stat, max);
            true
        }
    }
}

fn whole(caps: &Captures, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse::<u32>().ok().map(f64::from)
}

fn decimal(caps: &Captures, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    /// Assert that exactly the given stats are set and everything else is zero
    fn assert_only(stats: &StatVector, expected: &[(Stat, f64)]) {
        for (stat, value) in stats.iter() {
            let want = expected
                .iter()
                .find(|(s, _)| *s == stat)
                .map(|(_, v)| *v)
                .unwrap_or(0.0);
            assert!(
                (value - want).abs() < 1e-9,
                "{:?}: expected {}, got {}",
                stat,
                want,
                value
            );
        }
    }

    #[test]
    fn test_fire_resistance() {
        let stats = parse_line("+23% к сопротивлению огню");
        assert_only(&stats, &[(Stat::FireResistance, 23.0)]);
    }

    #[test]
    fn test_each_resistance_element() {
        let cases = [
            ("+11% к сопротивлению молнии", Stat::LightningResistance),
            ("+12% к сопротивлению холоду", Stat::ColdResistance),
            ("+13% к сопротивлению хаосу", Stat::ChaosResistance),
        ];
        for (line, stat) in cases {
            let stats = parse_line(line);
            assert!(stats.get(stat) > 10.0, "{} did not set {:?}", line, stat);
            assert_eq!(stats.iter_nonzero().count(), 1);
        }
    }

    #[test]
    fn test_resistance_unknown_element_is_claimed_but_ignored() {
        let mut stats = StatVector::zero();
        let kind = apply_line("+10% к сопротивлению яду", &mut stats);
        assert_eq!(kind, Some(PatternKind::Resistance));
        assert!(stats.is_zero());
    }

    #[test]
    fn test_resistance_without_number_is_skipped() {
        let mut stats = StatVector::zero();
        let kind = apply_line("+к сопротивлению огню", &mut stats);
        assert_eq!(kind, Some(PatternKind::Resistance));
        assert!(stats.is_zero());
    }

    #[test]
    fn test_all_attributes() {
        let stats = parse_line("+7 ко всем характеристикам");
        assert_only(
            &stats,
            &[
                (Stat::Strength, 7.0),
                (Stat::Dexterity, 7.0),
                (Stat::Intelligence, 7.0),
            ],
        );
    }

    #[test]
    fn test_single_attributes() {
        let cases = [
            ("+10 к силе", Stat::Strength),
            ("+10 к ловкости", Stat::Dexterity),
            ("+10 к интеллекту", Stat::Intelligence),
            ("+10 к максимуму здоровья", Stat::Health),
            ("+10 к максимуму маны", Stat::Mana),
            ("+10 к меткости", Stat::Accuracy),
        ];
        for (line, stat) in cases {
            assert_only(&parse_line(line), &[(stat, 10.0)]);
        }
    }

    #[test]
    fn test_percentages() {
        assert_only(
            &parse_line("18% увеличение уклонения"),
            &[(Stat::EvasionPercent, 18.0)],
        );
        assert_only(
            &parse_line("14% повышение редкости найденных предметов"),
            &[(Stat::ItemRarityPercent, 14.0)],
        );
        assert_only(
            &parse_line("25% повышение скорости регенерации маны"),
            &[(Stat::ManaRegenPercent, 25.0)],
        );
    }

    #[test]
    fn test_life_regeneration_is_fractional() {
        assert_only(
            &parse_line("Регенерация 3.5 здоровья в секунду"),
            &[(Stat::HealthRegen, 3.5)],
        );
        assert_only(
            &parse_line("Регенерация 4 здоровья в секунду"),
            &[(Stat::HealthRegen, 4.0)],
        );
    }

    #[test]
    fn test_added_damage_ranges() {
        assert_only(
            &parse_line("Добавляет от 2 до 5 физического урона к атакам"),
            &[(Stat::PhysicalDamageMin, 2.0), (Stat::PhysicalDamageMax, 5.0)],
        );
        assert_only(
            &parse_line("Добавляет от 4 до 9 урона от огня к атакам"),
            &[(Stat::FireDamageMin, 4.0), (Stat::FireDamageMax, 9.0)],
        );
    }

    #[test]
    fn test_leech() {
        assert_only(
            &parse_line("6.5% физического урона от атак похищается в виде здоровья"),
            &[(Stat::LifeLeechPercent, 6.5)],
        );
        assert_only(
            &parse_line("4% физического урона от атак похищается в виде маны"),
            &[(Stat::ManaLeechPercent, 4.0)],
        );
    }

    #[test]
    fn test_implicit_marker_is_stripped() {
        let mut stats = StatVector::zero();
        let kind = apply_line("  +20% к сопротивлению холоду (implicit)  ", &mut stats);
        assert_eq!(kind, Some(PatternKind::Resistance));
        assert_only(&stats, &[(Stat::ColdResistance, 20.0)]);
    }

    #[test]
    fn test_unknown_line_is_ignored() {
        let mut stats = StatVector::from_pairs([(Stat::Mana, 5.0)]);
        let before = stats;
        for line in ["Кольцо", "--------", "", "Качество: +20%", "+15 к духу"] {
            assert_eq!(apply_line(line, &mut stats), None, "{} was claimed", line);
        }
        assert_eq!(stats, before);
    }

    #[test]
    fn test_values_accumulate() {
        let mut stats = StatVector::zero();
        apply_line("+10 к силе", &mut stats);
        apply_line("+5 к силе", &mut stats);
        assert_only(&stats, &[(Stat::Strength, 15.0)]);
    }

    #[test]
    fn test_first_match_wins() {
        // Contains both the resistance and the strength keywords
        let mut stats = StatVector::zero();
        let kind = apply_line("+9% к сопротивлению огню и к силе", &mut stats);
        assert_eq!(kind, Some(PatternKind::Resistance));
        assert_only(&stats, &[(Stat::FireResistance, 9.0)]);
    }

    #[test]
    fn test_strength_without_plus_is_skipped() {
        let mut stats = StatVector::zero();
        assert_eq!(apply_line("10 к силе", &mut stats), Some(PatternKind::Strength));
        assert!(stats.is_zero());
    }
}
