//! Score weights: how much one point of each stat is worth

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::ConfigError;
use crate::stat_block::StatVector;
use crate::types::Stat;

/// Per-stat multipliers used to score a combined stat vector
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    weights: [f64; Stat::COUNT],
}

/// TOML layout of a weights file
#[derive(Debug, Deserialize)]
struct WeightsFileConfig {
    #[serde(default)]
    weights: HashMap<String, f64>,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        let mut weights = ScoreWeights::uniform(1.0);
        weights.set(Stat::Dexterity, 3.0);
        weights.set(Stat::Health, 2.0);
        weights.set(Stat::Spirit, 2.0);
        weights.set(Stat::Armor, 0.5);
        weights.set(Stat::Evasion, 2.0);
        for stat in Stat::ALL.into_iter().filter(|stat| stat.is_resistance()) {
            weights.set(stat, 5.0);
        }
        weights
    }
}

impl ScoreWeights {
    /// Every stat weighted the same
    pub fn uniform(weight: f64) -> Self {
        ScoreWeights {
            weights: [weight; Stat::COUNT],
        }
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.weights[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, weight: f64) {
        self.weights[stat.index()] = weight;
    }

    /// Weighted linear sum over every stat
    pub fn score(&self, stats: &StatVector) -> f64 {
        stats
            .iter()
            .map(|(stat, value)| value * self.get(stat))
            .sum()
    }

    /// Load weights from a TOML file, starting from the defaults
    ///
    /// Keys under `[weights]` must be stat keys such as `fire_resistance`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_path(path))
    }

    fn from_toml_str(content: &str) -> Result<Self, PathlessError> {
        let config: WeightsFileConfig = toml::from_str(content).map_err(PathlessError::Parse)?;

        let mut weights = ScoreWeights::default();
        for (key, weight) in config.weights {
            let stat = Stat::from_key(&key)
                .ok_or_else(|| PathlessError::Validation(format!("unknown stat '{}'", key)))?;
            if !weight.is_finite() {
                return Err(PathlessError::Validation(format!(
                    "weight for '{}' must be finite, got {}",
                    key, weight
                )));
            }
            weights.set(stat, weight);
        }
        Ok(weights)
    }
}

/// Parse failure before the file path is attached
enum PathlessError {
    Parse(toml::de::Error),
    Validation(String),
}

impl PathlessError {
    fn with_path(self, path: &Path) -> ConfigError {
        match self {
            PathlessError::Parse(error) => ConfigError::Parse {
                error,
                path: path.to_path_buf(),
            },
            PathlessError::Validation(message) => ConfigError::Validation {
                message,
                path: path.to_path_buf(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_weights(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoreWeights::default();
        assert!((weights.get(Stat::Strength) - 1.0).abs() < f64::EPSILON);
        assert!((weights.get(Stat::Dexterity) - 3.0).abs() < f64::EPSILON);
        assert!((weights.get(Stat::Armor) - 0.5).abs() < f64::EPSILON);
        assert!((weights.get(Stat::ChaosResistance) - 5.0).abs() < f64::EPSILON);
        assert!((weights.get(Stat::HealthRegen) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_weighted_sum() {
        let stats = StatVector::from_pairs([(Stat::Strength, 20.0), (Stat::FireResistance, 5.0)]);
        let score = ScoreWeights::default().score(&stats);
        assert!((score - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_of_zero_is_zero() {
        assert_eq!(ScoreWeights::default().score(&StatVector::zero()), 0.0);
    }

    #[test]
    fn test_load_overrides_defaults() {
        let file = write_weights(
            r#"
[weights]
dexterity = 4.0
fire_resistance = 6.5
"#,
        );

        let weights = ScoreWeights::load_from_path(file.path()).unwrap();
        assert!((weights.get(Stat::Dexterity) - 4.0).abs() < f64::EPSILON);
        assert!((weights.get(Stat::FireResistance) - 6.5).abs() < f64::EPSILON);
        // Untouched keys keep their defaults
        assert!((weights.get(Stat::ColdResistance) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_weights("");
        let weights = ScoreWeights::load_from_path(file.path()).unwrap();
        assert_eq!(weights, ScoreWeights::default());
    }

    #[test]
    fn test_unknown_stat_is_validation_error() {
        let file = write_weights("[weights]\ncharisma = 2.0\n");
        let result = ScoreWeights::load_from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let file = write_weights("[weights\nstrength = ");
        let result = ScoreWeights::load_from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ScoreWeights::load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
