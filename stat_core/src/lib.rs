//! stat_core - Stat vectors, scoring and stat-line parsing for jewelry
//!
//! This library provides:
//! - Stat / StatVector: the fixed catalogue of character stats and a vector over it
//! - ScoreWeights: per-stat multipliers, optionally loaded from TOML
//! - apply_line: the stat-line parser for exported item text
//!
//! # Quick Start
//!
//! ```rust
//! use stat_core::prelude::*;
//!
//! let mut stats = StatVector::zero();
//! apply_line("+10 к силе", &mut stats);
//! apply_line("+5% к сопротивлению огню", &mut stats);
//!
//! assert_eq!(stats.get(Stat::Strength), 10.0);
//! assert_eq!(ScoreWeights::default().score(&stats), 35.0);
//! ```

pub mod config;
pub mod line;
pub mod prelude;
pub mod stat_block;
pub mod types;

pub use config::{ConfigError, ScoreWeights};
pub use line::{apply_line, parse_line, PatternKind, IMPLICIT_MARKER};
pub use stat_block::StatVector;
pub use types::Stat;
