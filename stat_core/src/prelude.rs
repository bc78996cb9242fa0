//! Prelude module for convenient imports
//!
//! ```rust
//! use stat_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::StatVector;
pub use crate::types::Stat;

// Scoring
pub use crate::config::{ConfigError, ScoreWeights};

// Parsing
pub use crate::line::{apply_line, parse_line, PatternKind};
