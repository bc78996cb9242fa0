//! Console report: load, search, print

use item_core::{load_items, ItemKind, ParsedItems};
use log::warn;
use search_core::{find_best, Combination};
use serde_json::json;
use stat_core::{stat_block::format_value, ConfigError, ScoreWeights};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

const RULE_WIDTH: usize = 60;
const NO_ITEMS: &str = "Failed to load any jewelry items.";

/// What the binary was asked to do
///
/// With `json` set, stdout carries a single JSON document: the winning
/// combination or an `{"error": ...}` object.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub weights: Option<PathBuf>,
    pub list: bool,
    pub json: bool,
}

/// Failures that abort the run
///
/// A missing or unreadable input file is not one of them: it is reported
/// and treated as an empty item list.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

fn rule(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn run(options: &Options, out: &mut impl Write) -> Result<(), RunError> {
    let weights = match &options.weights {
        Some(path) => ScoreWeights::load_from_path(path)?,
        None => ScoreWeights::default(),
    };

    if !options.json {
        writeln!(out, "Jewelry stat optimizer")?;
        rule(out)?;
        writeln!(out, "Reading items from {}...", options.input.display())?;
    }

    let parsed = match load_items(&options.input) {
        Ok(parsed) => parsed,
        Err(err) if options.json => {
            warn!("{err}");
            ParsedItems::default()
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            ParsedItems::default()
        }
    };

    if parsed.is_empty() {
        if options.json {
            write_json_error(out, NO_ITEMS)?;
        } else {
            writeln!(out, "{NO_ITEMS}")?;
        }
        return Ok(());
    }
    if parsed.dropped > 0 {
        warn!("{} blocks were not rings or amulets with a name", parsed.dropped);
    }

    if !options.json {
        write_counts(&parsed, out)?;
    }
    if options.list && !options.json {
        for item in &parsed.items {
            writeln!(out, "{item}")?;
            writeln!(out)?;
        }
    }

    match find_best(&parsed.items, &weights) {
        Ok(best) if options.json => {
            serde_json::to_writer_pretty(&mut *out, &best)?;
            writeln!(out)?;
        }
        Ok(best) => write_combination(&best, out)?,
        Err(err) if options.json => write_json_error(out, &err.to_string())?,
        Err(err) => {
            writeln!(out, "{err}")?;
            writeln!(out, "No optimal combination found.")?;
        }
    }

    Ok(())
}

/// `{"error": message}` on a line of its own
fn write_json_error(out: &mut impl Write, message: &str) -> Result<(), RunError> {
    serde_json::to_writer_pretty(&mut *out, &json!({ "error": message }))?;
    writeln!(out)?;
    Ok(())
}

fn write_counts(parsed: &ParsedItems, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Loaded {} items:", parsed.items.len())?;
    writeln!(out, "- Rings: {}", parsed.count_kind(ItemKind::Ring))?;
    writeln!(out, "- Amulets: {}", parsed.count_kind(ItemKind::Amulet))?;
    writeln!(out)
}

fn write_combination(best: &Combination<'_>, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Optimal combination:")?;
    rule(out)?;
    for item in best.items() {
        writeln!(out, "{}: {}", item.kind, item.name)?;
    }

    writeln!(out)?;
    writeln!(out, "Combined stats:")?;
    rule(out)?;
    if !best.stats.is_zero() {
        writeln!(out, "{}", best.stats)?;
    }
    writeln!(out)?;
    writeln!(out, "Score: {}", format_value(best.score))
}
