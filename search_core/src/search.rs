//! Exhaustive ring pair + amulet search

use crate::SearchError;
use item_core::Item;
use log::{debug, info};
use serde::Serialize;
use stat_core::{ScoreWeights, StatVector};

/// The winning set of jewelry and what it adds up to
#[derive(Debug, Clone, Serialize)]
pub struct Combination<'a> {
    /// The two rings, in input order
    pub rings: [&'a Item; 2],
    pub amulet: &'a Item,
    /// Explicit and implicit stats of all three items summed
    pub stats: StatVector,
    pub score: f64,
    /// How many triples the search scored, set by [`find_best`]
    pub evaluated: usize,
}

impl<'a> Combination<'a> {
    /// Score a specific ring pair and amulet
    ///
    /// `evaluated` is left at 0; it describes a whole search.
    pub fn evaluate(
        first: &'a Item,
        second: &'a Item,
        amulet: &'a Item,
        weights: &ScoreWeights,
    ) -> Self {
        let stats: StatVector = [first, second, amulet]
            .iter()
            .map(|item| item.total_stats())
            .sum();
        let score = weights.score(&stats);

        Combination {
            rings: [first, second],
            amulet,
            stats,
            score,
            evaluated: 0,
        }
    }

    /// Rings first, then the amulet
    pub fn items(&self) -> [&'a Item; 3] {
        [self.rings[0], self.rings[1], self.amulet]
    }
}

/// Every unordered ring pair `(i, j)` with `i < j`, crossed with every amulet
///
/// Order: first ring, then second ring, then amulet, each in input order.
pub fn triples(rings: usize, amulets: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..rings).flat_map(move |i| {
        (i + 1..rings).flat_map(move |j| (0..amulets).map(move |a| (i, j, a)))
    })
}

/// Find the highest-scoring two rings and one amulet
///
/// Ties keep the triple found first.
pub fn find_best<'a>(
    items: &'a [Item],
    weights: &ScoreWeights,
) -> Result<Combination<'a>, SearchError> {
    let rings: Vec<&Item> = items.iter().filter(|item| item.is_ring()).collect();
    let amulets: Vec<&Item> = items.iter().filter(|item| item.is_amulet()).collect();

    if rings.len() < 2 {
        return Err(SearchError::NotEnoughRings { found: rings.len() });
    }
    if amulets.is_empty() {
        return Err(SearchError::NoAmulets);
    }

    let mut best: Option<Combination<'a>> = None;
    let mut evaluated = 0;

    for (i, j, a) in triples(rings.len(), amulets.len()) {
        let candidate = Combination::evaluate(rings[i], rings[j], amulets[a], weights);
        evaluated += 1;
        // Strictly greater, so a tie never replaces an earlier triple
        if best.as_ref().map_or(true, |best| candidate.score > best.score) {
            debug!(
                "New best {:.2}: {} + {} + {}",
                candidate.score, rings[i].name, rings[j].name, amulets[a].name
            );
            best = Some(candidate);
        }
    }

    // At least one triple exists once both checks above pass
    let mut best = best.ok_or(SearchError::NoAmulets)?;
    best.evaluated = evaluated;
    info!(
        "Scored {} combinations of {} rings and {} amulets, best {:.2}",
        evaluated,
        rings.len(),
        amulets.len(),
        best.score
    );
    Ok(best)
}
