/*!
 * Color statistics and color-based selection of locator blocks.
 */

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::locator::LocatorBlock;

/// One row of the color frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    pub color: String,
    pub count: usize,
}

/// Distinct colors seen in a block sequence, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorTally {
    pub entries: Vec<ColorCount>,
}

impl ColorTally {
    /// Count colors across blocks, normalized to uppercase; uncolored blocks are skipped
    pub fn from_blocks(blocks: &[LocatorBlock]) -> Self {
        let mut tally = ColorTally::default();
        for color in blocks.iter().filter_map(|b| b.color.as_deref()) {
            let color = color.to_uppercase();
            match tally.entries.iter_mut().find(|e| e.color == color) {
                Some(entry) => entry.count += 1,
                None => tally.entries.push(ColorCount { color, count: 1 }),
            }
        }
        tally
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of a color, 0 when unseen
    pub fn count_of(&self, color: &str) -> usize {
        let color = color.to_uppercase();
        self.entries
            .iter()
            .find(|e| e.color == color)
            .map_or(0, |e| e.count)
    }

    /// All distinct colors, usable as a default "accept everything" selection
    pub fn colors(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.color.clone()).collect()
    }
}

/// Keep the blocks whose color is in `accepted`, preserving order.
///
/// Colors compare case-insensitively. Blocks without a color never match.
pub fn filter_by_colors<S: AsRef<str>>(blocks: &[LocatorBlock], accepted: &[S]) -> Vec<LocatorBlock> {
    let accepted: HashSet<String> = accepted
        .iter()
        .map(|c| c.as_ref().trim().to_uppercase())
        .collect();

    let kept: Vec<LocatorBlock> = blocks
        .iter()
        .filter(|b| {
            b.color
                .as_deref()
                .is_some_and(|c| accepted.contains(&c.to_uppercase()))
        })
        .cloned()
        .collect();

    debug!("Color filter kept {} of {} block(s)", kept.len(), blocks.len());
    kept
}
