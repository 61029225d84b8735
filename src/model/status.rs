//! Line evaluation - bingo / reach detection over the marked cells
//!
//! [`evaluate`] is a pure function of the marks and the reach policy. The card
//! calls it after every mark change with the post-toggle marks; nothing here
//! keeps state between calls.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cell::{CellIndex, CELL_COUNT, FREE_INDEX};
use super::lines::{Line, LINES};

/// Marked flags for all 25 cells
///
/// The FREE cell's stored flag is always `false`; [`Marks::is_satisfied`]
/// reports it as satisfied regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Marks([bool; CELL_COUNT]);

impl Marks {
    /// Build marks from raw indices. FREE and out-of-range indices are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut marks = Self::default();
        for i in indices.into_iter().filter_map(CellIndex::new) {
            marks.set(i, true);
        }
        marks
    }

    /// Stored marked flag (always `false` for the FREE cell)
    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Marked, or the FREE cell
    #[inline]
    pub fn is_satisfied(&self, index: usize) -> bool {
        index == FREE_INDEX || self.is_marked(index)
    }

    #[inline]
    pub fn set(&mut self, index: CellIndex, marked: bool) {
        self.0[index.get()] = marked;
    }

    /// Flip a cell, returning the new value
    #[inline]
    pub fn toggle(&mut self, index: CellIndex) -> bool {
        let slot = &mut self.0[index.get()];
        *slot = !*slot;
        *slot
    }

    pub fn clear(&mut self) {
        self.0 = [false; CELL_COUNT];
    }

    /// Number of user-marked cells (FREE excluded)
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }
}

/// Whether near-complete lines are surfaced as a reach state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReachPolicy {
    /// Report reach when no line is complete
    #[default]
    Highlight,
    /// Only report bingo
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    None,
    Reach,
    Bingo,
}

/// Result of evaluating a card's marks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BingoStatus {
    pub kind: StatusKind,
    /// Number of fully satisfied lines
    pub bingo_count: usize,
    /// Number of lines one cell short; zero whenever `kind` is not `Reach`
    pub reach_count: usize,
    /// Indices into [`LINES`] of the qualifying lines
    pub lines: Vec<usize>,
    /// Cells the renderer should emphasize, ascending
    pub highlighted: BTreeSet<u8>,
}

impl BingoStatus {
    #[inline]
    pub fn is_bingo(&self) -> bool {
        self.kind == StatusKind::Bingo
    }

    #[inline]
    pub fn is_reach(&self) -> bool {
        self.kind == StatusKind::Reach
    }

    #[inline]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&(index as u8))
    }

    /// Short banner text for the current state, if any
    pub fn banner(&self) -> Option<String> {
        match self.kind {
            StatusKind::None => None,
            StatusKind::Reach if self.reach_count > 1 => {
                Some(format!("REACH! ({} lines)", self.reach_count))
            }
            StatusKind::Reach => Some("REACH!".to_string()),
            StatusKind::Bingo if self.bingo_count > 1 => {
                Some(format!("BINGO! ×{}", self.bingo_count))
            }
            StatusKind::Bingo => Some("BINGO!".to_string()),
        }
    }
}

/// Count cells of a line that are marked or FREE
#[inline]
pub fn satisfied_count(marks: &Marks, line: &Line) -> usize {
    line.iter()
        .filter(|&&i| marks.is_satisfied(i as usize))
        .count()
}

/// Indices into [`LINES`] of every fully satisfied line
pub fn bingo_lines(marks: &Marks) -> Vec<usize> {
    lines_with_count(marks, LINES[0].len())
}

fn lines_with_count(marks: &Marks, count: usize) -> Vec<usize> {
    LINES
        .iter()
        .enumerate()
        .filter(|(_, line)| satisfied_count(marks, line) == count)
        .map(|(i, _)| i)
        .collect()
}

/// Evaluate the marks against all twelve lines
pub fn evaluate(marks: &Marks, policy: ReachPolicy) -> BingoStatus {
    let bingo = bingo_lines(marks);
    if !bingo.is_empty() {
        let highlighted = bingo
            .iter()
            .flat_map(|&l| LINES[l].iter().copied())
            .collect();
        return BingoStatus {
            kind: StatusKind::Bingo,
            bingo_count: bingo.len(),
            reach_count: 0,
            lines: bingo,
            highlighted,
        };
    }

    if policy == ReachPolicy::Ignore {
        return BingoStatus::default();
    }

    let reach = lines_with_count(marks, LINES[0].len() - 1);
    if reach.is_empty() {
        return BingoStatus::default();
    }

    // Only the cells the player actually marked light up, never the FREE cell
    let highlighted = reach
        .iter()
        .flat_map(|&l| LINES[l].iter().copied())
        .filter(|&i| marks.is_marked(i as usize))
        .collect();

    BingoStatus {
        kind: StatusKind::Reach,
        bingo_count: 0,
        reach_count: reach.len(),
        lines: reach,
        highlighted,
    }
}
