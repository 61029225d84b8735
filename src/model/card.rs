//! The bingo card - cell texts, marks and the derived status
//!
//! All mutation goes through [`Card`]. Font-size hints are recomputed on every
//! text edit and the status is re-evaluated on every mark change, so readers
//! never observe derived state that lags behind its source.

use super::cell::{CellIndex, FontSize, CELL_COUNT, FREE_INDEX};
use super::status::{evaluate, BingoStatus, Marks, ReachPolicy};

/// Label drawn in the FREE center cell
pub const FREE_LABEL: &str = "FREE";

/// Read-only view of a single cell position (FREE included)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub font_size: FontSize,
    pub marked: bool,
    pub free: bool,
    pub highlighted: bool,
}

/// Grid state store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    texts: [String; CELL_COUNT],
    font_sizes: [FontSize; CELL_COUNT],
    marks: Marks,
    status: BingoStatus,
    reach_policy: ReachPolicy,
}

impl Default for Card {
    fn default() -> Self {
        Self::new(ReachPolicy::default())
    }
}

impl Card {
    /// Empty, unmarked card
    pub fn new(reach_policy: ReachPolicy) -> Self {
        Self {
            texts: std::array::from_fn(|_| String::new()),
            font_sizes: [FontSize::default(); CELL_COUNT],
            marks: Marks::default(),
            status: BingoStatus::default(),
            reach_policy,
        }
    }

    // === Text layer ===

    /// Replace a cell's text and refresh its font-size hint
    pub fn set_cell_text(&mut self, index: CellIndex, text: impl Into<String>) {
        let text = text.into();
        let i = index.get();
        self.font_sizes[i] = FontSize::for_text(&text);
        self.texts[i] = text;
    }

    /// Empty every cell text; marks and status are left alone
    pub fn clear_text(&mut self) {
        for text in self.texts.iter_mut() {
            text.clear();
        }
        self.font_sizes = [FontSize::default(); CELL_COUNT];
    }

    /// Text at a raw index; the FREE cell always reads empty
    pub fn text(&self, index: usize) -> &str {
        self.texts.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn font_size(&self, index: usize) -> FontSize {
        self.font_sizes.get(index).copied().unwrap_or_default()
    }

    /// Number of editable cells holding non-empty text
    pub fn filled_count(&self) -> usize {
        self.texts.iter().filter(|t| !t.is_empty()).count()
    }

    // === Mark layer ===

    /// Flip a cell's mark and re-evaluate with the updated marks
    pub fn toggle_mark(&mut self, index: CellIndex) -> &BingoStatus {
        let marked = self.marks.toggle(index);
        self.status = evaluate(&self.marks, self.reach_policy);
        tracing::debug!(
            cell = %index,
            marked,
            kind = ?self.status.kind,
            bingo_count = self.status.bingo_count,
            "Toggled mark"
        );
        &self.status
    }

    /// Toggle from an unvalidated click position.
    ///
    /// Clicks on the FREE cell or outside the grid are ignored and return
    /// `false`; the marks and status are unchanged in that case.
    pub fn toggle_cell(&mut self, index: usize) -> bool {
        match CellIndex::new(index) {
            Some(cell) => {
                self.toggle_mark(cell);
                true
            }
            None => false,
        }
    }

    /// Unmark everything and reset the status; texts are left alone
    pub fn clear_marks(&mut self) {
        self.marks.clear();
        self.status = BingoStatus::default();
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marks.is_marked(index)
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn status(&self) -> &BingoStatus {
        &self.status
    }

    pub fn reach_policy(&self) -> ReachPolicy {
        self.reach_policy
    }

    /// Switch reach policy; the status is recomputed under the new policy
    pub fn set_reach_policy(&mut self, policy: ReachPolicy) {
        self.reach_policy = policy;
        self.status = evaluate(&self.marks, policy);
    }

    /// Check the derived-state invariants, panicking with `context` on failure
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        assert!(
            !self.marks.is_marked(FREE_INDEX),
            "[{}] FREE cell stored as marked",
            context
        );
        assert!(
            self.texts[FREE_INDEX].is_empty(),
            "[{}] FREE cell holds text",
            context
        );
        for (i, text) in self.texts.iter().enumerate() {
            assert_eq!(
                self.font_sizes[i],
                FontSize::for_text(text),
                "[{}] stale font size at cell {}",
                context,
                i
            );
        }
        assert_eq!(
            self.status,
            evaluate(&self.marks, self.reach_policy),
            "[{}] status out of sync with marks",
            context
        );
    }

    // === Views ===

    /// All 25 positions in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellView<'_>> + '_ {
        (0..CELL_COUNT).map(move |index| CellView {
            index,
            text: self.text(index),
            font_size: self.font_size(index),
            marked: self.marks.is_marked(index),
            free: index == FREE_INDEX,
            highlighted: self.status.is_highlighted(index),
        })
    }
}
