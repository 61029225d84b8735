//! Cell addressing and per-cell display hints
//!
//! The card is a 5×5 grid stored row-major. Index 12 is the FREE center cell:
//! it has no text, is always satisfied for line purposes, and can never be
//! edited or toggled. [`CellIndex`] only represents the 24 editable cells, so
//! store mutations cannot target the FREE cell or fall off the grid.

use std::fmt;

use serde::Serialize;

/// Cells per row / column
pub const GRID_SIZE: usize = 5;
/// Total number of cells on a card
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Row-major index of the FREE center cell
pub const FREE_INDEX: usize = 12;

/// Index of an editable (non-FREE) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Validate a raw row-major index. Returns `None` for the FREE cell and
    /// for anything outside `0..25`.
    pub const fn new(index: usize) -> Option<Self> {
        if index >= CELL_COUNT || index == FREE_INDEX {
            None
        } else {
            Some(Self(index as u8))
        }
    }

    /// Build from a zero-based row and column
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Self::new(row * GRID_SIZE + col)
    }

    /// Raw row-major index
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.get() / GRID_SIZE
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.get() % GRID_SIZE
    }

    /// Iterate over all 24 editable cells in row-major order
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT).filter_map(CellIndex::new)
    }
}

impl fmt::Display for CellIndex {
    /// Board notation: column letter then row number, `A1` is the top-left cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col() as u8) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> Self {
        index.get()
    }
}

/// Display size bucket for a cell's text
///
/// Longer texts get smaller type so they still fit the cell. This is only a
/// rendering hint; texts of any length are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    /// 14px, empty text or up to 10 characters
    #[default]
    Large,
    /// 12px, up to 20 characters
    Medium,
    /// 10px, up to 30 characters
    Small,
    /// 8px, up to 50 characters
    Smaller,
    /// 6px, anything longer
    Tiny,
}

impl FontSize {
    /// All buckets from largest to smallest type
    pub const ALL: [FontSize; 5] = [
        FontSize::Large,
        FontSize::Medium,
        FontSize::Small,
        FontSize::Smaller,
        FontSize::Tiny,
    ];

    /// Pick the bucket for a cell text. Length is counted in characters,
    /// not bytes, so multi-byte scripts are not penalized.
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            0..=10 => FontSize::Large,
            11..=20 => FontSize::Medium,
            21..=30 => FontSize::Small,
            31..=50 => FontSize::Smaller,
            _ => FontSize::Tiny,
        }
    }

    /// Nominal pixel size at 1× scale
    pub const fn px(self) -> f32 {
        match self {
            FontSize::Large => 14.0,
            FontSize::Medium => 12.0,
            FontSize::Small => 10.0,
            FontSize::Smaller => 8.0,
            FontSize::Tiny => 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_index_is_not_a_cell_index() {
        assert!(CellIndex::new(FREE_INDEX).is_none());
        assert!(CellIndex::from_row_col(2, 2).is_none());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(CellIndex::new(25).is_none());
        assert!(CellIndex::from_row_col(5, 0).is_none());
        assert!(CellIndex::from_row_col(0, 5).is_none());
    }

    #[test]
    fn test_row_col_roundtrip() {
        let idx = CellIndex::from_row_col(3, 1).unwrap();
        assert_eq!(idx.get(), 16);
        assert_eq!((idx.row(), idx.col()), (3, 1));
    }

    #[test]
    fn test_all_yields_24_cells() {
        let all: Vec<_> = CellIndex::all().collect();
        assert_eq!(all.len(), 24);
        assert!(all.iter().all(|i| i.get() != FREE_INDEX));
    }

    #[test]
    fn test_display_board_notation() {
        assert_eq!(CellIndex::new(0).unwrap().to_string(), "A1");
        assert_eq!(CellIndex::new(24).unwrap().to_string(), "E5");
        assert_eq!(CellIndex::new(7).unwrap().to_string(), "C2");
    }

    #[test]
    fn test_font_size_bucket_boundaries() {
        assert_eq!(FontSize::for_text(""), FontSize::Large);
        assert_eq!(FontSize::for_text(&"x".repeat(10)), FontSize::Large);
        assert_eq!(FontSize::for_text(&"x".repeat(11)), FontSize::Medium);
        assert_eq!(FontSize::for_text(&"x".repeat(20)), FontSize::Medium);
        assert_eq!(FontSize::for_text(&"x".repeat(21)), FontSize::Small);
        assert_eq!(FontSize::for_text(&"x".repeat(30)), FontSize::Small);
        assert_eq!(FontSize::for_text(&"x".repeat(31)), FontSize::Smaller);
        assert_eq!(FontSize::for_text(&"x".repeat(50)), FontSize::Smaller);
        assert_eq!(FontSize::for_text(&"x".repeat(51)), FontSize::Tiny);
    }

    #[test]
    fn test_font_size_monotonic_in_length() {
        let mut prev = FontSize::for_text("").px();
        for len in 1..=80 {
            let px = FontSize::for_text(&"x".repeat(len)).px();
            assert!(px <= prev, "size grew at length {}", len);
            prev = px;
        }
    }

    #[test]
    fn test_font_size_counts_chars_not_bytes() {
        // 10 three-byte characters
        assert_eq!(FontSize::for_text("ビンゴビンゴビンゴビ"), FontSize::Large);
    }
}
