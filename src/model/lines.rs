//! The twelve winning lines of a 5×5 card

use super::cell::{FREE_INDEX, GRID_SIZE};

/// Five row-major cell indices forming a row, column or diagonal
pub type Line = [u8; GRID_SIZE];

/// Rows top to bottom, columns left to right, then the two diagonals
pub const LINES: [Line; 12] = [
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19],
    [20, 21, 22, 23, 24],
    [0, 5, 10, 15, 20],
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    [0, 6, 12, 18, 24],
    [4, 8, 12, 16, 20],
];

/// Whether a line passes through the FREE center cell
#[inline]
pub fn contains_free(line: &Line) -> bool {
    line.contains(&(FREE_INDEX as u8))
}

/// Human-readable name for `LINES[line_idx]`
pub fn line_label(line_idx: usize) -> String {
    match line_idx {
        0..=4 => format!("row {}", line_idx + 1),
        5..=9 => format!("column {}", (b'A' + (line_idx - 5) as u8) as char),
        10 => "diagonal".to_string(),
        11 => "anti-diagonal".to_string(),
        _ => format!("line {}", line_idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cell::CELL_COUNT;

    #[test]
    fn test_every_line_has_distinct_in_range_cells() {
        for line in LINES.iter() {
            let mut sorted = *line;
            sorted.sort_unstable();
            assert!(sorted.windows(2).all(|w| w[0] < w[1]));
            assert!(line.iter().all(|&i| (i as usize) < CELL_COUNT));
        }
    }

    #[test]
    fn test_free_cell_lines() {
        let through_free: Vec<usize> = (0..LINES.len())
            .filter(|&i| contains_free(&LINES[i]))
            .collect();
        // middle row, middle column, both diagonals
        assert_eq!(through_free, vec![2, 7, 10, 11]);
    }

    #[test]
    fn test_every_cell_is_on_some_line() {
        for cell in 0..CELL_COUNT as u8 {
            assert!(LINES.iter().any(|l| l.contains(&cell)));
        }
    }

    #[test]
    fn test_line_labels() {
        assert_eq!(line_label(0), "row 1");
        assert_eq!(line_label(7), "column C");
        assert_eq!(line_label(10), "diagonal");
        assert_eq!(line_label(11), "anti-diagonal");
    }
}
