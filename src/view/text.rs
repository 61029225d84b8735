//! Plain-text rendering of a card for the terminal front end

use std::fmt::Write as _;

use crate::model::{CardSnapshot, CellIndex, CellSnapshot, StatusKind, FREE_LABEL, GRID_SIZE};

/// Characters of cell text per table row
pub const CELL_WIDTH: usize = 14;
/// Text rows per cell (below the header row)
pub const TEXT_ROWS: usize = 2;

/// Cut `text` into at most `rows` chunks of `width` characters, marking
/// truncation with an ellipsis.
pub fn fit_text(text: &str, width: usize, rows: usize) -> Vec<String> {
    let chars: Vec<char> = text.split_whitespace().collect::<Vec<_>>().join(" ").chars().collect();
    let mut out: Vec<String> = chars
        .chunks(width.max(1))
        .take(rows)
        .map(|c| c.iter().collect())
        .collect();

    if chars.len() > width * rows {
        if let Some(last) = out.last_mut() {
            last.pop();
            last.push('…');
        }
    }
    out.resize(rows, String::new());
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn cell_header(cell: &CellSnapshot, kind: StatusKind) -> String {
    if cell.free {
        return String::new();
    }
    let label = CellIndex::new(cell.index)
        .map(|c| c.to_string())
        .unwrap_or_default();
    let marker = match (cell.highlighted, kind, cell.marked) {
        (true, StatusKind::Bingo, _) => "[*]",
        (true, StatusKind::Reach, _) => "[+]",
        (_, _, true) => "[x]",
        _ => "[ ]",
    };
    format!("{} {}", label, marker)
}

fn cell_rows(cell: &CellSnapshot, kind: StatusKind) -> Vec<String> {
    let mut rows = vec![cell_header(cell, kind)];
    if cell.free {
        rows.extend(fit_text(FREE_LABEL, CELL_WIDTH, TEXT_ROWS));
    } else {
        rows.extend(fit_text(&cell.text, CELL_WIDTH, TEXT_ROWS));
    }
    rows
}

/// Render the card as a bordered table, one block of rows per grid row
pub fn render_table(snapshot: &CardSnapshot) -> String {
    let kind = snapshot.status.kind;
    let separator = format!(
        "+{}\n",
        format!("{}+", "-".repeat(CELL_WIDTH + 2)).repeat(GRID_SIZE)
    );

    let mut out = String::new();
    let mode_line = match snapshot.status.banner() {
        Some(banner) => format!("[{}] {}", snapshot.mode.label(), banner),
        None => format!("[{}]", snapshot.mode.label()),
    };
    let _ = writeln!(out, "{}", mode_line);
    out.push_str(&separator);

    for row in snapshot.cells.chunks(GRID_SIZE) {
        let blocks: Vec<Vec<String>> = row.iter().map(|c| cell_rows(c, kind)).collect();
        for line in 0..=TEXT_ROWS {
            out.push('|');
            for block in &blocks {
                let _ = write!(out, " {} |", pad(&block[line], CELL_WIDTH));
            }
            out.push('\n');
        }
        out.push_str(&separator);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Mode};

    #[test]
    fn test_fit_text_truncates_with_ellipsis() {
        let rows = fit_text(&"a".repeat(40), 10, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "a".repeat(10));
        assert_eq!(rows[1], format!("{}…", "a".repeat(9)));
    }

    #[test]
    fn test_fit_text_pads_rows() {
        assert_eq!(fit_text("hi", 10, 2), vec!["hi".to_string(), String::new()]);
        assert_eq!(fit_text("", 10, 2), vec![String::new(), String::new()]);
    }

    #[test]
    fn test_table_shape_and_markers() {
        let mut card = Card::default();
        card.set_cell_text(CellIndex::new(0).unwrap(), "Coffee spill");
        for i in [0, 1, 2, 3, 4] {
            card.toggle_mark(CellIndex::new(i).unwrap());
        }
        let table = render_table(&CardSnapshot::capture(&card, Mode::Play));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "[play] BINGO!");
        // mode line + 6 separators + 5 rows * 3 lines
        assert_eq!(lines.len(), 1 + 6 + 15);
        assert!(table.contains("A1 [*]"));
        assert!(table.contains("Coffee spill"));
        assert!(table.contains("FREE"));
        assert!(table.contains("A2 [ ]"));
    }

    #[test]
    fn test_create_mode_shows_no_marks() {
        let mut card = Card::default();
        card.toggle_mark(CellIndex::new(0).unwrap());
        let table = render_table(&CardSnapshot::capture(&card, Mode::Create));
        assert!(table.starts_with("[create]\n"));
        assert!(!table.contains("[x]"));
    }
}
