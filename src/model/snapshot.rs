//! Owned, serializable copy of a card for renderers and the export worker

use serde::Serialize;

use super::card::{Card, FREE_LABEL};
use super::cell::FREE_INDEX;
use super::status::BingoStatus;
use super::Mode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub index: usize,
    pub text: String,
    pub marked: bool,
    pub free: bool,
    pub highlighted: bool,
    pub font_size_px: f32,
}

impl CellSnapshot {
    /// Text to draw; the FREE cell shows its label instead of its (empty) text
    pub fn display_text(&self) -> &str {
        if self.free {
            FREE_LABEL
        } else {
            &self.text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSnapshot {
    pub mode: Mode,
    pub cells: Vec<CellSnapshot>,
    pub status: BingoStatus,
}

impl CardSnapshot {
    /// Capture a card as it should appear in the given mode.
    ///
    /// Create mode shows texts only, so marks and highlights are dropped.
    pub fn capture(card: &Card, mode: Mode) -> Self {
        let play = mode == Mode::Play;
        let cells = card
            .cells()
            .map(|c| CellSnapshot {
                index: c.index,
                text: c.text.to_string(),
                marked: play && c.marked,
                free: c.index == FREE_INDEX,
                highlighted: play && c.highlighted,
                font_size_px: c.font_size.px(),
            })
            .collect();
        let status = if play {
            card.status().clone()
        } else {
            BingoStatus::default()
        };

        Self {
            mode,
            cells,
            status,
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize card: {}", e))
    }
}
