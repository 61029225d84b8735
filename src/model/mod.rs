//! Application model - the complete state of a bingo session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod card;
pub mod cell;
pub mod lines;
pub mod snapshot;
pub mod status;
pub mod ui;

pub use card::{Card, CellView, FREE_LABEL};
pub use cell::{CellIndex, FontSize, CELL_COUNT, FREE_INDEX, GRID_SIZE};
pub use lines::{line_label, Line, LINES};
pub use snapshot::{CardSnapshot, CellSnapshot};
pub use status::{
    bingo_lines, evaluate, satisfied_count, BingoStatus, Marks, ReachPolicy, StatusKind,
};
pub use ui::{Notice, NoticeLevel, UiState};

use serde::Serialize;

use crate::config::BingoConfig;
use crate::theme::Theme;

/// Which view is active: filling in texts, or marking called cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Create,
    Play,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Play => "play",
        }
    }
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub card: Card,
    pub mode: Mode,
    pub ui: UiState,
    pub theme: Theme,
    pub config: BingoConfig,
}

impl AppModel {
    /// Fresh session: blank card in create mode
    pub fn new(config: BingoConfig, theme: Theme) -> Self {
        let mut ui = UiState::new();
        ui.set_status("New card");
        Self {
            card: Card::new(config.reach),
            mode: Mode::default(),
            ui,
            theme,
            config,
        }
    }

    /// Owned copy of what the active view currently shows
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot::capture(&self.card, self.mode)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(BingoConfig::default(), Theme::default())
    }
}
