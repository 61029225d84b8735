//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::{CellIndex, Mode};

/// Card messages (cell edits and marks)
#[derive(Debug, Clone, PartialEq)]
pub enum CardMsg {
    /// Replace the text of a cell (create mode)
    SetText { cell: CellIndex, text: String },
    /// Empty a single cell (create mode)
    ClearCell(CellIndex),
    /// Click on a grid position (play mode). Carries the raw position so
    /// clicks on the FREE cell reach the card and are ignored there.
    ToggleMark(usize),
    /// Wipe every cell text
    ClearText,
    /// Wipe every mark
    ClearMarks,
}

/// UI messages (mode switching, clearing)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Switch between the create and play views
    SwitchMode(Mode),
    /// The clear button: wipes text in create mode, marks in play mode
    Clear,
}

/// Application messages (export, printing, lifecycle)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Export the current view as PNG; `None` uses the configured location
    Export { path: Option<PathBuf> },
    /// Export finished (async result)
    ExportCompleted(Result<PathBuf, String>),
    /// Print the card, as a table or as JSON
    Show { json: bool },
    /// Print the command reference
    Help,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Card(CardMsg),
    Ui(UiMsg),
    App(AppMsg),
}
