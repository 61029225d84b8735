//! Bingo card - Elm-style bingo card editor and player
//!
//! This crate provides the card store, line evaluation, and the
//! model/message/update layer shared by the `bingo` terminal front end and
//! the `render_card` headless renderer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::BingoConfig;
pub use messages::Msg;
pub use model::{AppModel, Card, CardSnapshot};
pub use theme::Theme;
