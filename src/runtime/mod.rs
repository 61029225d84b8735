//! Runtime module - drives the update loop for the terminal front end
//!
//! - `app` - line-oriented event loop, command processing and export workers

pub mod app;

pub use app::App;
