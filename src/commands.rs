//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::export::ExportJob;

/// Side effect requested by an update
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// State changed; refresh whatever the front end displays
    Redraw,
    /// Print the card as a text table
    PrintTable,
    /// Print the card as JSON
    PrintJson,
    /// Print the command reference
    PrintHelp,
    /// Rasterize and write a PNG on a worker thread.
    /// Sends `Msg::App(AppMsg::ExportCompleted)` when done.
    Export(Box<ExportJob>),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Flatten to the list of leaf commands in execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }

    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_quit),
            _ => false,
        }
    }
}
