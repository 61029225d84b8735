//! Line-oriented application loop
//!
//! Reads one command per line, runs it through [`update`], and performs the
//! resulting [`Cmd`]. Exports run on worker threads and report back over a
//! channel that is drained before every line.

use std::io::{BufRead, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::export::export_png;
use crate::input::{parse_command, HELP};
use crate::messages::{AppMsg, Msg};
use crate::model::{AppModel, Notice, NoticeLevel};
use crate::update::update;
use crate::view::render_table;

/// Upper bound on waiting for an export worker at shutdown
const EXPORT_TIMEOUT: Duration = Duration::from_secs(60);

/// Whether the loop keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<W: Write> {
    model: AppModel,
    out: W,
    /// Print JSON snapshots instead of tables
    json: bool,
    /// Print the whole card after every state change, not just the status line
    card_on_redraw: bool,
    prompt: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<W: Write> App<W> {
    pub fn new(model: AppModel, out: W) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            out,
            json: false,
            card_on_redraw: false,
            prompt: false,
            msg_tx,
            msg_rx,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Interactive sessions redraw the card and show a prompt
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.card_on_redraw = interactive;
        self.prompt = interactive;
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (AppModel, W) {
        (self.model, self.out)
    }

    /// Run until `quit` or end of input, then wait for pending exports
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        if self.prompt {
            self.print_card()?;
            self.print_prompt()?;
        }

        for line in input.lines() {
            let line = line.context("reading input")?;
            self.process_async_messages()?;
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
            if self.prompt {
                self.print_prompt()?;
            }
        }

        self.wait_for_exports()
    }

    /// Parse and apply one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let flow = match parse_command(line) {
            Ok(Some(msg)) => self.dispatch(msg)?,
            Ok(None) => Flow::Continue,
            Err(e) => {
                self.model.ui.notify(Notice::warning(e));
                Flow::Continue
            }
        };
        self.flush_notices()?;
        Ok(flow)
    }

    /// Apply a message and perform the command it yields
    pub fn dispatch(&mut self, msg: Msg) -> Result<Flow> {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => Ok(Flow::Continue),
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Result<Flow> {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                if self.card_on_redraw {
                    self.print_card()?;
                }
                self.print_status()?;
            }
            Cmd::PrintTable => {
                write!(self.out, "{}", render_table(&self.model.snapshot()))?;
            }
            Cmd::PrintJson => self.print_json()?,
            Cmd::PrintHelp => writeln!(self.out, "{}", HELP)?,
            Cmd::Export(job) => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = run_export(|| export_png(&job));
                    let _ = tx.send(Msg::App(AppMsg::ExportCompleted(result)));
                });
                self.print_status()?;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    if self.process_cmd(cmd)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
            }
            Cmd::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Apply every message that workers have sent so far
    pub fn process_async_messages(&mut self) -> Result<()> {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg)?;
        }
        self.flush_notices()
    }

    /// Block until the running export (if any) reports back
    pub fn wait_for_exports(&mut self) -> Result<()> {
        while self.model.ui.is_exporting {
            let msg = match self.msg_rx.recv_timeout(EXPORT_TIMEOUT) {
                Ok(msg) => msg,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    tracing::warn!("Export worker did not report back");
                    Msg::App(AppMsg::ExportCompleted(Err(
                        "export worker did not finish".to_string()
                    )))
                }
            };
            self.dispatch(msg)?;
        }
        self.flush_notices()
    }

    fn print_card(&mut self) -> Result<()> {
        if self.json {
            self.print_json()
        } else {
            write!(self.out, "{}", render_table(&self.model.snapshot()))?;
            Ok(())
        }
    }

    fn print_json(&mut self) -> Result<()> {
        match self.model.snapshot().to_json() {
            Ok(json) => writeln!(self.out, "{}", json)?,
            Err(e) => self.model.ui.notify(Notice::error(e)),
        }
        Ok(())
    }

    fn print_status(&mut self) -> Result<()> {
        if !self.model.ui.status_message.is_empty() {
            writeln!(self.out, "{}", self.model.ui.status_message)?;
        }
        Ok(())
    }

    fn print_prompt(&mut self) -> Result<()> {
        write!(self.out, "{}> ", self.model.mode.label())?;
        self.out.flush()?;
        Ok(())
    }

    fn flush_notices(&mut self) -> Result<()> {
        for notice in self.model.ui.take_notices() {
            let prefix = match notice.level {
                NoticeLevel::Info => "info",
                NoticeLevel::Warning => "warning",
                NoticeLevel::Error => "error",
            };
            writeln!(self.out, "{}: {}", prefix, notice.text)?;
        }
        Ok(())
    }
}

/// Run export work on the worker thread; a panic becomes an error result
fn run_export(work: impl FnOnce() -> Result<PathBuf>) -> Result<PathBuf, String> {
    match catch_unwind(AssertUnwindSafe(work)) {
        Ok(result) => result.map_err(|e| format!("{:#}", e)),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!("Export worker panicked: {}", reason);
            Err(format!("export worker panicked: {}", reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BingoConfig;
    use crate::model::{Mode, StatusKind};
    use crate::theme::Theme;

    fn app() -> App<Vec<u8>> {
        App::new(AppModel::default(), Vec::new())
    }

    fn output(app: &App<Vec<u8>>) -> String {
        String::from_utf8_lossy(app.output()).into_owned()
    }

    #[test]
    fn test_script_plays_to_bingo() {
        let mut app = app();
        let script = "set A1 Coffee\nplay\nm 0\nm 1\nm 2\nm 3\nm 4\nshow\n";
        app.run(script.as_bytes()).unwrap();

        assert_eq!(app.model().mode, Mode::Play);
        assert_eq!(app.model().card.status().kind, StatusKind::Bingo);
        let out = output(&app);
        assert!(out.contains("[play] BINGO!"));
        assert!(out.contains("Coffee"));
    }

    #[test]
    fn test_parse_errors_become_warnings() {
        let mut app = app();
        assert_eq!(app.handle_line("dance").unwrap(), Flow::Continue);
        assert!(output(&app).contains("warning: Unknown command 'dance'"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut app = app();
        app.run("quit\nset A1 ignored\n".as_bytes()).unwrap();
        assert_eq!(app.model().card.text(0), "");
    }

    #[test]
    fn test_show_json() {
        let mut app = app().with_json(true);
        app.handle_line("set B1 Hello").unwrap();
        app.handle_line("show --json").unwrap();
        let out = output(&app);
        assert!(out.contains("\"text\": \"Hello\""));
        assert!(out.contains("\"mode\": \"create\""));
    }

    #[test]
    fn test_failed_export_is_reported() {
        let config = BingoConfig {
            font_path: Some("/definitely/not/a/font.ttf".into()),
            ..BingoConfig::default()
        };
        let mut app = App::new(AppModel::new(config, Theme::default()), Vec::new());
        app.handle_line("set A1 Keep me").unwrap();
        app.handle_line("export").unwrap();
        app.wait_for_exports().unwrap();

        let (model, out) = app.into_parts();
        assert!(!model.ui.is_exporting);
        assert_eq!(model.card.text(0), "Keep me");
        assert!(String::from_utf8_lossy(&out).contains("error: Failed to save image"));
    }

    #[test]
    fn test_panicking_export_reports_error() {
        let result = run_export(|| panic!("glyph table corrupt"));
        let err = result.unwrap_err();
        assert!(err.contains("glyph table corrupt"));
    }

    #[test]
    fn test_worker_panic_releases_export_flag() {
        let mut model = AppModel::default();
        model.ui.is_exporting = true;
        let mut app = App::new(model, Vec::new());

        let result = run_export(|| panic!("rasterizer failed"));
        app.dispatch(Msg::App(AppMsg::ExportCompleted(result))).unwrap();
        app.flush_notices().unwrap();

        assert!(!app.model().ui.is_exporting);
        let out = output(&app);
        assert!(out.contains("error: "));
        assert!(out.contains("rasterizer failed"));
    }
}
