//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=bingo_card::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/bingo-card/logs/bingo.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, Mode, StatusKind};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never interleaves with the card
/// printed on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "bingo.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the observable session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub mode: Mode,
    pub kind: StatusKind,
    pub bingo_count: usize,
    pub reach_count: usize,
    pub marked: usize,
    pub filled: usize,
}

impl StatusSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let status = model.card.status();
        Self {
            mode: model.mode,
            kind: status.kind,
            bingo_count: status.bingo_count,
            reach_count: status.reach_count,
            marked: model.card.marks().count(),
            filled: model.card.filled_count(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &StatusSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.kind != other.kind {
            changes.push(format!("status: {:?} → {:?}", self.kind, other.kind));
        }
        if self.bingo_count != other.bingo_count {
            changes.push(format!(
                "bingo {} → {}",
                self.bingo_count, other.bingo_count
            ));
        }
        if self.reach_count != other.reach_count {
            changes.push(format!(
                "reach {} → {}",
                self.reach_count, other.reach_count
            ));
        }
        if self.marked != other.marked {
            changes.push(format!("marked {} → {}", self.marked, other.marked));
        }
        if self.filled != other.filled {
            changes.push(format!("filled {} → {}", self.filled, other.filled));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellIndex;

    #[test]
    fn test_diff_reports_bingo_transition() {
        let mut model = AppModel::default();
        model.mode = Mode::Play;
        for i in [0, 1, 2, 3] {
            model.card.toggle_mark(CellIndex::new(i).unwrap());
        }
        let before = StatusSnapshot::from_model(&model);
        model.card.toggle_mark(CellIndex::new(4).unwrap());
        let after = StatusSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("bingo 0 → 1"), "{}", diff);
        assert!(diff.contains("marked 4 → 5"), "{}", diff);
    }

    #[test]
    fn test_no_diff_when_unchanged() {
        let model = AppModel::default();
        let snap = StatusSnapshot::from_model(&model);
        assert_eq!(snap.diff(&snap.clone()), None);
    }
}
