//! Card update handlers - cell edits and marking

use crate::commands::Cmd;
use crate::messages::CardMsg;
use crate::model::{line_label, AppModel, CellIndex, Mode, Notice, StatusKind, FREE_INDEX};

pub fn update_card(model: &mut AppModel, msg: CardMsg) -> Option<Cmd> {
    match msg {
        CardMsg::SetText { cell, text } => {
            if !require_mode(model, Mode::Create, "edit cells") {
                return Some(Cmd::Redraw);
            }
            model.card.set_cell_text(cell, text);
            model.ui.set_status(format!(
                "{} set ({} of 24 filled)",
                cell,
                model.card.filled_count()
            ));
            Some(Cmd::Redraw)
        }

        CardMsg::ClearCell(cell) => {
            if !require_mode(model, Mode::Create, "edit cells") {
                return Some(Cmd::Redraw);
            }
            model.card.set_cell_text(cell, String::new());
            model.ui.set_status(format!("{} cleared", cell));
            Some(Cmd::Redraw)
        }

        CardMsg::ToggleMark(position) => {
            if !require_mode(model, Mode::Play, "mark cells") {
                return Some(Cmd::Redraw);
            }

            let before = model.card.status().clone();
            if !model.card.toggle_cell(position) {
                if position == FREE_INDEX {
                    model.ui.notify(Notice::info("The FREE cell is always marked"));
                } else {
                    model.ui.notify(Notice::warning(format!(
                        "No cell at position {}",
                        position
                    )));
                }
                return Some(Cmd::Redraw);
            }

            // toggle_cell succeeded, so the position is a valid cell
            let label = CellIndex::new(position)
                .map(|c| c.to_string())
                .unwrap_or_else(|| position.to_string());
            let verb = if model.card.is_marked(position) {
                "Marked"
            } else {
                "Unmarked"
            };

            let status = model.card.status();
            match status.banner() {
                Some(banner) => model.ui.set_status(format!("{} {} - {}", verb, label, banner)),
                None => model.ui.set_status(format!("{} {}", verb, label)),
            }

            if status.kind == StatusKind::Bingo && status.bingo_count > before.bingo_count {
                let completed: Vec<String> = status
                    .lines
                    .iter()
                    .filter(|l| !before.lines.contains(l) || before.kind != StatusKind::Bingo)
                    .map(|&l| line_label(l))
                    .collect();
                model
                    .ui
                    .notify(Notice::info(format!("BINGO! {}", completed.join(", "))));
            }

            Some(Cmd::Redraw)
        }

        CardMsg::ClearText => {
            model.card.clear_text();
            model.ui.set_status("Card text cleared");
            Some(Cmd::Redraw)
        }

        CardMsg::ClearMarks => {
            model.card.clear_marks();
            model.ui.set_status("Marks cleared");
            Some(Cmd::Redraw)
        }
    }
}

/// Refuse an action outside its mode, telling the user how to get there
fn require_mode(model: &mut AppModel, mode: Mode, action: &str) -> bool {
    if model.mode == mode {
        return true;
    }
    model.ui.notify(Notice::warning(format!(
        "Switch to {} mode to {} (type `{}`)",
        mode.label(),
        action,
        mode.label()
    )));
    false
}
