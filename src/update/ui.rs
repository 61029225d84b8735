//! UI update handlers - mode switching and the mode-routed clear

use crate::commands::Cmd;
use crate::messages::{CardMsg, UiMsg};
use crate::model::{AppModel, Mode};

use super::card::update_card;

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SwitchMode(mode) => {
            if model.mode == mode {
                return None;
            }
            model.mode = mode;
            let status = match mode {
                Mode::Create => "Create mode: fill in the cells".to_string(),
                Mode::Play => match model.card.status().banner() {
                    Some(banner) => format!("Play mode: {}", banner),
                    None => "Play mode: mark cells as they are called".to_string(),
                },
            };
            model.ui.set_status(status);
            Some(Cmd::Redraw)
        }

        // Each view clears only its own layer
        UiMsg::Clear => match model.mode {
            Mode::Create => update_card(model, CardMsg::ClearText),
            Mode::Play => update_card(model, CardMsg::ClearMarks),
        },
    }
}
