//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use bingo_card::config::BingoConfig;
use bingo_card::messages::{CardMsg, Msg, UiMsg};
use bingo_card::model::{AppModel, Card, CellIndex, Mode, ReachPolicy, CELL_COUNT};
use bingo_card::theme::Theme;
use bingo_card::update::update;

/// Editable cell at `i`; panics on the FREE index
pub fn cell(i: usize) -> CellIndex {
    CellIndex::new(i).unwrap_or_else(|| panic!("{} is not an editable cell", i))
}

/// Fresh model in create mode with default config and theme
pub fn test_model() -> AppModel {
    AppModel::new(BingoConfig::default(), Theme::default())
}

/// Model with every editable cell filled as "cell N"
pub fn filled_model() -> AppModel {
    let mut model = test_model();
    for i in (0..CELL_COUNT).filter_map(CellIndex::new) {
        update(
            &mut model,
            Msg::Card(CardMsg::SetText {
                cell: i,
                text: format!("cell {}", i.get()),
            }),
        );
    }
    model
}

/// Filled model switched to play mode with `marks` toggled in order
pub fn play_model_with_marks(marks: &[usize]) -> AppModel {
    let mut model = filled_model();
    update(&mut model, Msg::Ui(UiMsg::SwitchMode(Mode::Play)));
    for &m in marks {
        update(&mut model, Msg::Card(CardMsg::ToggleMark(m)));
    }
    model
}

/// Card with `marks` toggled in order
pub fn card_with_marks(marks: &[usize], policy: ReachPolicy) -> Card {
    let mut card = Card::new(policy);
    for &m in marks {
        card.toggle_mark(cell(m));
    }
    card
}

/// Texts of all 25 positions
pub fn texts(card: &Card) -> Vec<String> {
    (0..CELL_COUNT).map(|i| card.text(i).to_string()).collect()
}

/// Sorted highlighted positions
pub fn highlighted(card: &Card) -> Vec<u8> {
    card.status().highlighted.iter().copied().collect()
}
