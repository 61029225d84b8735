//! Command-line input handling for the interactive front end
//!
//! Maps one line of user input to a [`Msg`]. Parsing never touches the
//! model; mode checks happen in the update functions.

use std::path::PathBuf;

use crate::messages::{AppMsg, CardMsg, Msg, UiMsg};
use crate::model::{CellIndex, Mode, CELL_COUNT, FREE_INDEX, GRID_SIZE};

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands:
  create                 switch to create mode (edit cell texts)
  play                   switch to play mode (mark called cells)
  set <cell> <text>      set a cell's text            (create mode)
  unset <cell>           empty a cell                 (create mode)
  mark <cell>            toggle a cell's mark         (play mode, alias: m, toggle)
  clear                  create mode: wipe all texts, play mode: wipe all marks
  show [--json]          print the card
  export [path]          save the card as PNG (default: bingo-card.png)
  help                   show this help
  quit                   exit

Cells are 0-24 (row-major) or A1-E5 (column letter, row number).
C3 / 12 is the FREE cell.";

/// Parse a grid position, FREE included
pub fn parse_position(token: &str) -> Result<usize, String> {
    if let Ok(n) = token.parse::<usize>() {
        return if n < CELL_COUNT {
            Ok(n)
        } else {
            Err(format!("Cell {} is out of range (0-{})", n, CELL_COUNT - 1))
        };
    }

    let mut chars = token.chars();
    let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Invalid cell '{}': use 0-24 or A1-E5", token));
    };
    let col = col.to_ascii_uppercase();
    match (col, row.to_digit(10)) {
        ('A'..='E', Some(r @ 1..=5)) => {
            let col_idx = (col as u8 - b'A') as usize;
            Ok((r as usize - 1) * GRID_SIZE + col_idx)
        }
        _ => Err(format!("Invalid cell '{}': use 0-24 or A1-E5", token)),
    }
}

/// Parse an editable cell; the FREE cell is rejected
pub fn parse_cell(token: &str) -> Result<CellIndex, String> {
    let position = parse_position(token)?;
    CellIndex::new(position).ok_or_else(|| {
        debug_assert_eq!(position, FREE_INDEX);
        "The FREE cell cannot be edited".to_string()
    })
}

/// Split off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim_start()),
        None => (input, ""),
    }
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Msg>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = split_word(line);
    let msg = match command.to_ascii_lowercase().as_str() {
        "create" | "edit" => Msg::Ui(UiMsg::SwitchMode(Mode::Create)),
        "play" => Msg::Ui(UiMsg::SwitchMode(Mode::Play)),

        "set" => {
            let (cell, text) = split_word(rest);
            if cell.is_empty() {
                return Err("Usage: set <cell> <text>".to_string());
            }
            let cell = parse_cell(cell)?;
            if text.is_empty() {
                Msg::Card(CardMsg::ClearCell(cell))
            } else {
                Msg::Card(CardMsg::SetText {
                    cell,
                    text: text.to_string(),
                })
            }
        }

        "unset" => {
            if rest.is_empty() {
                return Err("Usage: unset <cell>".to_string());
            }
            Msg::Card(CardMsg::ClearCell(parse_cell(rest)?))
        }

        "mark" | "m" | "toggle" => {
            if rest.is_empty() {
                return Err("Usage: mark <cell>".to_string());
            }
            Msg::Card(CardMsg::ToggleMark(parse_position(rest)?))
        }

        "clear" => {
            if !rest.is_empty() {
                return Err("Usage: clear".to_string());
            }
            Msg::Ui(UiMsg::Clear)
        }

        "show" | "print" => match rest {
            "" => Msg::App(AppMsg::Show { json: false }),
            "--json" | "json" => Msg::App(AppMsg::Show { json: true }),
            other => return Err(format!("Unknown show option '{}'", other)),
        },

        "export" | "save" => Msg::App(AppMsg::Export {
            path: (!rest.is_empty()).then(|| PathBuf::from(rest)),
        }),

        "help" | "?" => Msg::App(AppMsg::Help),
        "quit" | "exit" | "q" => Msg::App(AppMsg::Quit),

        other => return Err(format!("Unknown command '{}' (type `help`)", other)),
    };

    Ok(Some(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_numeric_and_board() {
        assert_eq!(parse_position("0"), Ok(0));
        assert_eq!(parse_position("24"), Ok(24));
        assert_eq!(parse_position("A1"), Ok(0));
        assert_eq!(parse_position("e5"), Ok(24));
        assert_eq!(parse_position("B3"), Ok(11));
        assert!(parse_position("25").is_err());
        assert!(parse_position("F1").is_err());
        assert!(parse_position("A6").is_err());
        assert!(parse_position("A10").is_err());
    }

    #[test]
    fn test_parse_cell_rejects_free() {
        assert!(parse_cell("C3").is_err());
        assert!(parse_cell("12").is_err());
        assert_eq!(parse_cell("C2").map(CellIndex::get), Ok(7));
    }

    #[test]
    fn test_set_keeps_inner_spacing() {
        let msg = parse_command("set b2  Boss  says synergy ").unwrap().unwrap();
        assert_eq!(
            msg,
            Msg::Card(CardMsg::SetText {
                cell: CellIndex::new(6).unwrap(),
                text: "Boss  says synergy".to_string(),
            })
        );
    }

    #[test]
    fn test_set_without_text_clears() {
        let msg = parse_command("set 3").unwrap().unwrap();
        assert_eq!(msg, Msg::Card(CardMsg::ClearCell(CellIndex::new(3).unwrap())));
    }

    #[test]
    fn test_mark_accepts_free_position() {
        let msg = parse_command("m C3").unwrap().unwrap();
        assert_eq!(msg, Msg::Card(CardMsg::ToggleMark(12)));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# setup"), Ok(None));
    }

    #[test]
    fn test_export_path() {
        assert_eq!(
            parse_command("export out/card.png").unwrap(),
            Some(Msg::App(AppMsg::Export {
                path: Some(PathBuf::from("out/card.png"))
            }))
        );
        assert_eq!(
            parse_command("export").unwrap(),
            Some(Msg::App(AppMsg::Export { path: None }))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_command("dance").unwrap_err().contains("Unknown command"));
        assert!(parse_command("clear everything").is_err());
    }
}
