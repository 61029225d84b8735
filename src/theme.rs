//! Card color themes
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/bingo-card/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::{Path, PathBuf};

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const CLASSIC_YAML: &str = include_str!("../themes/classic.yaml");
pub const MIDNIGHT_YAML: &str = include_str!("../themes/midnight.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "classic")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "classic",
        yaml: CLASSIC_YAML,
    },
    BuiltinTheme {
        id: "midnight",
        yaml: MIDNIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/bingo-card/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    pub name: String,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

fn user_theme_path(id: &str) -> Option<PathBuf> {
    crate::config_paths::themes_dir().map(|dir| dir.join(format!("{}.yaml", id)))
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_path) = user_theme_path(id) {
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Resolve a theme argument that may be a file path or a theme id
pub fn resolve_theme(arg: &str) -> Result<Theme, String> {
    let path = Path::new(arg);
    if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
        return from_file(path);
    }
    load_theme(arg)
}

/// List all available themes, user themes shadowing builtins with the same id
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    if seen_ids.insert(id.to_string()) {
                        let name = from_file(&path)
                            .map(|t| t.name)
                            .unwrap_or_else(|_| id.to_string());
                        themes.push(ThemeInfo {
                            id: id.to_string(),
                            name,
                            source: ThemeSource::User,
                        });
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 (0xAARRGGBB) as used by the frame buffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub card: CardThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardThemeData {
    pub cell: CellThemeData,
    pub free: FreeThemeData,
    pub marked: StateThemeData,
    pub bingo: StateThemeData,
    pub reach: StateThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CellThemeData {
    pub background: String,
    pub border: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FreeThemeData {
    pub background: String,
    pub text: String,
}

/// Colors for a marked / bingo / reach cell. Banner colors only apply to
/// bingo and reach and fall back to the cell colors when missing.
#[derive(Debug, Clone, Deserialize)]
pub struct StateThemeData {
    pub background: String,
    pub border: String,
    #[serde(default)]
    pub banner_background: Option<String>,
    #[serde(default)]
    pub banner_text: Option<String>,
}

/// Resolved colors for a cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColors {
    pub background: Color,
    pub border: Color,
    pub banner_background: Color,
    pub banner_text: Color,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub cell_background: Color,
    pub cell_border: Color,
    pub cell_text: Color,
    pub free_background: Color,
    pub free_text: Color,
    pub marked: StateColors,
    pub bingo: StateColors,
    pub reach: StateColors,
}

fn optional_color(value: &Option<String>, fallback: Color) -> Result<Color, String> {
    Ok(value
        .as_deref()
        .map(Color::from_hex)
        .transpose()?
        .unwrap_or(fallback))
}

impl StateColors {
    fn from_data(data: &StateThemeData, text_fallback: Color) -> Result<Self, String> {
        let background = Color::from_hex(&data.background)?;
        Ok(Self {
            background,
            border: Color::from_hex(&data.border)?,
            banner_background: optional_color(&data.banner_background, background)?,
            banner_text: optional_color(&data.banner_text, text_fallback)?,
        })
    }
}

impl Theme {
    /// Parse a theme from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let card = &data.card;
        let cell_text = Color::from_hex(&card.cell.text)?;

        Ok(Theme {
            name: data.name,
            cell_background: Color::from_hex(&card.cell.background)?,
            cell_border: Color::from_hex(&card.cell.border)?,
            cell_text,
            free_background: Color::from_hex(&card.free.background)?,
            free_text: Color::from_hex(&card.free.text)?,
            marked: StateColors::from_data(&card.marked, cell_text)?,
            bingo: StateColors::from_data(&card.bingo, cell_text)?,
            reach: StateColors::from_data(&card.reach, cell_text)?,
        })
    }

    /// Classic white card (YAML-backed with Rust fallback)
    pub fn classic() -> Self {
        match Theme::from_yaml(CLASSIC_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                let state = |bg: Color, border: Color, text: Color| StateColors {
                    background: bg,
                    border,
                    banner_background: bg,
                    banner_text: text,
                };
                Theme {
                    name: "Classic".to_string(),
                    cell_background: Color::rgb(0xFF, 0xFF, 0xFF),
                    cell_border: Color::rgb(0xD1, 0xD5, 0xDB),
                    cell_text: Color::rgb(0x1F, 0x29, 0x37),
                    free_background: Color::rgb(0xF3, 0xF4, 0xF6),
                    free_text: Color::rgb(0x9C, 0xA3, 0xAF),
                    marked: state(
                        Color::rgb(0xBB, 0xF7, 0xD0),
                        Color::rgb(0x22, 0xC5, 0x5E),
                        Color::rgb(0x1F, 0x29, 0x37),
                    ),
                    bingo: state(
                        Color::rgb(0xFE, 0xF0, 0x8A),
                        Color::rgb(0xEA, 0xB3, 0x08),
                        Color::rgb(0x85, 0x4D, 0x0E),
                    ),
                    reach: state(
                        Color::rgb(0xBF, 0xDB, 0xFE),
                        Color::rgb(0x3B, 0x82, 0xF6),
                        Color::rgb(0x1E, 0x40, 0xAF),
                    ),
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_parse() {
        for builtin in BUILTIN_THEMES {
            assert!(
                Theme::from_yaml(builtin.yaml).is_ok(),
                "builtin theme {} failed to parse",
                builtin.id
            );
        }
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex("00000080").unwrap().a, 0x80);
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_reach_banner_falls_back_to_cell_colors() {
        let theme = Theme::from_builtin("midnight").unwrap();
        assert_eq!(theme.reach.banner_background, theme.reach.background);
        assert_eq!(theme.reach.banner_text, theme.cell_text);
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(Theme::from_builtin("neon").is_err());
    }
}
