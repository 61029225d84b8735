//! Card image generator
//!
//! Renders PNG images from YAML card scenario definitions.
//!
//! Usage:
//!   cargo run --bin render_card -- --scenario samples/office.yaml
//!   cargo run --bin render_card -- --all
//!   cargo run --bin render_card -- --all --out-dir target/cards --theme midnight

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use bingo_card::export::{export_png, ExportJob};
use bingo_card::messages::{CardMsg, Msg, UiMsg};
use bingo_card::model::{AppModel, CellIndex, Mode, CELL_COUNT, FREE_INDEX};
use bingo_card::theme::{resolve_theme, Theme};
use bingo_card::update::update;
use bingo_card::BingoConfig;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "render_card", about = "Render bingo card scenarios to PNG")]
struct Args {
    /// Path to a single scenario YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Render all scenarios in the scenarios directory
    #[arg(long)]
    all: bool,
    /// Directory containing scenario YAML files
    #[arg(long, default_value = "samples")]
    scenarios_dir: PathBuf,
    /// Directory for output PNG files
    #[arg(long, default_value = "target/cards")]
    out_dir: PathBuf,
    /// Override theme (file path or builtin id)
    #[arg(long)]
    theme: Option<String>,
    /// Override export scale
    #[arg(long)]
    scale: Option<f32>,
    /// Font file used for cell text
    #[arg(long)]
    font: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Scenario YAML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct Scenario {
    name: String,
    #[serde(default)]
    mode: ScenarioMode,
    /// Cell texts in row-major order; the FREE position must be empty
    #[serde(default)]
    cells: Vec<String>,
    /// Positions to mark; repeats are marked once and FREE is rejected
    #[serde(default)]
    marked: Vec<usize>,
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ScenarioMode {
    Create,
    #[default]
    Play,
}

impl From<ScenarioMode> for Mode {
    fn from(mode: ScenarioMode) -> Self {
        match mode {
            ScenarioMode::Create => Mode::Create,
            ScenarioMode::Play => Mode::Play,
        }
    }
}

// ---------------------------------------------------------------------------
// Theme loading
// ---------------------------------------------------------------------------

fn load_theme_for_scenario(theme_override: Option<&str>, scenario_theme: Option<&str>) -> Theme {
    match theme_override.or(scenario_theme) {
        Some(t) => resolve_theme(t).unwrap_or_else(|e| {
            eprintln!("Warning: failed to load theme '{}': {}, using default", t, e);
            Theme::default()
        }),
        None => Theme::default(),
    }
}

// ---------------------------------------------------------------------------
// Model creation
// ---------------------------------------------------------------------------

fn create_model_from_scenario(
    scenario: &Scenario,
    config: BingoConfig,
    theme: Theme,
) -> Result<AppModel> {
    if scenario.cells.len() > CELL_COUNT {
        anyhow::bail!(
            "scenario '{}' has {} cells, at most {} allowed",
            scenario.name,
            scenario.cells.len(),
            CELL_COUNT
        );
    }

    let mut model = AppModel::new(config, theme);

    for (position, text) in scenario.cells.iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        let cell = CellIndex::new(position).with_context(|| {
            format!(
                "scenario '{}': position {} is the FREE cell and cannot hold text",
                scenario.name, FREE_INDEX
            )
        })?;
        update(
            &mut model,
            Msg::Card(CardMsg::SetText {
                cell,
                text: text.clone(),
            }),
        );
    }

    update(&mut model, Msg::Ui(UiMsg::SwitchMode(Mode::Play)));
    for cell in marked_cells(scenario)? {
        update(&mut model, Msg::Card(CardMsg::ToggleMark(cell.get())));
    }
    update(&mut model, Msg::Ui(UiMsg::SwitchMode(scenario.mode.into())));

    Ok(model)
}

/// Validated, de-duplicated mark positions in first-seen order
fn marked_cells(scenario: &Scenario) -> Result<Vec<CellIndex>> {
    let mut cells: Vec<CellIndex> = Vec::with_capacity(scenario.marked.len());
    for &position in &scenario.marked {
        if position == FREE_INDEX {
            anyhow::bail!(
                "scenario '{}': position {} is the FREE cell and is always marked",
                scenario.name,
                FREE_INDEX
            );
        }
        let cell = CellIndex::new(position).with_context(|| {
            format!(
                "scenario '{}': marked position {} is out of range",
                scenario.name, position
            )
        })?;
        if !cells.contains(&cell) {
            cells.push(cell);
        }
    }
    Ok(cells)
}

/// Scenario name reduced to characters safe in a file name
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.trim_matches('_').is_empty() {
        "card".to_string()
    } else {
        stem
    }
}

// ---------------------------------------------------------------------------
// Scenario loading
// ---------------------------------------------------------------------------

fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let scenario: Scenario = serde_yaml::from_str(&content)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(scenario)
}

fn collect_scenarios(args: &Args) -> Result<Vec<(PathBuf, Scenario)>> {
    let mut scenarios = Vec::new();

    if let Some(ref path) = args.scenario {
        let scenario = load_scenario(path)?;
        scenarios.push((path.clone(), scenario));
    } else if args.all {
        if !args.scenarios_dir.exists() {
            anyhow::bail!(
                "scenarios directory does not exist: {}",
                args.scenarios_dir.display()
            );
        }
        let mut entries: Vec<_> = std::fs::read_dir(&args.scenarios_dir)
            .with_context(|| format!("reading scenarios dir {}", args.scenarios_dir.display()))?
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .collect();
        entries.sort_by_key(|e| e.path());

        for entry in entries {
            let path = entry.path();
            match load_scenario(&path) {
                Ok(scenario) => scenarios.push((path, scenario)),
                Err(e) => eprintln!("Warning: skipping {}: {:#}", path.display(), e),
            }
        }

        if scenarios.is_empty() {
            anyhow::bail!("no scenario files found in {}", args.scenarios_dir.display());
        }
    } else {
        anyhow::bail!("specify --scenario <file> or --all");
    }

    Ok(scenarios)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    bingo_card::tracing::init();

    let args = Args::parse();
    let scenarios = collect_scenarios(&args)?;

    let mut config = BingoConfig::load();
    if let Some(scale) = args.scale {
        if !scale.is_finite() || scale <= 0.0 {
            anyhow::bail!("--scale must be positive, got {}", scale);
        }
        config.export_scale = scale;
    }
    if let Some(font) = &args.font {
        config.font_path = Some(font.clone());
    }

    eprintln!(
        "Rendering {} scenario(s) → {}",
        scenarios.len(),
        args.out_dir.display()
    );

    for (path, scenario) in scenarios {
        let theme = load_theme_for_scenario(args.theme.as_deref(), scenario.theme.as_deref());

        eprint!("  {} ...", scenario.name);

        let model = create_model_from_scenario(&scenario, config.clone(), theme)
            .with_context(|| format!("building card from {}", path.display()))?;

        let job = ExportJob {
            snapshot: model.snapshot(),
            theme: model.theme.clone(),
            font_path: config.font_path.clone(),
            scale: config.export_scale,
            path: args
                .out_dir
                .join(format!("bingo-card-{}.png", file_stem(&scenario.name))),
        };
        let written = export_png(&job)?;
        let banner = model.card.status().banner();
        eprintln!(
            " saved {} ({})",
            written.display(),
            banner.as_deref().unwrap_or("no lines")
        );
    }

    eprintln!("Done!");
    Ok(())
}
