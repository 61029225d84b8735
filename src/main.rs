use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use bingo_card::cli::CliArgs;
use bingo_card::model::AppModel;
use bingo_card::runtime::App;
use bingo_card::theme::{list_available_themes, resolve_theme, Theme};

fn main() -> Result<()> {
    bingo_card::tracing::init();

    let args = CliArgs::parse();

    if args.list_themes {
        for info in list_available_themes() {
            println!("{:<12} {} ({:?})", info.id, info.name, info.source);
        }
        return Ok(());
    }

    let base = args.load_config();
    let startup = args.into_config(base);

    let theme = resolve_theme(&startup.config.theme).unwrap_or_else(|e| {
        tracing::warn!("Theme '{}' unavailable: {}", startup.config.theme, e);
        Theme::default()
    });

    let model = AppModel::new(startup.config, theme);
    let stdout = io::stdout().lock();

    match startup.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("opening script {}", path.display()))?;
            let mut app = App::new(model, stdout).with_json(startup.json);
            app.run(BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut app = App::new(model, stdout)
                .with_json(startup.json)
                .interactive(interactive);
            app.run(stdin.lock())?;
        }
    }

    Ok(())
}
