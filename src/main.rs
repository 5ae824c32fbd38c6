use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::info;

use devinele::{
    args::{Args, Command, ExportKind},
    config::Config,
    console::Console,
    logging,
    rules::RULES,
    scores::{ScoreBoard, render_table},
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let _guard = logging::init(&config.data_dir)?;

    info!(data_dir = %config.data_dir.display(), backend = ?config.backend, "starting");

    let mut board = ScoreBoard::new(config.open_store()?);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => run_ui(board, config.rng()),
        Command::Console => {
            let stdin = io::stdin();
            Console::new(stdin.lock(), io::stdout(), board, config.rng()).run()
        }
        Command::Scores => {
            print!("{}", render_table(&board.list()));
            Ok(())
        }
        Command::Export { what, output } => {
            let json = match what {
                ExportKind::Rules => RULES.to_json()?,
                ExportKind::Scores => board.export_json()?,
            };
            write_output(&json, output.as_deref())
        }
        Command::Import { file } => {
            let json = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let count = board.import_json(&json)?;
            println!("{count} scores importés");
            Ok(())
        }
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "exported");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{content}")?;
            Ok(())
        }
    }
}
