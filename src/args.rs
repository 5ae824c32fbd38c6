use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devinele", version, about = "Guess the number between 1 and 100")]
pub struct Args {
    /// Directory holding the score store and log file
    #[arg(long, env = "DEVINELE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Score store backend
    #[arg(long, value_enum, env = "DEVINELE_STORE", default_value_t = StoreBackend::Sqlite)]
    pub store: StoreBackend,

    /// Seed for the target generator, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full-screen terminal game (default)
    Play,
    /// Line-by-line console game on stdin/stdout
    Console,
    /// Print the leaderboard
    Scores,
    /// Export rules or scores as JSON
    Export {
        #[arg(value_enum)]
        what: ExportKind,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace the leaderboard with a JSON score list
    Import {
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    File,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Rules,
    Scores,
}
