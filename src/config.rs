//! Runtime configuration resolved from the command line and environment.

use anyhow::{Context, Result};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

use crate::{
    args::{Args, StoreBackend},
    store::{FileStore, KeyValueStore, SqliteStore},
};

const APP_DIR: &str = "devinele";
const DB_FILE: &str = "devinele.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub backend: StoreBackend,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let data_dir = match &args.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        Ok(Self {
            data_dir,
            backend: args.store,
            seed: args.seed,
        })
    }

    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        let store: Box<dyn KeyValueStore> = match self.backend {
            StoreBackend::Sqlite => Box::new(SqliteStore::open(&self.data_dir.join(DB_FILE))?),
            StoreBackend::File => Box::new(FileStore::new(&self.data_dir)),
        };
        Ok(store)
    }

    /// Target generator: seeded when requested, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Get the platform-specific data directory for the game
fn default_data_dir() -> Result<PathBuf> {
    let mut path =
        dirs::data_dir().context("Unable to determine data directory for your platform")?;
    path.push(APP_DIR);
    Ok(path)
}
