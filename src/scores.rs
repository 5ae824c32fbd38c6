//! Leaderboard ranking and persistence.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::store::KeyValueStore;

/// Storage key the whole leaderboard lives under.
pub const SCORES_KEY: &str = "game-scores";
pub const MAX_ENTRIES: usize = 10;
pub const MAX_USERNAME_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
    pub date: DateTime<Utc>,
}

impl ScoreEntry {
    /// Day of the entry as `jj/mm/aaaa`.
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Top-10 best scores per username, persisted as one JSON blob.
pub struct ScoreBoard<S> {
    store: S,
}

impl<S: KeyValueStore> ScoreBoard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Records `score` for `username`, keeping only that user's best.
    /// Zero scores are never recorded.
    pub fn save(&mut self, username: &str, score: u32) -> Result<()> {
        self.save_at(username, score, Utc::now())
    }

    pub fn save_at(&mut self, username: &str, score: u32, date: DateTime<Utc>) -> Result<()> {
        if score == 0 {
            debug!(username, "zero score not recorded");
            return Ok(());
        }

        let mut scores = self.load()?;
        let entry = ScoreEntry {
            username: username.to_string(),
            score,
            date,
        };

        match scores.iter_mut().find(|s| s.username == username) {
            Some(existing) if existing.score < score => *existing = entry,
            Some(existing) => {
                debug!(
                    username,
                    score,
                    best = existing.score,
                    "score not above personal best, keeping previous"
                );
            }
            None => scores.push(entry),
        }

        rank(&mut scores);
        self.persist(&scores)?;

        info!(username, score, "score saved");
        Ok(())
    }

    /// Current leaderboard. Absent or unreadable data yields an empty list.
    pub fn list(&self) -> Vec<ScoreEntry> {
        self.load().unwrap_or_else(|e| {
            warn!("failed to load scores, treating as empty: {e:#}");
            Vec::new()
        })
    }

    /// Stored leaderboard. Malformed content reads as empty; backend errors
    /// are returned so a write never replaces data that could not be read.
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        let Some(raw) = self.store.get(SCORES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(scores) => Ok(scores),
            Err(e) => {
                warn!("stored scores are malformed, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.list()).context("Failed to serialize scores")
    }

    /// Replaces the leaderboard with the entries in `json`, normalised to the
    /// best score per user, ranked and capped. Returns the number kept.
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        let imported: Vec<ScoreEntry> =
            serde_json::from_str(json).context("Scores file is not a valid score list")?;

        let mut best: Vec<ScoreEntry> = Vec::with_capacity(imported.len());
        for entry in imported.into_iter().filter(|e| e.score > 0) {
            match best.iter_mut().find(|s| s.username == entry.username) {
                Some(existing) if existing.score < entry.score => *existing = entry,
                Some(_) => {}
                None => best.push(entry),
            }
        }

        rank(&mut best);
        self.persist(&best)?;

        info!(count = best.len(), "scores imported");
        Ok(best.len())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, scores: &[ScoreEntry]) -> Result<()> {
        let json = serde_json::to_string(scores).context("Failed to serialize scores")?;
        self.store.set(SCORES_KEY, &json)
    }
}

fn rank(scores: &mut Vec<ScoreEntry>) {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(MAX_ENTRIES);
}

/// Plain-text ranking table for the console and the `scores` command.
pub fn render_table(scores: &[ScoreEntry]) -> String {
    if scores.is_empty() {
        return "Aucun score enregistré pour le moment.\n".to_string();
    }

    let mut out = format!(
        "{:<5} {:<15} {:>5}  {}\n",
        "Rang", "Nom d'utilisateur", "Score", "Date"
    );
    for (i, entry) in scores.iter().enumerate() {
        out.push_str(&format!(
            "{:<5} {:<15} {:>5}  {}\n",
            i + 1,
            entry.username,
            entry.score,
            entry.display_date()
        ));
    }
    out
}

/// Trims and checks a player name before it reaches the board.
pub fn normalize_username(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("nom vide");
    }
    if name.chars().count() > MAX_USERNAME_CHARS {
        return Err("plus de 15 caractères");
    }
    Ok(name.to_string())
}
