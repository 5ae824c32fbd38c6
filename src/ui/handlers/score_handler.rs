//! Score prompt and leaderboard screen.

use tracing::warn;

use crate::scores::normalize_username;

use super::super::{app::App, types::Screen};

pub struct ScoreHandler<'a> {
    app: &'a mut App,
}

impl<'a> ScoreHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Saves the finished game's score under the typed name.
    pub fn submit_username(&mut self) {
        let name = match normalize_username(&self.app.input) {
            Ok(name) => name,
            Err(reason) => {
                self.app.log(format!("Nom refusé : {reason}"));
                return;
            }
        };

        let score = self.app.game.score();
        match self.app.board.save(&name, score) {
            Ok(()) => {
                self.app
                    .log(format!("Score enregistré : {name} ({score})"));
                self.app.saved_as = Some(name);
                self.app.input.clear();
                self.show_leaderboard();
            }
            Err(e) => {
                warn!("failed to save score: {e:#}");
                self.app.log(format!("Échec de l'enregistrement : {e}"));
            }
        }
    }

    pub fn skip(&mut self) {
        self.app.log("Score non enregistré");
        self.app.input.clear();
        self.app.screen = Screen::Game;
    }

    pub fn show_leaderboard(&mut self) {
        self.app.leaderboard = self.app.board.list();
        self.app.screen = Screen::Leaderboard;
    }
}
