//! Game flow: new games, guesses and end-of-game transitions.

use crate::engine::GameState;

use super::super::{app::App, types::Screen};

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_new_game(&mut self) {
        self.app.game = GameState::new(&mut self.app.rng);
        self.app.games_played += 1;
        self.app.screen = Screen::Game;
        self.app.saved_as = None;
        self.app.input.clear();
        self.app.log("Nouvelle partie");
    }

    pub fn submit_guess(&mut self) {
        if self.app.game.is_over() {
            self.start_new_game();
            return;
        }

        let raw = self.app.input.trim().to_string();
        if raw.is_empty() {
            return;
        }

        let before = self.app.game.attempts_left();
        self.app.game = self.app.game.guess(&raw);
        self.app.input.clear();

        if self.app.game.attempts_left() == before {
            self.app.log(format!("Entrée rejetée : {raw:?}"));
            return;
        }

        self.app.log(format!(
            "Essai {} : {} ({} restantes)",
            self.app.game.guesses().len(),
            raw,
            self.app.game.attempts_left()
        ));

        if self.app.game.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let score = self.app.game.score();
        let target = self.app.game.target().unwrap_or_default();

        if self.app.game.is_won() {
            self.app.log(format!("Gagné ! Nombre {target}, score {score}"));
        } else {
            self.app.log(format!("Perdu. Le nombre était {target}"));
        }

        // Zero scores are never recorded, so only prompt when there is something to save.
        if score > 0 {
            self.app.screen = Screen::SaveScore;
        }
    }
}
