//! Input handling and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    engine::{MAX_NUMBER, MIN_NUMBER},
    scores::{MAX_USERNAME_CHARS, normalize_username},
};

use super::super::{
    app::App,
    types::{InputStatus, Screen},
};
use super::{GameHandler, ScoreHandler};

/// Longest guess worth typing: "100".
const MAX_GUESS_CHARS: usize = 3;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q' | 'Q') => {
                    self.app.log("Sortie demandée");
                    return true;
                }
                KeyCode::Char('n' | 'N') => GameHandler::new(self.app).start_new_game(),
                // The save prompt must be answered or skipped first.
                KeyCode::Char('l' | 'L') if self.app.screen != Screen::SaveScore => {
                    ScoreHandler::new(self.app).show_leaderboard()
                }
                KeyCode::Char('r' | 'R') if self.app.screen != Screen::SaveScore => {
                    self.app.screen = Screen::Rules;
                }
                _ => {}
            }
            return false;
        }

        match self.app.screen {
            Screen::Game => self.handle_game_key(key.code),
            Screen::SaveScore => self.handle_save_key(key.code),
            Screen::Leaderboard | Screen::Rules => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.app.screen = Screen::Game;
                }
            }
        }
        false
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => GameHandler::new(self.app).submit_guess(),
            KeyCode::Backspace => {
                self.app.input.pop();
            }
            KeyCode::Esc => self.app.input.clear(),
            KeyCode::Char(c) if self.app.input.chars().count() < MAX_GUESS_CHARS => {
                self.app.input.push(c)
            }
            _ => {}
        }
    }

    fn handle_save_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => ScoreHandler::new(self.app).submit_username(),
            KeyCode::Esc => ScoreHandler::new(self.app).skip(),
            KeyCode::Backspace => {
                self.app.input.pop();
            }
            KeyCode::Char(c) if self.app.input.chars().count() < MAX_USERNAME_CHARS => {
                self.app.input.push(c)
            }
            _ => {}
        }
    }
}

impl App {
    pub(in crate::ui) fn input_status(&self) -> InputStatus {
        match self.screen {
            Screen::SaveScore => {
                if self.input.trim().is_empty() {
                    return InputStatus::Incomplete;
                }
                match normalize_username(&self.input) {
                    Ok(_) => InputStatus::Valid,
                    Err(reason) => InputStatus::Invalid(reason),
                }
            }
            Screen::Game => {
                let guess = self.input.trim();
                if guess.is_empty() {
                    return InputStatus::Incomplete;
                }
                match guess.parse::<i64>() {
                    Err(_) => InputStatus::Invalid("pas un nombre"),
                    Ok(n) if n < i64::from(MIN_NUMBER) || n > i64::from(MAX_NUMBER) => {
                        InputStatus::Invalid("entre 1 et 100")
                    }
                    Ok(_) => InputStatus::Valid,
                }
            }
            Screen::Leaderboard | Screen::Rules => InputStatus::Incomplete,
        }
    }
}
