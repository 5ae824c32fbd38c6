use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    engine::GameState,
    scores::{ScoreBoard, ScoreEntry},
    store::KeyValueStore,
};

use super::types::{LogBuffer, Screen};

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: GameState,
    pub(in crate::ui) board: ScoreBoard<Box<dyn KeyValueStore>>,
    pub(in crate::ui) rng: StdRng,
    pub(in crate::ui) input: String,
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) leaderboard: Vec<ScoreEntry>,
    pub(in crate::ui) saved_as: Option<String>,
    pub(in crate::ui) games_played: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(
        board: ScoreBoard<Box<dyn KeyValueStore>>,
        mut rng: StdRng,
        logs: LogBuffer,
    ) -> Self {
        let game = GameState::new(&mut rng);

        Self {
            game,
            board,
            rng,
            input: String::new(),
            screen: Screen::Game,
            leaderboard: Vec::new(),
            saved_as: None,
            games_played: 1,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("Nouvelle partie");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
