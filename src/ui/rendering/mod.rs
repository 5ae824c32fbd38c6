mod guesses;
mod input_field;
mod leaderboard;
mod logs;
mod rules;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // status
                Constraint::Min(8),    // main panels
                Constraint::Length(3), // input
            ])
            .split(f.area());

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[1]);

        self.draw_status(f, layout[0]);

        match self.screen {
            Screen::Game | Screen::SaveScore => self.draw_guesses(f, main[0]),
            Screen::Leaderboard => self.draw_leaderboard(f, main[0]),
            Screen::Rules => self.draw_rules(f, main[0]),
        }

        self.draw_logs(f, main[1]);
        self.draw_input(f, layout[2]);
    }
}
