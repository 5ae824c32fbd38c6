use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let game = &self.game;

        let status_text = if game.is_won() {
            format!(
                "🎉 Gagné ! Le nombre était {} | Score : {}",
                game.target().unwrap_or_default(),
                game.score()
            )
        } else if game.is_over() {
            format!(
                "💀 Perdu ! Le nombre était {}",
                game.target().unwrap_or_default()
            )
        } else {
            format!(
                "Tentatives restantes : {} | Partie n°{}",
                game.attempts_left(),
                self.games_played
            )
        };

        let color = if game.is_won() {
            Color::Green
        } else if game.is_over() {
            Color::Red
        } else {
            Color::White
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("DevineLe Challenge")),
            area,
        );
    }
}
