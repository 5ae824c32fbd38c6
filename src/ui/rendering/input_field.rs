//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    types::{InputStatus, Screen},
};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (border_color, subtitle) = match self.input_status() {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let (label, help_text) = match self.screen {
            Screen::SaveScore => (
                format!("Score {} | Nom", self.game.score()),
                "Enter = enregistrer | Esc = ne pas enregistrer",
            ),
            Screen::Game if self.game.is_over() => (
                "Estimation".to_string(),
                "Enter = nouvelle partie | Ctrl+L = classement | Ctrl+Q = quitter",
            ),
            Screen::Game => (
                "Estimation".to_string(),
                "Enter = valider | Ctrl+N = nouvelle | Ctrl+L = classement | Ctrl+R = règles | Ctrl+Q = quitter",
            ),
            Screen::Leaderboard | Screen::Rules => (
                "Affichage".to_string(),
                "Esc = retour | Ctrl+N = nouvelle partie | Ctrl+Q = quitter",
            ),
        };

        let text = format!("{}▌", self.input);

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("{label} {subtitle} | {help_text}")),
            ),
            area,
        );
    }
}
