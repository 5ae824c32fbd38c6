//! Game message and guess history with direction hints.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{engine::Hint, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_guesses(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.game.message().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, (guess, hint)) in self.game.history().enumerate() {
            let (marker, label, color) = match hint {
                Hint::Higher => ("↑", "plus grand", Color::Yellow),
                Hint::Lower => ("↓", "plus petit", Color::Cyan),
                Hint::Correct => ("✓", "trouvé", Color::Green),
            };

            lines.push(Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::styled(
                    format!(" {guess:>3} "),
                    Style::default().bg(color).fg(Color::Black),
                ),
                Span::styled(format!(" {marker} {label}"), Style::default().fg(color)),
            ]));
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Estimations")),
            area,
        );
    }
}
