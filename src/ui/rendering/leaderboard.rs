//! Leaderboard table.

use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_leaderboard(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Classement | Esc = retour");

        if self.leaderboard.is_empty() {
            f.render_widget(
                Paragraph::new("Aucun score enregistré pour le moment.").block(block),
                area,
            );
            return;
        }

        let rows: Vec<Row> = self
            .leaderboard
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let row = Row::new(vec![
                    (i + 1).to_string(),
                    entry.username.clone(),
                    entry.score.to_string(),
                    entry.display_date(),
                ]);
                if self.saved_as.as_deref() == Some(entry.username.as_str()) {
                    row.style(Style::default().fg(Color::Green))
                } else {
                    row
                }
            })
            .collect();

        let header = Row::new(vec!["Rang", "Nom d'utilisateur", "Score", "Date"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Length(18),
                Constraint::Length(6),
                Constraint::Min(11),
            ],
        )
        .header(header)
        .block(block);

        f.render_widget(table, area);
    }
}
