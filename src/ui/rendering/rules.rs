use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{rules::RULES, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_rules(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        f.render_widget(
            Paragraph::new(RULES.render_text())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Règles | Esc = retour")),
            area,
        );
    }
}
