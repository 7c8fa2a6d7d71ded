//! src/panels/history.rs
//!
//! Warnings panel: the parse warnings of the file currently on screen, newest
//! lines last, trimmed to what fits.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::parse::ParseWarning;

pub struct WarningsPanel<'a> {
    pub warnings: &'a [ParseWarning],
}

impl<'a> WarningsPanel<'a> {
    pub fn new(warnings: &'a [ParseWarning]) -> Self {
        Self { warnings }
    }
}

impl crate::ui::Panel for WarningsPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // two rows go to the border
        let height = area.height.saturating_sub(2) as usize;
        let start = self.warnings.len().saturating_sub(height);

        let lines: Vec<Line> = if self.warnings.is_empty() {
            vec![Line::from(Span::styled(
                "clean",
                Style::default().fg(Color::Green),
            ))]
        } else {
            self.warnings[start..]
                .iter()
                .map(|w| {
                    let text = w.to_string();
                    let (head, rest) = text.split_once(": ").unwrap_or(("", text.as_str()));
                    Line::from(vec![
                        Span::styled(format!("{:>9} ", head), Style::default().fg(Color::Yellow)),
                        Span::styled(rest.to_string(), Style::default().fg(Color::Cyan)),
                    ])
                })
                .collect()
        };

        let title = format!("Warnings ({})", self.warnings.len());
        let block = Block::default().title(title).borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
