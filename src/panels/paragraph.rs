//! src/panels/paragraph.rs
//!
//! Text panel used for the title bar and the key hints footer.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
    pub style: Style,
    pub alignment: Alignment,
}

impl ParagraphPanel {
    pub fn new(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
            style: Style::default(),
            alignment: Alignment::Left,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }
}

impl crate::ui::Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.text.as_str())
            .style(self.style)
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(self.title.as_str()).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
