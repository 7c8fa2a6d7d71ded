//! src/panels/info.rs
//!
//! Status panel: source file, counts, refresh age and the last refresh error.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::graph::{GraphSource, GraphView};

/// Read-only status panel; the border turns red while the display is stale.
pub struct InfoPanel<'a> {
    pub source: &'a GraphSource,
    pub view: &'a GraphView,
    pub now: Instant,
}

impl<'a> InfoPanel<'a> {
    pub fn new(source: &'a GraphSource, view: &'a GraphView, now: Instant) -> Self {
        Self { source, view, now }
    }
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(Color::Yellow)),
        Span::raw(value),
    ])
}

impl crate::ui::Panel for InfoPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self.view;
        let graph = &view.snapshot.graph;
        let age = self.now.saturating_duration_since(view.loaded_at);

        let mut lines = vec![
            field("file", self.source.path().display().to_string()),
            field("format", self.source.format().to_string()),
            field(
                "graph",
                format!(
                    "{} vertices, {} edges ({} dangling)",
                    graph.vertices.len(),
                    graph.edges.len(),
                    view.snapshot.dangling_edges()
                ),
            ),
            field(
                "loaded",
                format!("{:.1}s ago, {} reloads", age.as_secs_f64(), view.reloads),
            ),
            field("warnings", view.warnings.len().to_string()),
        ];

        let mut block = Block::default().title("Status").borders(Borders::ALL);
        if let Some(err) = &view.last_error {
            lines.push(Line::from(Span::styled(
                format!("stale: {}", err),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            block = block.border_style(Style::default().fg(Color::Red));
        }

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            area,
        );
    }
}
