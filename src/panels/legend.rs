//! src/panels/legend.rs
//!
//! Colour key for the current format.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::Format;
use crate::graph::config::Palette;
use crate::graph::data::DeviceType;

pub struct LegendPanel<'a> {
    pub format: Format,
    pub palette: &'a Palette,
}

impl<'a> LegendPanel<'a> {
    pub fn new(format: Format, palette: &'a Palette) -> Self {
        Self { format, palette }
    }

    fn entries(&self) -> Vec<(Color, String)> {
        let p = self.palette;
        match self.format {
            Format::Topology => {
                let mut entries: Vec<(Color, String)> = [
                    DeviceType::Router,
                    DeviceType::Switch,
                    DeviceType::Host,
                    DeviceType::Server,
                    DeviceType::default(),
                ]
                .into_iter()
                .map(|d| (p.device(d), format!("{} ({})", d.name(), d.code())))
                .collect();
                entries.push((p.down, "down / link down".to_string()));
                entries.push((p.edge_active, "link up".to_string()));
                entries
            }
            Format::Weighted => vec![
                (p.weighted_vertex, "vertex".to_string()),
                (p.weighted_edge, "edge".to_string()),
                (p.weighted_label, "weight".to_string()),
            ],
        }
    }
}

impl crate::ui::Panel for LegendPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .entries()
            .into_iter()
            .map(|(color, text)| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::raw(text),
                ])
            })
            .collect();
        let block = Block::default().title("Legend").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_lists_every_device() {
        let palette = Palette::default();
        let entries = LegendPanel::new(Format::Topology, &palette).entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], (palette.router, "router (0)".to_string()));
        assert_eq!(entries[4], (palette.default_vertex, "default (4)".to_string()));
    }

    #[test]
    fn weighted_has_three_swatches() {
        let palette = Palette::default();
        assert_eq!(LegendPanel::new(Format::Weighted, &palette).entries().len(), 3);
    }
}
