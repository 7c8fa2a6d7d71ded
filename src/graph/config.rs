//! src/graph/config.rs
//!
//! Render configuration: canvas size, shape sizes, timing and colours.
//!
//! Built once at startup and handed to the render loop by reference.

use std::time::Duration;

use ratatui::style::Color;

use super::data::{DeviceType, Edge, Format, Vertex};

/// Colour table for both input formats.
#[derive(Clone, Debug)]
pub struct Palette {
    pub background: Color,
    pub router: Color,
    pub switch: Color,
    pub host: Color,
    pub server: Color,
    pub default_vertex: Color,
    /// inactive vertices, inactive edges and inactive borders
    pub down: Color,
    pub edge_active: Color,
    pub border: Color,
    pub text: Color,
    /// weighted files draw every vertex/edge/weight with these
    pub weighted_vertex: Color,
    pub weighted_edge: Color,
    pub weighted_label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(10, 10, 10),
            router: Color::Rgb(0, 102, 204),
            switch: Color::Rgb(0, 180, 0),
            host: Color::Rgb(230, 200, 0),
            server: Color::Rgb(0, 180, 180),
            default_vertex: Color::Rgb(220, 220, 220),
            down: Color::Rgb(220, 30, 30),
            edge_active: Color::Rgb(240, 240, 240),
            border: Color::Rgb(60, 60, 60),
            text: Color::Rgb(240, 240, 240),
            weighted_vertex: Color::Rgb(0, 102, 204),
            weighted_edge: Color::Rgb(200, 200, 200),
            weighted_label: Color::Rgb(230, 200, 0),
        }
    }
}

impl Palette {
    pub fn device(&self, device: DeviceType) -> Color {
        match device {
            DeviceType::Router => self.router,
            DeviceType::Switch => self.switch,
            DeviceType::Host => self.host,
            DeviceType::Server => self.server,
            DeviceType::Other(_) => self.default_vertex,
        }
    }

    /// Fill colour: by device type, red when down.
    pub fn vertex_fill(&self, format: Format, vertex: &Vertex) -> Color {
        match format {
            Format::Weighted => self.weighted_vertex,
            Format::Topology if !vertex.active => self.down,
            Format::Topology => self.device(vertex.device),
        }
    }

    pub fn vertex_border(&self, format: Format, vertex: &Vertex) -> Color {
        match format {
            Format::Topology if !vertex.active => self.down,
            _ => self.border,
        }
    }

    pub fn edge_color(&self, format: Format, edge: &Edge) -> Color {
        match format {
            Format::Weighted => self.weighted_edge,
            Format::Topology if edge.active() => self.edge_active,
            Format::Topology => self.down,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Virtual canvas size the layout works in; the terminal area is scaled to it.
    pub width: f64,
    pub height: f64,

    pub vertex_radius: f64,
    pub arrow_len: f64,

    /// Reload at least this often even if the file did not change.
    pub refresh_interval: Duration,

    pub fps: u32,

    pub palette: Palette,
}

impl RenderConfig {
    /// Target duration of one loop iteration.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            vertex_radius: 36.0,
            arrow_len: 16.0,
            refresh_interval: Duration::from_secs(1),
            fps: 30,
            palette: Palette::default(),
        }
    }
}
