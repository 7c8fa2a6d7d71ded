//! src/panels/graph.rs
//!
//! Graph panel: draws the current snapshot on a braille canvas.
//!
//! Layout coordinates live in the virtual `width` x `height` space of
//! `RenderConfig` with y growing downward; the canvas has y growing upward, so
//! every point is flipped on the way in. Edges are painted on the first layer
//! and vertices on a second one so circles always cover the lines beneath them.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Context, Line as Segment},
    },
};

use crate::graph::RenderConfig;
use crate::graph::data::{GraphSnapshot, ResolvedEdge};
use crate::graph::geometry::{EdgeShape, edge_shape};
use crate::graph::layout::Point;

/// Lines fanned from the tip to the base of an arrowhead to fill it.
const HEAD_FILL_STEPS: usize = 8;

pub struct GraphPanel<'a> {
    pub snapshot: &'a GraphSnapshot,
    pub config: &'a RenderConfig,
}

impl<'a> GraphPanel<'a> {
    pub fn new(snapshot: &'a GraphSnapshot, config: &'a RenderConfig) -> Self {
        Self { snapshot, config }
    }

    fn flip(&self, p: Point) -> (f64, f64) {
        (p.x, self.config.height - p.y)
    }

    fn segment(&self, ctx: &mut Context<'_>, a: Point, b: Point, color: Color) {
        let (x1, y1) = self.flip(a);
        let (x2, y2) = self.flip(b);
        ctx.draw(&Segment::new(x1, y1, x2, y2, color));
    }

    /// Print `text` centred on `at`; `cell_w` is the canvas width of one terminal cell.
    fn label(&self, ctx: &mut Context<'_>, at: Point, text: String, color: Color, cell_w: f64) {
        let (x, y) = self.flip(at);
        let x = x - text.chars().count() as f64 * cell_w / 2.0;
        ctx.print(x, y, Line::styled(text, Style::default().fg(color)));
    }

    fn paint_edges(&self, ctx: &mut Context<'_>, cell_w: f64) {
        let cfg = self.config;
        let format = self.snapshot.graph.format;
        for ResolvedEdge { edge, from, to } in self.snapshot.drawable_edges() {
            let color = cfg.palette.edge_color(format, edge);
            let shape = edge_shape(
                self.snapshot.positions[from],
                self.snapshot.positions[to],
                edge.is_self_loop(),
                cfg.vertex_radius,
                cfg.arrow_len,
            );
            match &shape {
                EdgeShape::Arrow { start, end, head } => {
                    self.segment(ctx, *start, *end, color);
                    for step in 0..=HEAD_FILL_STEPS {
                        let t = step as f64 / HEAD_FILL_STEPS as f64;
                        let base = Point::new(
                            head[0].x + (head[1].x - head[0].x) * t,
                            head[0].y + (head[1].y - head[0].y) * t,
                        );
                        self.segment(ctx, *end, base, color);
                    }
                }
                EdgeShape::Loop { points, .. } => {
                    for pair in points.windows(2) {
                        self.segment(ctx, pair[0], pair[1], color);
                    }
                }
            }
            if let Some(weight) = edge.weight() {
                self.label(
                    ctx,
                    shape.label_anchor(),
                    weight.to_string(),
                    cfg.palette.weighted_label,
                    cell_w,
                );
            }
        }
    }

    /// `dot` is the canvas distance between adjacent braille dots; the disc is
    /// filled with rings that far apart.
    fn paint_vertices(&self, ctx: &mut Context<'_>, cell_w: f64, dot: f64) {
        let cfg = self.config;
        let format = self.snapshot.graph.format;
        for (vertex, centre) in self.snapshot.placed_vertices() {
            let (x, y) = self.flip(centre);
            let fill = cfg.palette.vertex_fill(format, vertex);
            let border = cfg.palette.vertex_border(format, vertex);

            let mut radius = cfg.vertex_radius - 2.0 * dot;
            while radius > 0.0 {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color: fill,
                });
                radius -= dot;
            }
            for ring in [cfg.vertex_radius, cfg.vertex_radius - dot] {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: ring,
                    color: border,
                });
            }
            self.label(ctx, centre, vertex.label().to_string(), cfg.palette.text, cell_w);
        }
    }
}

impl crate::ui::Panel for GraphPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let graph = &self.snapshot.graph;
        let title = format!(
            "Graph ({} vertices, {} edges)",
            graph.vertices.len(),
            graph.edges.len()
        );
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);

        let (w, h) = (self.config.width, self.config.height);
        let cols = f64::from(inner.width.max(1));
        let rows = f64::from(inner.height.max(1));
        let cell_w = w / cols;
        // braille packs 2x4 dots per cell
        let dot = (w / (cols * 2.0)).min(h / (rows * 4.0)).max(0.5);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(self.config.palette.background)
            .x_bounds([0.0, w])
            .y_bounds([0.0, h])
            .paint(|ctx| {
                self.paint_edges(ctx, cell_w);
                ctx.layer();
                self.paint_vertices(ctx, cell_w, dot);
            });
        f.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{topology, weighted};
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(snapshot: &GraphSnapshot, cfg: &RenderConfig) -> Buffer {
        render_sized(snapshot, cfg, 120, 40)
    }

    fn render_sized(snapshot: &GraphSnapshot, cfg: &RenderConfig, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| GraphPanel::new(snapshot, cfg).draw(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn has_fg(buf: &Buffer, color: Color) -> bool {
        buf.content().iter().any(|c| c.fg == color)
    }

    /// Labels share the active-edge colour by default; separate them so
    /// colour checks only see shapes.
    fn config() -> RenderConfig {
        let mut cfg = RenderConfig::default();
        cfg.palette.text = Color::Rgb(1, 2, 3);
        cfg
    }

    fn snapshot(parsed: crate::parse::Parsed, cfg: &RenderConfig) -> GraphSnapshot {
        GraphSnapshot::new(parsed.graph, cfg.width, cfg.height)
    }

    #[test]
    fn router_is_blue_until_marked_down() {
        let cfg = config();

        let up = snapshot(topology::parse_str("N r1 10.0.0.1 0 100\n"), &cfg);
        let buf = render(&up, &cfg);
        assert!(has_fg(&buf, cfg.palette.router));
        assert!(!has_fg(&buf, cfg.palette.down));
        assert!(text(&buf).contains("10.0.0.1"));

        let down = snapshot(topology::parse_str("N r1 10.0.0.1 0 100\nV r1 0\n"), &cfg);
        let buf = render(&down, &cfg);
        assert!(has_fg(&buf, cfg.palette.down));
        assert!(!has_fg(&buf, cfg.palette.router));
    }

    #[test]
    fn inactive_link_is_red() {
        let cfg = config();
        let snap = snapshot(
            topology::parse_str("N a 1.1.1.1 1\nN b 2.2.2.2 1\nA a b 1 1 1.0 0\n"),
            &cfg,
        );
        let buf = render(&snap, &cfg);
        assert!(has_fg(&buf, cfg.palette.down));
        assert!(!has_fg(&buf, cfg.palette.edge_active));
    }

    #[test]
    fn edges_stay_beneath_vertices() {
        let cfg = config();
        let mut snap = snapshot(
            topology::parse_str("N a 1.1.1.1 1\nN b 2.2.2.2 1\nN c 3.3.3.3 1\nA a c 1 1 1.0 0\n"),
            &cfg,
        );
        // a -> c runs straight through the centre of b
        snap.positions = vec![
            Point::new(100.0, 350.0),
            Point::new(500.0, 350.0),
            Point::new(900.0, 350.0),
        ];
        let buf = render_sized(&snap, &cfg, 100, 40);
        assert!(has_fg(&buf, cfg.palette.down));

        // b sits at column 50, row 20 of a 98x38 inner area
        for x in 47u16..=52 {
            let cell = &buf[(x, 20u16)];
            assert_ne!(cell.fg, cfg.palette.down, "edge drawn over vertex at column {x}");
        }
    }

    #[test]
    fn dangling_edge_draws_nothing() {
        let cfg = config();
        let snap = snapshot(topology::parse_str("N a 1.1.1.1 1\nA a ghost 1 1 1.0 1\n"), &cfg);
        let buf = render(&snap, &cfg);
        assert!(!has_fg(&buf, cfg.palette.edge_active));
    }

    #[test]
    fn weighted_graph_shows_names_and_weights() {
        let cfg = config();
        let parsed = weighted::parse_str("VERTICES\nalpha\nbeta\nARISTAS\nalpha beta 42\n").unwrap();
        let buf = render(&snapshot(parsed, &cfg), &cfg);
        let s = text(&buf);
        assert!(s.contains("alpha"));
        assert!(s.contains("beta"));
        assert!(s.contains("42"));
        assert!(has_fg(&buf, cfg.palette.weighted_edge));
    }

    #[test]
    fn empty_graph_renders() {
        let cfg = config();
        let graph = crate::graph::data::Graph::empty(crate::graph::Format::Topology);
        let snap = GraphSnapshot::new(graph, cfg.width, cfg.height);
        let buf = render(&snap, &cfg);
        assert!(text(&buf).contains("Graph (0 vertices, 0 edges)"));
    }
}
