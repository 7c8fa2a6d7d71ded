//! src/graph/layout.rs
//!
//! Radial placement: every vertex sits on one circle centred in the canvas.

use std::f64::consts::PI;

use super::data::Format;

/// Canvas coordinate, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RingLayout {
    /// subtracted from half the short canvas side
    pub margin: f64,
    /// radius below which `fallback_margin` is used instead
    pub min_radius: f64,
    /// `None` disables the small-canvas fallback
    pub fallback_margin: Option<f64>,
}

impl RingLayout {
    pub fn for_format(format: Format) -> Self {
        match format {
            Format::Topology => Self {
                margin: 120.0,
                min_radius: 100.0,
                fallback_margin: Some(40.0),
            },
            Format::Weighted => Self {
                margin: 120.0,
                min_radius: 100.0,
                fallback_margin: None,
            },
        }
    }

    /// Radius of the ring on a `width` x `height` canvas.
    pub fn radius(&self, width: f64, height: f64) -> f64 {
        let half = width.min(height) / 2.0;
        let radius = half - self.margin;
        match self.fallback_margin {
            Some(fallback) if radius < self.min_radius => half - fallback,
            _ => radius,
        }
    }

    /// `n` points evenly spaced on the ring, index 0 directly right of centre.
    pub fn positions(&self, n: usize, width: f64, height: f64) -> Vec<Point> {
        let centre = Point::new(width / 2.0, height / 2.0);
        let radius = self.radius(width, height);
        (0..n)
            .map(|i| {
                let angle = if n > 0 {
                    2.0 * PI * i as f64 / n as f64
                } else {
                    0.0
                };
                Point::new(
                    centre.x + radius * angle.cos(),
                    centre.y + radius * angle.sin(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn four_vertices_at_right_angles() {
        let layout = RingLayout::for_format(Format::Topology);
        let pts = layout.positions(4, 1000.0, 700.0);
        // min(1000, 700) / 2 - 120
        let r = 230.0;
        assert_eq!(pts.len(), 4);
        assert!(close(pts[0], Point::new(500.0 + r, 350.0)));
        assert!(close(pts[1], Point::new(500.0, 350.0 + r)));
        assert!(close(pts[2], Point::new(500.0 - r, 350.0)));
        assert!(close(pts[3], Point::new(500.0, 350.0 - r)));
    }

    #[test]
    fn empty_graph_has_no_positions() {
        let layout = RingLayout::for_format(Format::Weighted);
        assert!(layout.positions(0, 800.0, 600.0).is_empty());
    }

    #[test]
    fn single_vertex_sits_right_of_centre() {
        let layout = RingLayout::for_format(Format::Topology);
        let pts = layout.positions(1, 1000.0, 700.0);
        assert!(close(pts[0], Point::new(730.0, 350.0)));
    }

    #[test]
    fn small_canvas_falls_back_for_topology_only() {
        // half = 200, 200 - 120 = 80 < 100
        let topo = RingLayout::for_format(Format::Topology);
        assert_eq!(topo.radius(400.0, 500.0), 160.0);
        let weighted = RingLayout::for_format(Format::Weighted);
        assert_eq!(weighted.radius(400.0, 500.0), 80.0);
    }
}
