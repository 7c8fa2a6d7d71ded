//! src/graph/geometry.rs
//!
//! Edge shapes in canvas space: shortened arrows between vertex circles and
//! small arcs for self-loops. Pure math, no drawing.

use std::f64::consts::PI;

use super::layout::Point;

/// Half-angle between the shaft and each side of the arrowhead.
pub const ARROW_HALF_ANGLE: f64 = PI / 6.0;

/// Start and end of the self-loop arc, in radians.
pub const LOOP_SWEEP: (f64, f64) = (0.2 * PI, 1.7 * PI);

const LOOP_SEGMENTS: usize = 24;

#[derive(Clone, Debug, PartialEq)]
pub enum EdgeShape {
    Arrow {
        start: Point,
        end: Point,
        /// the two back corners of the head; the tip is `end`
        head: [Point; 2],
    },
    Loop {
        centre: Point,
        radius: f64,
        /// polyline approximating the arc
        points: Vec<Point>,
    },
}

impl EdgeShape {
    /// Where a weight label goes: mid-shaft, or just above the loop.
    pub fn label_anchor(&self) -> Point {
        match self {
            EdgeShape::Arrow { start, end, .. } => start.midpoint(*end),
            EdgeShape::Loop { centre, radius, .. } => Point::new(centre.x, centre.y - radius * 2.0),
        }
    }
}

/// Shape for an edge between vertex centres `from` and `to`.
///
/// `same_vertex` is set when origin and destination are the same name. A
/// zero-length segment is treated as a loop as well.
pub fn edge_shape(
    from: Point,
    to: Point,
    same_vertex: bool,
    vertex_radius: f64,
    arrow_len: f64,
) -> EdgeShape {
    let dist = from.distance(to);
    if same_vertex || dist == 0.0 {
        return loop_shape(from, vertex_radius);
    }
    let (ux, uy) = ((to.x - from.x) / dist, (to.y - from.y) / dist);
    let start = Point::new(from.x + vertex_radius * ux, from.y + vertex_radius * uy);
    let end = Point::new(to.x - vertex_radius * ux, to.y - vertex_radius * uy);
    EdgeShape::Arrow {
        start,
        end,
        head: arrow_head(start, end, arrow_len),
    }
}

/// Back corners of an arrowhead whose tip is at `end`.
pub fn arrow_head(start: Point, end: Point, len: f64) -> [Point; 2] {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let corner = |a: f64| Point::new(end.x - len * a.cos(), end.y - len * a.sin());
    [
        corner(angle - ARROW_HALF_ANGLE),
        corner(angle + ARROW_HALF_ANGLE),
    ]
}

/// Arc hugging the right side of the vertex at `at`.
pub fn loop_shape(at: Point, vertex_radius: f64) -> EdgeShape {
    let centre = Point::new(at.x + vertex_radius, at.y);
    let radius = vertex_radius / 2.0;
    let (a0, a1) = LOOP_SWEEP;
    let points = (0..=LOOP_SEGMENTS)
        .map(|i| {
            let a = a0 + (a1 - a0) * i as f64 / LOOP_SEGMENTS as f64;
            // counter-clockwise on screen, so y is subtracted
            Point::new(centre.x + radius * a.cos(), centre.y - radius * a.sin())
        })
        .collect();
    EdgeShape::Loop {
        centre,
        radius,
        points,
    }
}
