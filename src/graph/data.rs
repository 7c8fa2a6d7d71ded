//! src/graph/data.rs
//!
//! Vertices, edges and the immutable per-refresh snapshot the renderer draws from.

use std::collections::HashMap;
use std::fmt;

use super::layout::{Point, RingLayout};

/// Which input format a graph was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Tagged-line network topology (`N`, `A`, `V` records).
    Topology,
    /// Sectioned `VERTICES` / `ARISTAS` file with integer weights.
    Weighted,
}

impl Format {
    /// File read when no path is given on the command line.
    pub fn default_path(self) -> &'static str {
        match self {
            Format::Topology => "txt/topologia.txt",
            Format::Weighted => "txt/matrixGrafoL.txt",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Topology => f.write_str("topology"),
            Format::Weighted => f.write_str("weighted"),
        }
    }
}

/// Device category of a topology vertex, keyed by its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Router,
    Switch,
    Host,
    Server,
    /// Code 4 or anything unrecognized.
    Other(i64),
}

impl DeviceType {
    /// Code used when the type field is missing or not an integer.
    pub const DEFAULT_CODE: i64 = 4;

    pub fn from_code(code: i64) -> Self {
        match code {
            0 => DeviceType::Router,
            1 => DeviceType::Switch,
            2 => DeviceType::Host,
            3 => DeviceType::Server,
            other => DeviceType::Other(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            DeviceType::Router => 0,
            DeviceType::Switch => 1,
            DeviceType::Host => 2,
            DeviceType::Server => 3,
            DeviceType::Other(code) => code,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceType::Router => "router",
            DeviceType::Switch => "switch",
            DeviceType::Host => "host",
            DeviceType::Server => "server",
            DeviceType::Other(_) => "default",
        }
    }
}

impl Default for DeviceType {
    fn default() -> Self {
        DeviceType::Other(Self::DEFAULT_CODE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    /// unique key within one loaded file
    pub name: String,
    /// display address, topology files only
    pub ip: Option<String>,
    pub device: DeviceType,
    /// carried from the file but never rendered
    pub capacity: i64,
    pub active: bool,
}

impl Vertex {
    /// A bare named vertex as found in weighted files.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: None,
            device: DeviceType::default(),
            capacity: 0,
            active: true,
        }
    }

    /// Text drawn in the middle of the vertex circle.
    pub fn label(&self) -> &str {
        self.ip.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EdgeMetrics {
    Link {
        latency_ms: i64,
        bandwidth_mbps: i64,
        reliability: f64,
        active: bool,
    },
    Weight(i64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub origin: String,
    pub destination: String,
    pub metrics: EdgeMetrics,
}

impl Edge {
    pub fn active(&self) -> bool {
        match self.metrics {
            EdgeMetrics::Link { active, .. } => active,
            EdgeMetrics::Weight(_) => true,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// Weight text overlaid on weighted edges.
    pub fn weight(&self) -> Option<i64> {
        match self.metrics {
            EdgeMetrics::Weight(w) => Some(w),
            EdgeMetrics::Link { .. } => None,
        }
    }
}

/// Vertices and edges exactly as read from one file.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    pub format: Format,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn empty(format: Format) -> Self {
        Self {
            format,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// name -> index into `vertices`
    pub fn lookup(&self) -> HashMap<String, usize> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name.clone(), i))
            .collect()
    }
}

/// One edge with both endpoints resolved to vertex indices.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedEdge<'a> {
    pub edge: &'a Edge,
    pub from: usize,
    pub to: usize,
}

/// Immutable graph + lookup + layout.
///
/// The render loop owns exactly one of these and swaps it for a fresh one on
/// every successful refresh.
#[derive(Clone, Debug)]
pub struct GraphSnapshot {
    pub graph: Graph,
    pub lookup: HashMap<String, usize>,
    pub positions: Vec<Point>,
}

impl GraphSnapshot {
    /// Lay out `graph` on a `width` x `height` canvas.
    pub fn new(graph: Graph, width: f64, height: f64) -> Self {
        let lookup = graph.lookup();
        let positions =
            RingLayout::for_format(graph.format).positions(graph.vertices.len(), width, height);
        Self {
            graph,
            lookup,
            positions,
        }
    }

    /// Edges whose origin and destination both exist, in file order.
    pub fn drawable_edges(&self) -> impl Iterator<Item = ResolvedEdge<'_>> + '_ {
        self.graph.edges.iter().filter_map(|edge| {
            let from = *self.lookup.get(&edge.origin)?;
            let to = *self.lookup.get(&edge.destination)?;
            Some(ResolvedEdge { edge, from, to })
        })
    }

    /// Number of edges that reference an unknown vertex.
    pub fn dangling_edges(&self) -> usize {
        self.graph.edges.len() - self.drawable_edges().count()
    }

    /// Vertices paired with their laid-out centre.
    pub fn placed_vertices(&self) -> impl Iterator<Item = (&Vertex, Point)> + '_ {
        self.graph
            .vertices
            .iter()
            .zip(self.positions.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(origin: &str, destination: &str, active: bool) -> Edge {
        Edge {
            origin: origin.into(),
            destination: destination.into(),
            metrics: EdgeMetrics::Link {
                latency_ms: 1,
                bandwidth_mbps: 1,
                reliability: 1.0,
                active,
            },
        }
    }

    #[test]
    fn device_codes_map_both_ways() {
        for code in 0..6 {
            assert_eq!(DeviceType::from_code(code).code(), code);
        }
        assert_eq!(DeviceType::from_code(0), DeviceType::Router);
        assert_eq!(DeviceType::from_code(9).name(), "default");
        assert_eq!(DeviceType::default().code(), 4);
    }

    #[test]
    fn label_prefers_ip() {
        let mut v = Vertex::named("r1");
        assert_eq!(v.label(), "r1");
        v.ip = Some("10.0.0.1".into());
        assert_eq!(v.label(), "10.0.0.1");
    }

    #[test]
    fn snapshot_drops_dangling_edges() {
        let graph = Graph {
            format: Format::Topology,
            vertices: vec![Vertex::named("a"), Vertex::named("b")],
            edges: vec![link("a", "b", true), link("a", "ghost", true), link("b", "b", false)],
        };
        let snap = GraphSnapshot::new(graph, 1000.0, 700.0);
        let resolved: Vec<_> = snap.drawable_edges().map(|e| (e.from, e.to)).collect();
        assert_eq!(resolved, vec![(0, 1), (1, 1)]);
        assert_eq!(snap.dangling_edges(), 1);
        assert_eq!(snap.positions.len(), 2);
    }

    #[test]
    fn weighted_edges_are_always_active() {
        let e = Edge {
            origin: "a".into(),
            destination: "a".into(),
            metrics: EdgeMetrics::Weight(3),
        };
        assert!(e.active());
        assert!(e.is_self_loop());
        assert_eq!(e.weight(), Some(3));
        assert_eq!(link("a", "b", false).weight(), None);
    }
}
