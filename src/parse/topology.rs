//! src/parse/topology.rs
//!
//! Reader for the tagged-line topology format:
//!
//! ```text
//! NS <count>                              (ignored)
//! N <name> <ip> <type> [<capacity>]
//! AS <count>                              (ignored)
//! A <origin> <destination> <lat> <bw> <reliability> <active>
//! V <name> <active>                       (optional state override)
//! ```
//!
//! Parsing is forgiving: a missing file is an empty graph and malformed
//! numbers fall back to defaults. Every fallback is reported as a
//! [`ParseWarning`] so callers can tell clean input from patched input.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use super::{ParseError, ParseWarning, Parsed, WarningKind};
use crate::graph::data::{DeviceType, Edge, EdgeMetrics, Format, Graph, Vertex};

/// Read and parse `path`. A file that does not exist yields an empty graph.
pub fn parse_file(path: &Path) -> Result<Parsed, ParseError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_str(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Parsed::empty(Format::Topology)),
        Err(e) => Err(ParseError::io(path, e)),
    }
}

pub fn parse_str(text: &str) -> Parsed {
    let mut parser = TopologyParser::default();
    for (idx, raw) in text.lines().enumerate() {
        parser.line(idx + 1, raw);
    }
    parser.finish()
}

#[derive(Default)]
struct TopologyParser {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    edge_lines: Vec<usize>,
    warnings: Vec<ParseWarning>,
}

impl TopologyParser {
    fn line(&mut self, lineno: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "N" if parts.len() >= 4 => self.vertex(lineno, &parts),
            "A" if parts.len() >= 7 => self.edge(lineno, &parts),
            "V" if parts.len() >= 3 => self.state(lineno, &parts),
            // NS / AS counts, short records and unknown tags
            _ => {}
        }
    }

    fn vertex(&mut self, lineno: usize, parts: &[&str]) {
        let code = self.number(lineno, "type", parts[3], DeviceType::DEFAULT_CODE);
        let capacity = match parts.get(4) {
            Some(raw) => self.number(lineno, "capacity", raw, 0),
            None => 0,
        };
        let vertex = Vertex {
            name: parts[1].to_string(),
            ip: Some(parts[2].to_string()),
            device: DeviceType::from_code(code),
            capacity,
            active: true,
        };
        match self.index.get(&vertex.name) {
            Some(&i) => {
                self.warn(lineno, WarningKind::DuplicateVertex(vertex.name.clone()));
                self.vertices[i] = vertex;
            }
            None => {
                self.index.insert(vertex.name.clone(), self.vertices.len());
                self.vertices.push(vertex);
            }
        }
    }

    fn edge(&mut self, lineno: usize, parts: &[&str]) {
        let latency_ms = self.number(lineno, "latency", parts[3], 0);
        let bandwidth_mbps = self.number(lineno, "bandwidth", parts[4], 0);
        let reliability = self.number(lineno, "reliability", parts[5], 0.0);
        let active: i64 = self.number(lineno, "active", parts[6], 1);
        self.edges.push(Edge {
            origin: parts[1].to_string(),
            destination: parts[2].to_string(),
            metrics: EdgeMetrics::Link {
                latency_ms,
                bandwidth_mbps,
                reliability,
                active: active != 0,
            },
        });
        self.edge_lines.push(lineno);
    }

    fn state(&mut self, lineno: usize, parts: &[&str]) {
        let active: i64 = self.number(lineno, "active", parts[2], 1);
        match self.index.get(parts[1]) {
            Some(&i) => self.vertices[i].active = active != 0,
            None => self.warn(lineno, WarningKind::UnknownVertexState(parts[1].to_string())),
        }
    }

    /// Parse `raw`, or record a warning and fall back to `default`.
    fn number<T: FromStr>(&mut self, lineno: usize, field: &'static str, raw: &str, default: T) -> T {
        raw.parse().unwrap_or_else(|_| {
            self.warn(
                lineno,
                WarningKind::DefaultedField {
                    field,
                    value: raw.to_string(),
                },
            );
            default
        })
    }

    fn warn(&mut self, line: usize, kind: WarningKind) {
        self.warnings.push(ParseWarning { line, kind });
    }

    fn finish(mut self) -> Parsed {
        // endpoints may be declared after the edge, so check at the end
        let dangling: Vec<ParseWarning> = self
            .edges
            .iter()
            .zip(&self.edge_lines)
            .filter(|(e, _)| {
                !self.index.contains_key(&e.origin) || !self.index.contains_key(&e.destination)
            })
            .map(|(e, &line)| ParseWarning {
                line,
                kind: WarningKind::DanglingEdge {
                    origin: e.origin.clone(),
                    destination: e.destination.clone(),
                },
            })
            .collect();
        self.warnings.extend(dangling);
        self.warnings.sort_by_key(|w| w.line);

        Parsed {
            graph: Graph {
                format: Format::Topology,
                vertices: self.vertices,
                edges: self.edges,
            },
            warnings: self.warnings,
        }
    }
}
