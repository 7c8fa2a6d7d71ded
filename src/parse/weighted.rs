//! src/parse/weighted.rs
//!
//! Reader for the sectioned weighted format:
//!
//! ```text
//! VERTICES
//! A
//! B
//! ARISTAS
//! A B 5
//! ```
//!
//! Stricter than the topology reader: the file must exist and every edge
//! endpoint must be declared. Edge lines that are not exactly
//! `origin destination weight` are skipped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{ParseError, ParseWarning, Parsed, WarningKind};
use crate::graph::data::{Edge, EdgeMetrics, Format, Graph, Vertex};

const VERTICES_HEADER: &str = "VERTICES";
const EDGES_HEADER: &str = "ARISTAS";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Edges,
}

pub fn parse_file(path: &Path) -> Result<Parsed, ParseError> {
    let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
    parse_str(&text)
}

pub fn parse_str(text: &str) -> Result<Parsed, ParseError> {
    let mut section = Section::Preamble;
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut names: HashSet<String> = HashSet::new();
    let mut edges: Vec<(usize, Edge)> = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim();
        match line {
            "" => continue,
            VERTICES_HEADER => {
                section = Section::Vertices;
                continue;
            }
            EDGES_HEADER => {
                section = Section::Edges;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Preamble => {}
            Section::Vertices => {
                if names.insert(line.to_string()) {
                    vertices.push(Vertex::named(line));
                } else {
                    warnings.push(ParseWarning {
                        line: lineno,
                        kind: WarningKind::DuplicateVertex(line.to_string()),
                    });
                }
            }
            Section::Edges => {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let &[origin, destination, weight] = parts.as_slice() else {
                    warnings.push(ParseWarning {
                        line: lineno,
                        kind: WarningKind::MalformedEdge {
                            fields: parts.len(),
                        },
                    });
                    continue;
                };
                let Ok(weight) = weight.parse::<i64>() else {
                    warnings.push(ParseWarning {
                        line: lineno,
                        kind: WarningKind::BadWeight(weight.to_string()),
                    });
                    continue;
                };
                edges.push((
                    lineno,
                    Edge {
                        origin: origin.to_string(),
                        destination: destination.to_string(),
                        metrics: EdgeMetrics::Weight(weight),
                    },
                ));
            }
        }
    }

    for (line, edge) in &edges {
        for name in [&edge.origin, &edge.destination] {
            if !names.contains(name) {
                return Err(ParseError::UnknownVertex {
                    line: *line,
                    name: name.clone(),
                });
            }
        }
    }

    Ok(Parsed {
        graph: Graph {
            format: Format::Weighted,
            vertices,
            edges: edges.into_iter().map(|(_, e)| e).collect(),
        },
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::data::GraphSnapshot;

    #[test]
    fn two_vertices_one_edge() {
        let parsed = parse_str("VERTICES\nA\nB\nARISTAS\nA B 5\n").unwrap();
        let g = &parsed.graph;
        assert_eq!(g.format, Format::Weighted);
        assert_eq!(g.vertices, vec![Vertex::named("A"), Vertex::named("B")]);
        assert_eq!(g.edges.len(), 1);
        assert_eq!(g.edges[0].weight(), Some(5));

        let snap = GraphSnapshot::new(parsed.graph, 1000.0, 700.0);
        let resolved: Vec<_> = snap.drawable_edges().map(|e| (e.from, e.to)).collect();
        assert_eq!(resolved, vec![(0, 1)]);
    }

    #[test]
    fn wrong_field_counts_are_skipped() {
        let parsed = parse_str("VERTICES\nA\nB\nARISTAS\nA B\nA B 5 9\nB A 2\n").unwrap();
        assert_eq!(parsed.graph.edges.len(), 1);
        assert_eq!(parsed.graph.edges[0].origin, "B");
        assert_eq!(
            parsed.warnings,
            vec![
                ParseWarning {
                    line: 5,
                    kind: WarningKind::MalformedEdge { fields: 2 },
                },
                ParseWarning {
                    line: 6,
                    kind: WarningKind::MalformedEdge { fields: 4 },
                },
            ]
        );
    }

    #[test]
    fn non_integer_weight_is_skipped() {
        let parsed = parse_str("VERTICES\nA\nARISTAS\nA A heavy\n").unwrap();
        assert!(parsed.graph.edges.is_empty());
        assert_eq!(parsed.warnings[0].kind, WarningKind::BadWeight("heavy".into()));
    }

    #[test]
    fn undeclared_endpoint_is_an_error() {
        let err = parse_str("VERTICES\nA\nARISTAS\nA Z 1\n").unwrap_err();
        match err {
            ParseError::UnknownVertex { line, name } => {
                assert_eq!(line, 4);
                assert_eq!(name, "Z");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn lines_before_any_header_are_ignored() {
        let parsed = parse_str("junk\n\nVERTICES\n  A  \nARISTAS\nA A 7\n").unwrap();
        assert_eq!(parsed.graph.vertices, vec![Vertex::named("A")]);
        assert!(parsed.graph.edges[0].is_self_loop());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("matrixGrafoL.txt")).unwrap_err();
        assert!(err.is_not_found());
    }
}
