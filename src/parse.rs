//! src/parse.rs
//!
//! Graph file readers for both input formats, plus the error and warning
//! types they share.

pub mod topology;
pub mod weighted;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::graph::data::{Format, Graph};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: edge references undeclared vertex '{name}'")]
    UnknownVertex { line: usize, name: String },
}

impl ParseError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        ParseError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Something the parser accepted but had to paper over.
#[derive(Clone, Debug, PartialEq)]
pub enum WarningKind {
    /// A numeric field did not parse; `value` is the raw token.
    DefaultedField { field: &'static str, value: String },
    /// A second `N` line reused a name and replaced the first.
    DuplicateVertex(String),
    /// Weighted edge line with the wrong number of fields.
    MalformedEdge { fields: usize },
    /// Weighted edge whose weight is not an integer.
    BadWeight(String),
    /// Edge endpoint not declared (kept, but never drawn).
    DanglingEdge { origin: String, destination: String },
    /// `V` line for a name that was never declared.
    UnknownVertexState(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseWarning {
    /// 1-based
    pub line: usize,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            WarningKind::DefaultedField { field, value } => {
                write!(f, "bad {} '{}', using default", field, value)
            }
            WarningKind::BadWeight(raw) => write!(f, "edge weight '{}' is not an integer", raw),
            WarningKind::DuplicateVertex(name) => write!(f, "duplicate vertex '{}'", name),
            WarningKind::MalformedEdge { fields } => {
                write!(f, "edge line with {} fields skipped", fields)
            }
            WarningKind::DanglingEdge {
                origin,
                destination,
            } => write!(f, "edge {} -> {} has a missing endpoint", origin, destination),
            WarningKind::UnknownVertexState(name) => {
                write!(f, "state for unknown vertex '{}'", name)
            }
        }
    }
}

/// Result of reading one file.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed {
    pub graph: Graph,
    pub warnings: Vec<ParseWarning>,
}

impl Parsed {
    pub fn empty(format: Format) -> Self {
        Self {
            graph: Graph::empty(format),
            warnings: Vec::new(),
        }
    }
}

/// Read `path` with the reader for `format`.
pub fn parse_file(format: Format, path: &Path) -> Result<Parsed, ParseError> {
    match format {
        Format::Topology => topology::parse_file(path),
        Format::Weighted => weighted::parse_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_render_one_line() {
        let w = ParseWarning {
            line: 3,
            kind: WarningKind::DefaultedField {
                field: "latency",
                value: "fast".into(),
            },
        };
        assert_eq!(w.to_string(), "line 3: bad latency 'fast', using default");
    }

    #[test]
    fn formats_differ_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let parsed = parse_file(Format::Topology, &path).unwrap();
        assert_eq!(parsed, Parsed::empty(Format::Topology));

        let err = parse_file(Format::Weighted, &path).unwrap_err();
        assert!(err.is_not_found());
    }
}
