//! src/graph/view.rs
//!
//! What the UI currently shows: the last good snapshot plus the outcome of the
//! most recent refresh.

use std::time::Instant;

use super::config::RenderConfig;
use super::data::GraphSnapshot;
use crate::parse::{ParseError, ParseWarning, Parsed};

pub struct GraphView {
    pub snapshot: GraphSnapshot,
    /// warnings from the file behind `snapshot`
    pub warnings: Vec<ParseWarning>,
    /// set when the latest refresh failed and `snapshot` is stale
    pub last_error: Option<String>,
    pub loaded_at: Instant,
    pub reloads: u64,
}

impl GraphView {
    pub fn new(parsed: Parsed, config: &RenderConfig, now: Instant) -> Self {
        log_warnings(&parsed.warnings);
        Self {
            snapshot: GraphSnapshot::new(parsed.graph, config.width, config.height),
            warnings: parsed.warnings,
            last_error: None,
            loaded_at: now,
            reloads: 0,
        }
    }

    /// Apply a refresh outcome. Success replaces the snapshot wholesale;
    /// failure keeps the previous one and remembers the error.
    pub fn apply(&mut self, result: Result<Parsed, ParseError>, config: &RenderConfig, now: Instant) {
        match result {
            Ok(parsed) => {
                log::debug!(
                    "reloaded {} vertices, {} edges, {} warnings",
                    parsed.graph.vertices.len(),
                    parsed.graph.edges.len(),
                    parsed.warnings.len()
                );
                log_warnings(&parsed.warnings);
                self.snapshot = GraphSnapshot::new(parsed.graph, config.width, config.height);
                self.warnings = parsed.warnings;
                self.last_error = None;
                self.loaded_at = now;
                self.reloads += 1;
            }
            Err(e) => {
                let what = if e.is_not_found() {
                    "graph file missing"
                } else {
                    "refresh failed"
                };
                log::warn!("{}, keeping previous graph: {}", what, e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        self.last_error.is_some()
    }
}

fn log_warnings(warnings: &[ParseWarning]) {
    for w in warnings {
        log::debug!("{}", w);
    }
}
