//! src/graph.rs
//!
//! Top-level `graph` module: data model, layout, edge geometry, render
//! configuration, the watched source file and the displayed view.

pub mod config;
pub mod data;
pub mod geometry;
pub mod layout;
pub mod source;
pub mod view;

/// Re-exports
pub use config::RenderConfig;
pub use data::Format;
pub use source::GraphSource;
pub use view::GraphView;
