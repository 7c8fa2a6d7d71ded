//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod graph;
pub mod history;
pub mod info;
pub mod legend;
pub mod paragraph;

pub use graph::GraphPanel;
pub use history::WarningsPanel;
pub use info::InfoPanel;
pub use legend::LegendPanel;
pub use paragraph::ParagraphPanel;
