//! series Tree - Presentation model for the series tree
//!
//! This crate turns an engine `SeriesTree` into something a person can read:
//! node labels, an expand/collapse view rendered as an indented tree, and
//! the statistics, listing, level diagram and help panels.

pub mod label;
pub mod report;
pub mod view;

pub use label::{compact_label, node_label, Names};
pub use report::{
    help_text, level_diagram, sequence_listing, stats_panel, HelpText, LevelDiagram,
    SequenceListing, StatsPanel,
};
pub use view::{Row, Style, TreeView};
