//! series Engine - Core enumeration types and logic
//!
//! This crate builds the complete tree of win/loss sequences for a series
//! won by the first side to reach a fixed number of wins, flattens it into
//! outcomes, and derives summary statistics.
//!
//! The engine is platform-agnostic and has zero UI dependencies.

pub mod enumerator;
pub mod error;
pub mod node;
pub mod outcomes;
pub mod stats;

pub use enumerator::{build_tree, DEFAULT_WINS_NEEDED, MAX_WINS_NEEDED};
pub use error::{Error, Result};
pub use node::{Node, NodeId, Outcome, Score, Sequence, SeriesTree, Team};
pub use outcomes::{collect_outcomes, group_by_length};
pub use stats::{stats, SeriesStats};
