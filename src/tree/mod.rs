//! The 2-3-4 tree.
//!
//! # Components
//! - [`Tree234`] - The tree: top-down insert, find, display walk
//! - [`Node`] - A single node: 1-3 sorted items plus up to 4 child links
//! - [`TreeWalk`] / [`NodeVisit`] - Lazy pre-order traversal for diagnostics
//! - [`TreeStats`] - Operation counters

mod node;
mod stats;
mod tree234;
mod walk;

pub use node::Node;
pub use stats::{StatsSnapshot, TreeStats};
pub use tree234::{ItemLocation, Tree234};
pub use walk::{NodeVisit, TreeWalk};
