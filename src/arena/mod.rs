//! Node storage.
//!
//! The arena is the ownership layer of the tree: a single `Vec` holds every
//! node, and all structural links (children, parent) are [`NodeId`] indices
//! into it.
//!
//! # Components
//! - [`NodeArena`] - Vec-backed node allocator and child-link bookkeeping
//!
//! [`NodeId`]: crate::NodeId

mod node_arena;

pub use node_arena::NodeArena;
