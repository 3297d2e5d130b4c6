//! Common types and utilities shared across tree234.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (node capacity)
//! - Error types
//! - Identifiers (NodeId)

pub mod config;
pub mod error;
mod node_id;

pub use error::{Error, Result};
pub use node_id::NodeId;
