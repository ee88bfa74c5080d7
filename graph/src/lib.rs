//! Graph types shared by the trace engine and the command-line app.
//!
//! A [`Graph`] is the wire-level description: a list of node ids and a list of
//! directed links. Before searching, it is turned into an [`Adjacency`], which
//! interns node ids into typed [`NodeId`]s and stores each node's successors
//! sorted by id. That sort order decides traversal order, so everything downstream
//! of the adjacency is deterministic.

/// Typed node ids.
mod id;
pub use id::NodeId;

/// Serializable graph description.
mod model;
pub use model::{Endpoint, Graph, Link, Node};

/// Sorted successor lists built from a `Graph`.
mod adjacency;
pub use adjacency::Adjacency;

/// Random connected graph generator.
mod generate;
pub use generate::{GraphGenerator, MAX_NODES, MIN_NODES};

/// Built-in example graphs.
mod presets;
pub use presets::Preset;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown preset \"{0}\" (expected one of: {1})")]
    UnknownPreset(String, String),
}
