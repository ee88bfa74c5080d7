//!
//! Iterative deepening depth-first search, instrumented to record every step it takes.
//!
//! A trace is built in 3 steps:
//! 1. Build a sorted [`graph::Adjacency`] from the input graph. Start and goal ids
//!    that aren't in the graph become isolated nodes.
//! 2. For each depth limit from 0 to the max depth, record a `new_iteration` event
//!    and run a depth-limited search from the start node, recording visits, goal tests,
//!    depth tests and backtracks as they happen.
//! 3. Stop after the first iteration that finds the goal.
//!
//! The search never fails: dangling links, unknown ids and unreachable goals all
//! produce a complete trace that simply has no `goal_found` event.
//! Every event carries the pseudocode line it corresponds to, so a frontend can
//! replay the trace step by step next to the textbook algorithm.

/// trace event types
mod event;
pub use event::{EventKind, PseudocodeLine, TraceEvent};

/// tri-state result of a depth-limited search
mod result;
pub use result::SearchResult;

/// depth-limited search that records events
mod tracer;
use tracer::DlsTracer;

/// iterative deepening driver
mod iddfs;
pub use iddfs::{trace, Iddfs, Trace};

/// counts derived from a finished trace
mod summary;
pub use summary::{IterationStats, TraceSummary};

