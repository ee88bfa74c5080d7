use serde::{Deserialize, Serialize};

use graph::Graph;

/// Largest depth limit a trace request may ask for.
pub const MAX_DEPTH_CAP: u32 = 64;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("maxDepth must not be negative (got {0})")]
    NegativeMaxDepth(i64),
    #[error("maxDepth {0} is greater than the maximum of {}", MAX_DEPTH_CAP)]
    MaxDepthTooLarge(i64),
}

/// Body of a graph generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGraphRequest {
    /// clamped by the generator, never rejected.
    pub num_nodes: i64,
}

/// Body of a trace request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IddfsRequest {
    pub graph: Graph,
    pub start_node: String,
    pub goal_node: String,
    pub max_depth: i64,
}

/// Either kind of request, told apart by its fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Request {
    Iddfs(IddfsRequest),
    Generate(GenerateGraphRequest),
}

/// A validated trace request, ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceParams {
    pub graph: Graph,
    pub start: String,
    pub goal: String,
    pub max_depth: u32,
}

impl IddfsRequest {
    /// Check the depth limit. Start and goal ids are passed through as-is;
    /// ids missing from the graph just produce a trace that never finds the goal.
    pub fn validate(self) -> Result<TraceParams, Error> {
        let max_depth = validate_max_depth(self.max_depth)?;
        Ok(TraceParams {
            graph: self.graph,
            start: self.start_node,
            goal: self.goal_node,
            max_depth,
        })
    }
}

pub fn validate_max_depth(max_depth: i64) -> Result<u32, Error> {
    if max_depth < 0 {
        Err(Error::NegativeMaxDepth(max_depth))
    } else if max_depth > MAX_DEPTH_CAP as i64 {
        Err(Error::MaxDepthTooLarge(max_depth))
    } else {
        Ok(max_depth as u32)
    }
}
