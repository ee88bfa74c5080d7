use serde::Serialize;

/// What happened at a step of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    NewIteration,
    Visit,
    GoalFound,
    DepthCutoff,
    Backtrack,
}

/// Line of the displayed pseudocode that a step corresponds to:
///
/// ```text
///  1 IDDFS(root, goal, maxDepth):
///  2   for depth = 0 to maxDepth:
///  3     // new iteration (depth limit = depth)
///  4     result = DLS(root, goal, depth, path=[])
///  5     if result == FOUND -> return FOUND
///  6   return NOT_FOUND
///  7
///  8 DLS(node, goal, limit, path):
///  9   add node to path
/// 10   visit(node)
/// 11   if node == goal -> return FOUND
/// 12   if depth >= limit -> return CUTOFF
/// 13   for each neighbor not in path:
/// 14     result = DLS(neighbor, goal, limit-1, path)
/// 15     if result == FOUND -> return FOUND
/// 16   backtrack: remove node from path
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum PseudocodeLine {
    DepthLoop = 2,
    ReturnFound = 5,
    Visit = 10,
    GoalTest = 11,
    DepthTest = 12,
    Backtrack = 16,
}

impl From<PseudocodeLine> for u8 {
    fn from(line: PseudocodeLine) -> u8 {
        line as u8
    }
}

/// One recorded step of the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// node the step happened at.
    pub node: String,
    /// distance from the start node.
    pub depth: u32,
    /// depth limit of the current iteration.
    pub depth_limit: u32,
    /// path from the start node. Includes `node`, except on
    /// `backtrack` and `new_iteration` events.
    pub path: Vec<String>,
    pub pseudocode_line: PseudocodeLine,
}
