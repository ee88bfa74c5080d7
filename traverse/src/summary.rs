use crate::{EventKind, PseudocodeLine, SearchResult, Trace};

/// Node expansions recorded during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationStats {
    pub depth_limit: u32,
    pub expansions: usize,
}

/// Counts derived from a finished [`Trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSummary {
    /// total number of events.
    pub events: usize,
    /// per-iteration expansions, in iteration order.
    pub iterations: Vec<IterationStats>,
    /// total nodes expanded across all iterations.
    pub expansions: usize,
    pub backtracks: usize,
    /// greatest depth at which a node was expanded.
    pub deepest: u32,
    pub result: SearchResult,
    pub found_at: Option<u32>,
    /// path to the goal, if it was found.
    pub goal_path: Option<Vec<String>>,
}

impl TraceSummary {
    pub fn new(trace: &Trace) -> Self {
        let mut iterations: Vec<IterationStats> = Vec::new();
        let mut expansions = 0;
        let mut backtracks = 0;
        let mut deepest = 0;
        let mut goal_path = None;

        for event in &trace.events {
            match event.kind {
                EventKind::NewIteration => iterations.push(IterationStats {
                    depth_limit: event.depth_limit,
                    expansions: 0,
                }),
                EventKind::Visit if event.pseudocode_line == PseudocodeLine::Visit => {
                    expansions += 1;
                    deepest = deepest.max(event.depth);
                    if let Some(current) = iterations.last_mut() {
                        current.expansions += 1;
                    }
                }
                EventKind::Backtrack => backtracks += 1,
                EventKind::GoalFound => goal_path = Some(event.path.clone()),
                _ => (),
            }
        }

        Self {
            events: trace.events.len(),
            iterations,
            expansions,
            backtracks,
            deepest,
            result: trace.result,
            found_at: trace.found_at,
            goal_path,
        }
    }
}
