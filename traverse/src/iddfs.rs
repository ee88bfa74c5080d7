use graph::{Adjacency, Graph, NodeId};

use crate::{DlsTracer, SearchResult, TraceEvent};

/// A finished trace: every recorded event plus how the search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// events in the order they happened.
    pub events: Vec<TraceEvent>,
    /// `Found` if some iteration found the goal, else the last iteration's result.
    pub result: SearchResult,
    /// depth limit of the iteration that found the goal.
    pub found_at: Option<u32>,
}

/// Iterative deepening search over one graph, from one start node to one goal.
pub struct Iddfs {
    adj: Adjacency,
    start: NodeId,
    goal: NodeId,
}

impl Iddfs {
    /// Prepare a search on `graph`. Ids that aren't in the graph are treated as
    /// nodes with no links.
    pub fn new(graph: &Graph, start: &str, goal: &str) -> Self {
        let mut adj = Adjacency::build(graph);
        let start = adj.intern(start);
        let goal = adj.intern(goal);
        log::debug!(
            "built adjacency with {} nodes for search {} -> {}",
            adj.len(),
            adj.name(start),
            adj.name(goal),
        );
        Self { adj, start, goal }
    }

    /// True if the goal can be reached from the start at any depth.
    pub fn goal_reachable(&self) -> bool {
        self.adj.reachable_from(self.start).contains(&self.goal)
    }

    /// Run depth-limited searches with limits `0..=max_depth`, stopping early once
    /// the goal is found.
    pub fn run(&self, max_depth: u32) -> Trace {
        let mut tracer = DlsTracer::new(&self.adj, self.goal);
        let mut result = SearchResult::NotFound;
        let mut found_at = None;

        for depth_limit in 0..=max_depth {
            tracer.new_iteration(self.start, depth_limit);
            result = tracer.search(self.start, depth_limit, depth_limit, &[]);
            log::debug!("iteration with depth limit {depth_limit}: {result}");
            if result == SearchResult::Found {
                found_at = Some(depth_limit);
                break;
            }
        }

        Trace {
            events: tracer.into_events(),
            result,
            found_at,
        }
    }
}

/// Trace an iterative deepening search of `graph` from `start` to `goal`.
pub fn trace(graph: &Graph, start: &str, goal: &str, max_depth: u32) -> Trace {
    Iddfs::new(graph, start, goal).run(max_depth)
}
