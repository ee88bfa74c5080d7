use colored::Colorize;

use graph::{Adjacency, NodeId};

use crate::{EventKind, PseudocodeLine, SearchResult, TraceEvent};

/// Where in the search an event happened.
#[derive(Debug, Clone, Copy)]
struct Position {
    node: NodeId,
    depth: u32,
    depth_limit: u32,
}

/// Depth-limited search that records a [`TraceEvent`] for every step.
/// One tracer is shared by all iterations of a single trace.
pub struct DlsTracer<'a> {
    /// sorted successor lists
    adj: &'a Adjacency,
    /// node we're looking for
    goal: NodeId,
    /// events recorded so far, in order
    events: Vec<TraceEvent>,
}

impl<'a> DlsTracer<'a> {
    pub fn new(adj: &'a Adjacency, goal: NodeId) -> Self {
        Self {
            adj,
            goal,
            events: Vec::with_capacity(adj.len() * 8),
        }
    }

    /// Consume this tracer and return the recorded events.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Record the start of the iteration with the given depth limit.
    pub fn new_iteration(&mut self, start: NodeId, depth_limit: u32) {
        let at = Position {
            node: start,
            depth: 0,
            depth_limit,
        };
        self.emit(EventKind::NewIteration, PseudocodeLine::DepthLoop, at, &[]);
    }

    /// Search from `node` with `remaining` levels left below it.
    /// `path` is the path from the start node up to, not including, `node`.
    pub fn search(
        &mut self,
        node: NodeId,
        remaining: u32,
        depth_limit: u32,
        path: &[NodeId],
    ) -> SearchResult {
        let adj = self.adj;
        let at = Position {
            node,
            depth: depth_limit - remaining,
            depth_limit,
        };

        let mut new_path = Vec::with_capacity(path.len() + 1);
        new_path.extend_from_slice(path);
        new_path.push(node);

        // expansion and goal test are separate pseudocode lines:
        self.emit(EventKind::Visit, PseudocodeLine::Visit, at, &new_path);
        self.emit(EventKind::Visit, PseudocodeLine::GoalTest, at, &new_path);

        if node == self.goal {
            self.emit(EventKind::GoalFound, PseudocodeLine::ReturnFound, at, &new_path);
            return SearchResult::Found;
        }

        // recorded at every non-goal node, whether or not the limit is hit:
        self.emit(EventKind::DepthCutoff, PseudocodeLine::DepthTest, at, &new_path);

        if remaining == 0 {
            self.emit(EventKind::Backtrack, PseudocodeLine::Backtrack, at, path);
            return SearchResult::Cutoff;
        }

        let mut cutoff = false;
        for &next in adj.successors(node) {
            if new_path.contains(&next) {
                continue;
            }
            match self.search(next, remaining - 1, depth_limit, &new_path) {
                SearchResult::Found => return SearchResult::Found,
                SearchResult::Cutoff => cutoff = true,
                SearchResult::NotFound => (),
            }
        }

        self.emit(EventKind::Backtrack, PseudocodeLine::Backtrack, at, path);
        if cutoff {
            SearchResult::Cutoff
        } else {
            SearchResult::NotFound
        }
    }

    fn emit(&mut self, kind: EventKind, line: PseudocodeLine, at: Position, path: &[NodeId]) {
        let adj = self.adj;
        let node = adj.name(at.node);
        log::trace!(
            "{:>2} {:?} {} depth {}/{}",
            u8::from(line),
            kind,
            node.cyan(),
            at.depth,
            at.depth_limit,
        );
        self.events.push(TraceEvent {
            kind,
            node: node.to_owned(),
            depth: at.depth,
            depth_limit: at.depth_limit,
            path: path.iter().map(|id| adj.name(*id).to_owned()).collect(),
            pseudocode_line: line,
        });
    }
}
