use std::collections::VecDeque;

use util::{HashMap, HashSet, IdVec};

use crate::{Graph, NodeId};

/// Read-only successor lists for a [`Graph`], keyed by interned [`NodeId`].
///
/// Every node's successors are sorted by id in ascending order; the trace engine
/// walks them in that order. Duplicate links are kept, so a doubled link is
/// followed twice.
#[derive(Debug)]
pub struct Adjacency {
    /// id string -> interned id
    ids: HashMap<String, NodeId>,
    /// interned id -> id string
    names: IdVec<NodeId, String>,
    /// interned id -> sorted successors
    successors: IdVec<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    fn with_capacity(cap: usize) -> Self {
        Self {
            ids: HashMap::with_capacity_and_hasher(cap, Default::default()),
            names: IdVec::with_capacity(cap),
            successors: IdVec::with_capacity(cap),
        }
    }

    /// Build the adjacency for `graph`.
    /// Links whose source or target is not in the node list are dropped.
    pub fn build(graph: &Graph) -> Self {
        let mut adj = Self::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            adj.intern(&node.id);
        }

        let mut dropped = 0;
        for link in &graph.links {
            let source = link.source.id().and_then(|id| adj.id(id));
            let target = link.target.id().and_then(|id| adj.id(id));
            match (source, target) {
                (Some(source), Some(target)) => adj.successors.get_mut(source).push(target),
                _ => {
                    log::trace!(
                        "dropping link {:?} -> {:?}",
                        link.source.id(),
                        link.target.id()
                    );
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            log::debug!("dropped {dropped} links with unknown endpoints");
        }

        let names = &adj.names;
        for succ in adj.successors.iter_mut() {
            succ.sort_by(|a, b| names.get(*a).cmp(names.get(*b)));
        }
        adj
    }

    /// Get the interned id for `name`, adding it as a node with no successors
    /// if it isn't already present.
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.names.push(name.to_owned());
        self.successors.push(Vec::new());
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Look up the interned id for `name`.
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// The id string of node `id`.
    pub fn name(&self, id: NodeId) -> &str {
        self.names.get(id)
    }

    /// Successors of `id`, sorted by name.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.successors.get(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All nodes reachable from `start` by following links forward, including `start`.
    pub fn reachable_from(&self, start: NodeId) -> HashSet<NodeId> {
        let mut seen = HashSet::default();
        let mut queue = VecDeque::with_capacity(self.len());
        seen.insert(start);
        queue.push_back(start);
        while let Some(id) = queue.pop_front() {
            for &next in self.successors(id) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}
