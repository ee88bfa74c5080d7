use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;

use util::{HashMap, HashSet};

/// A node in a [`Graph`]; only its id matters to the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

/// One end of a [`Link`].
///
/// Graph-drawing frontends often replace link endpoints with the node objects
/// themselves, so an endpoint is either a bare id or an object carrying an `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Id(String),
    Object {
        #[serde(default, deserialize_with = "string_id")]
        id: Option<String>,
    },
}

/// Keep a string `id`; any other value (number, null, nested object) names no node.
fn string_id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Str(String),
        Other(serde::de::IgnoredAny),
    }
    Ok(match RawId::deserialize(de)? {
        RawId::Str(id) => Some(id),
        RawId::Other(_) => None,
    })
}

impl Endpoint {
    /// The node id this endpoint refers to, if it names one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Object { id } => id.as_deref(),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Self::Id(id.to_owned())
    }
}

/// A directed link from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,
}

impl Link {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Wire-level graph: node list plus directed links.
/// Links may reference ids that are not in `nodes`; those are ignored by [`crate::Adjacency`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Graph {
    /// Build a graph from plain id slices.
    pub fn from_edges(nodes: &[&str], links: &[(&str, &str)]) -> Self {
        Self {
            nodes: nodes
                .iter()
                .map(|id| Node {
                    id: (*id).to_owned(),
                })
                .collect(),
            links: links.iter().map(|(s, t)| Link::new(s, t)).collect(),
        }
    }

    /// True if `id` is in the node list.
    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// True if every node can reach every other node when links are followed
    /// in either direction. Links with dangling endpoints are ignored.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.nodes.first() else {
            return true;
        };

        let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::default();
        for node in &self.nodes {
            neighbors.entry(node.id.as_str()).or_default();
        }
        for link in &self.links {
            if let (Some(s), Some(t)) = (link.source.id(), link.target.id()) {
                if neighbors.contains_key(s) && neighbors.contains_key(t) {
                    neighbors.entry(s).or_default().push(t);
                    neighbors.entry(t).or_default().push(s);
                }
            }
        }

        let mut seen: HashSet<&str> = HashSet::default();
        let mut queue = VecDeque::with_capacity(neighbors.len());
        seen.insert(first.id.as_str());
        queue.push_back(first.id.as_str());
        while let Some(id) = queue.pop_front() {
            for &next in &neighbors[id] {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len() == neighbors.len()
    }
}
