use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use util::HashSet;

use crate::{Graph, Link, Node};

/// Requested node counts are clamped to `MIN_NODES..=MAX_NODES`.
pub const MIN_NODES: usize = 2;
pub const MAX_NODES: usize = 50;

/// Graphs up to this size get letter ids; larger ones get numbers.
const MAX_LETTER_IDS: usize = 26;

/// Builds random connected graphs: a random spanning tree plus a few extra links.
pub struct GraphGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl GraphGenerator<ChaCha8Rng> {
    /// Generator with reproducible output for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> GraphGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a connected graph with `requested` nodes, clamped to
    /// `MIN_NODES..=MAX_NODES`.
    pub fn generate(&mut self, requested: i64) -> Graph {
        let num_nodes = requested.clamp(MIN_NODES as i64, MAX_NODES as i64) as usize;
        let ids = node_ids(num_nodes);

        let mut links = Vec::with_capacity(num_nodes + num_nodes / 2);
        // unordered pairs already linked, as (lower, higher) index:
        let mut linked: HashSet<(usize, usize)> = HashSet::default();

        // spanning tree: attach each remaining node to a random already-attached one.
        let mut unvisited: Vec<usize> = (1..num_nodes).collect();
        let mut visited = Vec::with_capacity(num_nodes);
        visited.push(0);
        while !unvisited.is_empty() {
            let new_node = unvisited.remove(self.rng.gen_range(0..unvisited.len()));
            let hook_node = visited[self.rng.gen_range(0..visited.len())];
            links.push(Link::new(&ids[hook_node], &ids[new_node]));
            linked.insert(pair(hook_node, new_node));
            visited.push(new_node);
        }

        let extra_edges = self.rng.gen_range(0..=num_nodes / 2);
        for _ in 0..extra_edges {
            let u = self.rng.gen_range(0..num_nodes);
            let v = self.rng.gen_range(0..num_nodes);
            if u != v && linked.insert(pair(u, v)) {
                links.push(Link::new(&ids[u], &ids[v]));
            }
        }

        log::debug!(
            "generated graph with {num_nodes} nodes and {} links ({} extra)",
            links.len(),
            links.len() - (num_nodes - 1),
        );

        Graph {
            nodes: ids.into_iter().map(|id| Node { id }).collect(),
            links,
        }
    }
}

fn pair(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// "A".."Z" for small graphs, "1".."N" otherwise.
fn node_ids(num_nodes: usize) -> Vec<String> {
    if num_nodes <= MAX_LETTER_IDS {
        (b'A'..)
            .take(num_nodes)
            .map(|c| char::from(c).to_string())
            .collect()
    } else {
        (1..=num_nodes).map(|i| i.to_string()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp() {
        let mut generator = GraphGenerator::seeded(1);
        assert_eq!(MIN_NODES, generator.generate(-5).nodes.len());
        assert_eq!(MIN_NODES, generator.generate(0).nodes.len());
        assert_eq!(MAX_NODES, generator.generate(1000).nodes.len());
        assert_eq!(7, generator.generate(7).nodes.len());
    }

    #[test]
    fn test_node_ids() {
        assert_eq!(vec!["A", "B", "C"], node_ids(3));
        let letters = node_ids(26);
        assert_eq!("Z", letters[25]);
        let numbers = node_ids(27);
        assert_eq!("1", numbers[0]);
        assert_eq!("27", numbers[26]);
    }

    #[test]
    fn test_connected_for_all_sizes() {
        for seed in 0..4 {
            let mut generator = GraphGenerator::seeded(seed);
            for n in MIN_NODES..=MAX_NODES {
                let graph = generator.generate(n as i64);
                assert_eq!(n, graph.nodes.len());
                assert!(graph.is_connected(), "seed {seed}, {n} nodes not connected");
            }
        }
    }

    #[test]
    fn test_link_counts_and_no_duplicate_pairs() {
        let mut generator = GraphGenerator::seeded(42);
        for n in MIN_NODES..=MAX_NODES {
            let graph = generator.generate(n as i64);
            assert!(graph.links.len() >= n - 1);
            assert!(graph.links.len() <= n - 1 + n / 2);

            let mut pairs = HashSet::default();
            for link in &graph.links {
                let s = link.source.id().unwrap();
                let t = link.target.id().unwrap();
                assert_ne!(s, t, "self loop");
                assert!(graph.contains(s) && graph.contains(t));
                let key = if s < t { (s, t) } else { (t, s) };
                assert!(pairs.insert(key), "duplicate link between {s} and {t}");
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = GraphGenerator::seeded(7).generate(20);
        let b = GraphGenerator::seeded(7).generate(20);
        assert_eq!(a, b);
    }
}
