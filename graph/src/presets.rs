use std::fmt;
use std::str::FromStr;

use crate::{Error, Graph};

/// Example graphs that are handy for demonstrating iterative deepening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Complete binary tree of 15 nodes, A at the root.
    BalancedTree,
    /// One long branch (A..E) and one short branch (A, F, G).
    UnbalancedTree,
    /// Two overlapping cycles: A-B-C-D-A and C-D-E-F-G-C.
    CyclicGraph,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::BalancedTree,
        Preset::UnbalancedTree,
        Preset::CyclicGraph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BalancedTree => "balanced-tree",
            Self::UnbalancedTree => "unbalanced-tree",
            Self::CyclicGraph => "cyclic-graph",
        }
    }

    fn camel_name(self) -> &'static str {
        match self {
            Self::BalancedTree => "balancedTree",
            Self::UnbalancedTree => "unbalancedTree",
            Self::CyclicGraph => "cyclicGraph",
        }
    }

    pub fn graph(self) -> Graph {
        match self {
            Self::BalancedTree => Graph::from_edges(
                &[
                    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
                ],
                &[
                    ("A", "B"),
                    ("A", "C"),
                    ("B", "D"),
                    ("B", "E"),
                    ("C", "F"),
                    ("C", "G"),
                    ("D", "H"),
                    ("D", "I"),
                    ("E", "J"),
                    ("E", "K"),
                    ("F", "L"),
                    ("F", "M"),
                    ("G", "N"),
                    ("G", "O"),
                ],
            ),
            Self::UnbalancedTree => Graph::from_edges(
                &["A", "B", "C", "D", "E", "F", "G"],
                &[
                    ("A", "B"),
                    ("B", "C"),
                    ("C", "D"),
                    ("D", "E"),
                    ("A", "F"),
                    ("F", "G"),
                ],
            ),
            Self::CyclicGraph => Graph::from_edges(
                &["A", "B", "C", "D", "E", "F", "G"],
                &[
                    ("A", "B"),
                    ("B", "C"),
                    ("C", "D"),
                    ("D", "A"),
                    ("D", "E"),
                    ("E", "F"),
                    ("F", "G"),
                    ("G", "C"),
                ],
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s || p.camel_name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|p| p.name()).collect();
                Error::UnknownPreset(s.to_owned(), names.join(", "))
            })
    }
}
