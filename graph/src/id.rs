/// Index of an interned node in an [`crate::Adjacency`].
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(u32);

impl From<NodeId> for usize {
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl From<usize> for NodeId {
    fn from(val: usize) -> NodeId {
        Self(val as u32)
    }
}
