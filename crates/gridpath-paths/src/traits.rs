use crate::graph::NodeId;

/// Minimal search interface: a fixed node set with neighbour enumeration.
pub trait Pather {
    /// Number of nodes. Valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Append neighbours of `id` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, id: NodeId, buf: &mut Vec<NodeId>);
}
