use std::collections::VecDeque;

use crate::graph::NodeId;
use crate::traits::Pather;

/// Compute a breadth-first distance map from `source`.
///
/// Each step has cost 1. The returned vector is indexed by [`NodeId::index`];
/// unreached nodes hold `None`.
pub fn bfs_map<P: Pather>(pather: &P, source: NodeId) -> Vec<Option<u32>> {
    let mut dist = vec![None; pather.node_count()];
    if source.index() >= dist.len() {
        return dist;
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    dist[source.index()] = Some(0);
    queue.push_back(source);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(ci) = queue.pop_front() {
        let Some(current) = dist[ci.index()] else {
            continue;
        };
        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);
        for &ni in &nbuf {
            if dist[ni.index()].is_some() {
                continue;
            }
            dist[ni.index()] = Some(current + 1);
            queue.push_back(ni);
        }
    }
    dist
}
