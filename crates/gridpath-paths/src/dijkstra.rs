//! Uniform-cost shortest-path search over a [`Graph`].
//!
//! Every edge costs 1. Open nodes live in a binary heap with lazy
//! invalidation: a relaxed node is pushed again with its lower distance and
//! the superseded entry is skipped when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId};
use crate::path::Path;
use crate::traits::Pather;

/// Heap key, ordered by `(dist, label)` so the nearest node pops first and
/// ties go to the lowest row-major label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct HeapEntry {
    id: NodeId,
    dist: u32,
    label: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters from the most recent [`PathSearch::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes extracted and settled.
    pub settled: usize,
    /// Entries pushed onto the heap.
    pub pushed: usize,
    /// Popped entries discarded as superseded.
    pub stale: usize,
}

/// Dijkstra search engine.
///
/// Owns its heap, settled set and neighbour buffer so that running several
/// searches with the same engine reuses their allocations. Engines share
/// nothing with each other.
#[derive(Debug, Default)]
pub struct PathSearch {
    open: BinaryHeap<HeapEntry>,
    settled: Vec<bool>,
    nbuf: Vec<NodeId>,
    stats: SearchStats,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a shortest path from the graph's start to its end.
    ///
    /// Resets the graph's distances first, so repeated runs on the same
    /// graph agree. Returns `None` when the end cannot be reached. On return
    /// the end node's distance and parent chain are final.
    pub fn run(&mut self, graph: &mut Graph) -> Option<Path> {
        graph.reset();
        self.open.clear();
        self.settled.clear();
        self.settled.resize(graph.len(), false);
        self.stats = SearchStats::default();

        let start = graph.start();
        let end = graph.end();
        self.push(graph, start, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // Unreached nodes never enter the heap, so running out of live
        // entries means the cheapest remaining node is unreachable.
        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };

            let ci = current.id.index();
            if self.settled[ci] || graph.nodes[ci].dist != Some(current.dist) {
                self.stats.stale += 1;
                continue;
            }
            self.settled[ci] = true;
            self.stats.settled += 1;
            log::trace!(
                "settled {} at distance {}",
                graph.nodes[ci].pos,
                current.dist
            );

            if current.id == end {
                break 'search true;
            }

            nbuf.clear();
            graph.neighbors(current.id, &mut nbuf);

            let candidate = current.dist + 1;
            for &ni in nbuf.iter() {
                if self.settled[ni.index()] {
                    continue;
                }
                let n = &mut graph.nodes[ni.index()];
                if n.dist.is_some_and(|d| candidate >= d) {
                    continue;
                }
                n.dist = Some(candidate);
                n.parent = Some(current.id);
                self.push(graph, ni, candidate);
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!(
                "no path from {} to {} ({} of {} nodes settled)",
                graph.start_pos(),
                graph.end_pos(),
                self.stats.settled,
                graph.len()
            );
            return None;
        }

        let path = reconstruct(graph, end);
        log::debug!(
            "path from {} to {}: {} moves ({} settled, {} stale)",
            path.start(),
            path.end(),
            path.moves(),
            self.stats.settled,
            self.stats.stale
        );
        Some(path)
    }

    fn push(&mut self, graph: &Graph, id: NodeId, dist: u32) {
        self.open.push(HeapEntry {
            id,
            dist,
            label: graph.nodes[id.index()].label,
        });
        self.stats.pushed += 1;
    }
}

/// Follow parent links from `end` back to the start, then reverse.
fn reconstruct(graph: &Graph, end: NodeId) -> Path {
    let mut cells = Vec::new();
    let mut cur = Some(end);
    while let Some(id) = cur {
        let n = graph.node(id);
        cells.push(n.pos);
        cur = n.parent;
    }
    cells.reverse();
    Path::from_cells(cells)
}
