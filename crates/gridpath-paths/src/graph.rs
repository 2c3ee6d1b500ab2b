//! Graph construction from a [`MarkerGrid`].
//!
//! Every traversable cell becomes a [`Node`] stored in a flat arena and
//! addressed by [`NodeId`]. Blocked cells get no node. Adjacency is
//! 4-directional and symmetric.

use gridpath_core::error::Result;
use gridpath_core::{Bounds, ConfigError, Marker, MarkerGrid, Pos};

use crate::bfs::bfs_map;
use crate::traits::Pather;

/// Index of a node in a [`Graph`]'s arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One traversable grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) pos: Pos,
    /// Row-major cell index; unique per node and used for tie-breaking.
    pub(crate) label: usize,
    /// Best known distance from start. `None` until reached.
    pub(crate) dist: Option<u32>,
    /// Node the current best distance was reached from. Only used to
    /// reconstruct the path after the search.
    pub(crate) parent: Option<NodeId>,
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn dist(&self) -> Option<u32> {
        self.dist
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// The node arena plus the two endpoints.
///
/// Structure never changes after construction; only node distances and
/// parents are rewritten by a search.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    lookup: Vec<Option<NodeId>>,
    bounds: Bounds,
    start: NodeId,
    end: NodeId,
}

impl Graph {
    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a graph holds at least its start node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NodeId {
        self.end
    }

    #[inline]
    pub fn start_pos(&self) -> Pos {
        self.node(self.start).pos
    }

    #[inline]
    pub fn end_pos(&self) -> Pos {
        self.node(self.end).pos
    }

    /// The grid extent this graph was built from.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Node at `p`, or `None` if `p` is blocked or out of bounds.
    #[inline]
    pub fn id_of(&self, p: Pos) -> Option<NodeId> {
        self.bounds.index(p).and_then(|i| self.lookup[i])
    }

    /// Whether `p` can be reached from the start by any route.
    pub fn is_reachable(&self, p: Pos) -> bool {
        match self.id_of(p) {
            Some(id) => bfs_map(self, self.start)[id.index()].is_some(),
            None => false,
        }
    }

    /// Restore the initial search state: start at distance 0, every other
    /// node unreached, no parents.
    pub fn reset(&mut self) {
        let start = self.start;
        for (i, n) in self.nodes.iter_mut().enumerate() {
            n.dist = (i == start.index()).then_some(0);
            n.parent = None;
        }
    }
}

impl Pather for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn neighbors(&self, id: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend_from_slice(&self.nodes[id.index()].neighbors);
    }
}

/// Turns a [`MarkerGrid`] into a [`Graph`].
pub struct GraphBuilder;

impl GraphBuilder {
    /// Build a graph using the grid's own start and end markers.
    ///
    /// The grid must hold exactly one [`Marker::Start`] and exactly one
    /// [`Marker::End`].
    pub fn build(grid: &MarkerGrid) -> Result<Graph> {
        let starts = grid.find(Marker::Start);
        let ends = grid.find(Marker::End);
        let start = match starts.as_slice() {
            [] => return Err(ConfigError::MissingStart),
            [p] => *p,
            _ => {
                return Err(ConfigError::MultipleStarts {
                    count: starts.len(),
                });
            }
        };
        let end = match ends.as_slice() {
            [] => return Err(ConfigError::MissingEnd),
            [p] => *p,
            _ => return Err(ConfigError::MultipleEnds { count: ends.len() }),
        };
        Self::assemble(grid, start, end)
    }

    /// Build a graph with explicit endpoints, ignoring start / end markers.
    ///
    /// `start` and `end` may coincide. Both must be in bounds and not
    /// blocked.
    pub fn with_endpoints(grid: &MarkerGrid, start: Pos, end: Pos) -> Result<Graph> {
        for p in [start, end] {
            match grid.at(p) {
                None => {
                    return Err(ConfigError::OutOfBounds {
                        pos: p,
                        side: grid.side(),
                    });
                }
                Some(Marker::Blocked) => return Err(ConfigError::BlockedEndpoint { pos: p }),
                Some(_) => {}
            }
        }
        Self::assemble(grid, start, end)
    }

    fn assemble(grid: &MarkerGrid, start: Pos, end: Pos) -> Result<Graph> {
        let bounds = grid.bounds();
        let mut lookup: Vec<Option<NodeId>> = vec![None; bounds.len()];
        let mut nodes: Vec<Node> = Vec::new();

        for (label, (p, m)) in grid.iter().enumerate() {
            if !m.is_traversable() {
                continue;
            }
            lookup[label] = Some(NodeId(nodes.len() as u32));
            nodes.push(Node {
                pos: p,
                label,
                dist: (p == start).then_some(0),
                parent: None,
                neighbors: Vec::with_capacity(4),
            });
        }

        // Each traversable pair is visited once from either side, so every
        // edge lands in both neighbour lists.
        for node in nodes.iter_mut() {
            for q in node.pos.neighbors_4(bounds.side()) {
                if let Some(id) = bounds.index(q).and_then(|i| lookup[i]) {
                    node.neighbors.push(id);
                }
            }
        }

        let id = |p: Pos| {
            bounds
                .index(p)
                .and_then(|i| lookup[i])
                .ok_or(ConfigError::BlockedEndpoint { pos: p })
        };
        let start_id = id(start)?;
        let end_id = id(end)?;

        let graph = Graph {
            nodes,
            lookup,
            bounds,
            start: start_id,
            end: end_id,
        };
        log::debug!(
            "built {} graph: {} nodes, {} edges, start {start}, end {end}",
            bounds,
            graph.len(),
            graph.edge_count(),
        );
        Ok(graph)
    }
}
