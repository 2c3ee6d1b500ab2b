//! Shortest paths on square marker grids.
//!
//! Solving happens in two steps:
//!
//! - [`GraphBuilder`] turns a [`MarkerGrid`] into a [`Graph`]: one node per
//!   traversable cell, 4-directional symmetric adjacency, and the two
//!   endpoints.
//! - [`PathSearch`] runs a uniform-cost Dijkstra search over that graph and
//!   returns the start-to-end [`Path`], or `None` when the end is walled off.
//!
//! [`shortest_path`] and [`minimum_moves`] do both in one call.
//!
//! ```
//! use gridpath_core::{MarkerGrid, Pos};
//!
//! let grid: MarkerGrid = "s.X\n..X\nX.e".parse().unwrap();
//! let path = gridpath_paths::shortest_path(&grid).unwrap().unwrap();
//! assert_eq!(path.moves(), 4);
//! assert_eq!(path.end(), Pos::new(2, 2));
//! ```

mod bfs;
mod dijkstra;
mod graph;
mod path;
mod traits;

pub use bfs::bfs_map;
pub use dijkstra::{PathSearch, SearchStats};
pub use graph::{Graph, GraphBuilder, Node, NodeId};
pub use path::Path;
pub use traits::Pather;

use gridpath_core::MarkerGrid;
use gridpath_core::error::Result;

/// Build a graph from `grid` and search it.
///
/// Fails only if the grid is misconfigured; an unreachable end is
/// `Ok(None)`.
pub fn shortest_path(grid: &MarkerGrid) -> Result<Option<Path>> {
    let mut graph = GraphBuilder::build(grid)?;
    Ok(PathSearch::new().run(&mut graph))
}

/// Length of the shortest route in single-cell moves.
pub fn minimum_moves(grid: &MarkerGrid) -> Result<Option<usize>> {
    Ok(shortest_path(grid)?.map(|p| p.moves()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::ConfigError;

    #[test]
    fn one_call_solve() {
        let grid: MarkerGrid = "s..\nXX.\ne..".parse().unwrap();
        assert_eq!(minimum_moves(&grid), Ok(Some(6)));
    }

    #[test]
    fn no_route_is_not_an_error() {
        let grid: MarkerGrid = "sX\nXe".parse().unwrap();
        assert_eq!(shortest_path(&grid), Ok(None));
    }

    #[test]
    fn config_errors_surface() {
        let grid: MarkerGrid = "s.\n..".parse().unwrap();
        assert_eq!(minimum_moves(&grid), Err(ConfigError::MissingEnd));
    }
}
