use std::fmt;

use gridpath_core::Pos;

/// An ordered run of cells from start to end, both inclusive.
///
/// A path is never empty: when start and end coincide it holds that single
/// cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    pub(crate) fn from_cells(cells: Vec<Pos>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of single-cell moves, i.e. `len() - 1`.
    #[inline]
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    #[inline]
    pub fn end(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    /// Whether every consecutive pair of cells shares a side.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.cells.iter()
    }

    pub fn into_vec(self) -> Vec<Pos> {
        self.cells
    }
}

impl AsRef<[Pos]> for Path {
    fn as_ref(&self) -> &[Pos] {
        &self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_cell_list() {
        let p = Path::from_cells(vec![Pos::new(0, 0), Pos::new(0, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"row":0,"col":0},{"row":0,"col":1}]"#);
    }
}
