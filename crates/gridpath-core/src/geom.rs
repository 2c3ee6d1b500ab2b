//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Positions are always exposed as `(row, col)` pairs. The flat row-major
//! index produced by [`Bounds::index`] is an internal addressing scheme for
//! arena-style storage and never leaves the crates that use it.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow downward, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The in-bounds cardinal neighbours of `self` in a square grid of side
    /// `side`, in the order up, right, down, left.
    pub fn neighbors_4(self, side: usize) -> impl Iterator<Item = Pos> {
        let up = self.row.checked_sub(1).map(|r| Pos::new(r, self.col));
        let right = (self.col + 1 < side).then(|| Pos::new(self.row, self.col + 1));
        let down = (self.row + 1 < side).then(|| Pos::new(self.row + 1, self.col));
        let left = self.col.checked_sub(1).map(|c| Pos::new(self.row, c));
        [up, right, down, left].into_iter().flatten()
    }

    /// Manhattan (taxicab) distance.
    #[inline]
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` shares a side with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Pos> for (usize, usize) {
    fn from(p: Pos) -> Self {
        (p.row, p.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a square grid of side `side`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    side: usize,
}

impl Bounds {
    /// Create bounds for a `side` x `side` grid.
    #[inline]
    pub const fn square(side: usize) -> Self {
        Self { side }
    }

    /// Side length.
    #[inline]
    pub const fn side(self) -> usize {
        self.side
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.side * self.side
    }

    /// Whether the grid has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.side == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub const fn contains(self, p: Pos) -> bool {
        p.row < self.side && p.col < self.side
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        self.contains(p).then(|| p.row * self.side + p.col)
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< len()`.
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        Pos::new(idx / self.side, idx % self.side)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.side, self.side)
    }
}

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.bounds.len().saturating_sub(self.next);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for BoundsIter {}
