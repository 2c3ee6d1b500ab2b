//! A square grid of [`Marker`]s.
//!
//! [`MarkerGrid`] is the external input of the solver. It is immutable once
//! built: rendering a solved path produces a new string and leaves the grid
//! untouched.

use std::str::FromStr;

use crate::cell::Marker;
use crate::error::{ConfigError, Result};
use crate::geom::{Bounds, Pos};
use crate::glyphs::Glyphs;

/// A validated, square, row-major grid of markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerGrid {
    cells: Vec<Marker>,
    bounds: Bounds,
}

impl MarkerGrid {
    /// Build a grid from rows of markers.
    ///
    /// Fails if there are no rows or if any row's length differs from the
    /// number of rows. Start / end uniqueness is checked at graph-build time.
    pub fn new(rows: Vec<Vec<Marker>>) -> Result<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(ConfigError::Empty);
        }
        let mut cells = Vec::with_capacity(side * side);
        for (row, markers) in rows.into_iter().enumerate() {
            if markers.len() != side {
                return Err(ConfigError::NotSquare {
                    row,
                    len: markers.len(),
                    expected: side,
                });
            }
            cells.extend(markers);
        }
        Ok(Self {
            cells,
            bounds: Bounds::square(side),
        })
    }

    /// Parse a grid from text, one row per non-blank line.
    ///
    /// Leading and trailing whitespace on each line is ignored unless it is
    /// itself a glyph; every other character must decode through `glyphs`.
    pub fn parse(text: &str, glyphs: &Glyphs) -> Result<Self> {
        glyphs.validate()?;
        let rows = text
            .lines()
            .map(|line| {
                line.trim_matches(|c: char| c.is_whitespace() && glyphs.marker(c).is_none())
            })
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        glyphs.marker(ch).ok_or(ConfigError::UnknownMarker {
                            ch,
                            pos: Pos::new(row, col),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.bounds.side()
    }

    /// Marker at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Marker> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Row-major iterator over `(position, marker)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Marker)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// All positions holding `marker`, in row-major order.
    pub fn find(&self, marker: Marker) -> Vec<Pos> {
        self.iter()
            .filter(|&(_, m)| m == marker)
            .map(|(p, _)| p)
            .collect()
    }

    /// Render the grid as text, one line per row.
    ///
    /// When `path` is given, its intermediate cells (everything except the
    /// first and last entry) are drawn with [`Glyphs::path`].
    pub fn render(&self, glyphs: &Glyphs, path: Option<&[Pos]>) -> String {
        let mut overlay = vec![false; self.bounds.len()];
        if let Some(cells) = path.filter(|cells| cells.len() > 2) {
            for &p in &cells[1..cells.len() - 1] {
                if let Some(i) = self.bounds.index(p) {
                    overlay[i] = true;
                }
            }
        }

        let side = self.side();
        let mut out = String::with_capacity(side * (side + 1));
        for (i, (p, m)) in self.iter().enumerate() {
            let ch = if overlay[i] {
                glyphs.path
            } else {
                glyphs.glyph(m)
            };
            out.push(ch);
            if p.col + 1 == side {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for MarkerGrid {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &Glyphs::default())
    }
}

impl std::fmt::Display for MarkerGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&Glyphs::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "eX.X.\n.X...\n.sXXX\n..XX.\n.....\n";

    #[test]
    fn parse_sample() {
        let g: MarkerGrid = SAMPLE.parse().unwrap();
        assert_eq!(g.side(), 5);
        assert_eq!(g.at(Pos::new(0, 0)), Some(Marker::End));
        assert_eq!(g.at(Pos::new(2, 1)), Some(Marker::Start));
        assert_eq!(g.at(Pos::new(0, 1)), Some(Marker::Blocked));
        assert_eq!(g.at(Pos::new(4, 4)), Some(Marker::Open));
        assert_eq!(g.at(Pos::new(5, 0)), None);
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let g: MarkerGrid = "\n  s.\n\n  .e  \n".parse().unwrap();
        assert_eq!(g.side(), 2);
        assert_eq!(g.find(Marker::End), vec![Pos::new(1, 1)]);
    }

    #[test]
    fn parse_rejects_unknown_marker() {
        let err = "s.\n.?".parse::<MarkerGrid>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownMarker {
                ch: '?',
                pos: Pos::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_non_square() {
        let err = "s..\n.e.".parse::<MarkerGrid>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotSquare {
                row: 0,
                len: 3,
                expected: 2
            }
        );
        let err = "s.\n.e.".parse::<MarkerGrid>().unwrap_err();
        assert!(matches!(err, ConfigError::NotSquare { row: 1, .. }));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<MarkerGrid>(), Err(ConfigError::Empty));
        assert_eq!("  \n \n".parse::<MarkerGrid>(), Err(ConfigError::Empty));
    }

    #[test]
    fn parse_with_custom_glyphs() {
        let glyphs = Glyphs {
            start: 'A',
            end: 'B',
            open: ' ',
            blocked: '#',
            path: '*',
        };
        let g = MarkerGrid::parse("A# \n# #\n #B", &glyphs).unwrap();
        assert_eq!(g.side(), 3);
        assert_eq!(g.at(Pos::new(0, 0)), Some(Marker::Start));
        assert_eq!(g.at(Pos::new(1, 1)), Some(Marker::Open));
        assert_eq!(g.at(Pos::new(2, 0)), Some(Marker::Open));
        assert_eq!(g.find(Marker::Blocked).len(), 4);
    }

    #[test]
    fn parse_rejects_ambiguous_glyphs() {
        let glyphs = Glyphs {
            end: 's',
            ..Glyphs::default()
        };
        assert_eq!(
            MarkerGrid::parse("s", &glyphs),
            Err(ConfigError::DuplicateGlyph { ch: 's' })
        );
    }

    #[test]
    fn render_round_trips_without_path() {
        let g: MarkerGrid = SAMPLE.parse().unwrap();
        assert_eq!(g.render(&Glyphs::default(), None), SAMPLE);
        assert_eq!(g.to_string(), SAMPLE);
    }

    #[test]
    fn render_marks_only_intermediate_cells() {
        let g: MarkerGrid = "s..\n...\n..e".parse().unwrap();
        let path = [
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(0, 2),
            Pos::new(1, 2),
            Pos::new(2, 2),
        ];
        let out = g.render(&Glyphs::default(), Some(&path));
        assert_eq!(out, "soo\n..o\n..e\n");
        // Grid itself is unchanged.
        assert_eq!(g.at(Pos::new(0, 1)), Some(Marker::Open));
    }

    #[test]
    fn render_short_path_draws_nothing_extra() {
        let g: MarkerGrid = "se\n..".parse().unwrap();
        let path = [Pos::new(0, 0), Pos::new(0, 1)];
        assert_eq!(g.render(&Glyphs::default(), Some(&path)), "se\n..\n");
    }
}
