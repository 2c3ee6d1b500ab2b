//! Crossterm rendering for gridpath.
//!
//! Draws a [`MarkerGrid`] with an optional solved [`Path`] overlaid, one row
//! per line, colouring each cell by its role. Nothing here touches the grid
//! or the path; it only reads them.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use gridpath_core::{Glyphs, Marker, MarkerGrid};
use gridpath_paths::Path;

/// What a drawn cell represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Cell(Marker),
    /// An intermediate cell of the solved path.
    Path,
}

/// Foreground colour per role. `None` prints the glyph unstyled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub start: Option<Color>,
    pub end: Option<Color>,
    pub open: Option<Color>,
    pub blocked: Option<Color>,
    pub path: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: Some(Color::Green),
            end: Some(Color::Red),
            open: Some(Color::DarkGrey),
            blocked: Some(Color::Grey),
            path: Some(Color::Yellow),
        }
    }
}

impl Palette {
    /// No colours at all; output matches [`MarkerGrid::render`].
    pub const fn plain() -> Self {
        Self {
            start: None,
            end: None,
            open: None,
            blocked: None,
            path: None,
        }
    }

    pub const fn color(&self, role: Role) -> Option<Color> {
        match role {
            Role::Cell(Marker::Start) => self.start,
            Role::Cell(Marker::End) => self.end,
            Role::Cell(Marker::Open) => self.open,
            Role::Cell(Marker::Blocked) => self.blocked,
            Role::Path => self.path,
        }
    }
}

/// Writes styled grids to any [`Write`] sink.
#[derive(Clone, Debug, Default)]
pub struct TermPrinter {
    pub glyphs: Glyphs,
    pub palette: Palette,
}

impl TermPrinter {
    pub fn new(glyphs: Glyphs, palette: Palette) -> Self {
        Self { glyphs, palette }
    }

    /// Queue the whole grid, then flush once.
    pub fn print<W: Write>(
        &self,
        out: &mut W,
        grid: &MarkerGrid,
        path: Option<&Path>,
    ) -> io::Result<()> {
        let side = grid.side();
        let mut on_path = vec![false; grid.bounds().len()];
        if let Some(cells) = path.map(Path::cells).filter(|c| c.len() > 2) {
            for &p in &cells[1..cells.len() - 1] {
                if let Some(i) = grid.bounds().index(p) {
                    on_path[i] = true;
                }
            }
        }

        for (i, (p, m)) in grid.iter().enumerate() {
            let (role, ch) = if on_path[i] {
                (Role::Path, self.glyphs.path)
            } else {
                (Role::Cell(m), self.glyphs.glyph(m))
            };
            match self.palette.color(role) {
                Some(color) => {
                    if matches!(role, Role::Path | Role::Cell(Marker::Start | Marker::End)) {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    queue!(out, SetForegroundColor(color), Print(ch), ResetColor)?;
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
                None => queue!(out, Print(ch))?,
            }
            if p.col + 1 == side {
                queue!(out, Print('\n'))?;
            }
        }

        out.flush()
    }
}
