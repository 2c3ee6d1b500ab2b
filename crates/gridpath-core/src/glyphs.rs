//! Character encoding for [`Marker`]s.

use crate::cell::Marker;
use crate::error::{ConfigError, Result};

/// Maps each marker (and the path overlay) to a display / input character.
///
/// The default set is `s` start, `e` end, `.` open, `X` blocked and `o` for
/// cells on a solved path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Glyphs {
    pub start: char,
    pub end: char,
    pub open: char,
    pub blocked: char,
    pub path: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            start: 's',
            end: 'e',
            open: '.',
            blocked: 'X',
            path: 'o',
        }
    }
}

impl Glyphs {
    /// The marker encoded by `ch`, if any. The path glyph decodes to nothing.
    pub fn marker(&self, ch: char) -> Option<Marker> {
        Marker::ALL.into_iter().find(|&m| self.glyph(m) == ch)
    }

    /// The character used for `marker`.
    pub const fn glyph(&self, marker: Marker) -> char {
        match marker {
            Marker::Start => self.start,
            Marker::End => self.end,
            Marker::Open => self.open,
            Marker::Blocked => self.blocked,
        }
    }

    /// Ensure no two roles share a character.
    pub fn validate(&self) -> Result<()> {
        let all = [self.start, self.end, self.open, self.blocked, self.path];
        for (i, &ch) in all.iter().enumerate() {
            if all[i + 1..].contains(&ch) {
                return Err(ConfigError::DuplicateGlyph { ch });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glyphs_decode() {
        let g = Glyphs::default();
        assert_eq!(g.marker('s'), Some(Marker::Start));
        assert_eq!(g.marker('e'), Some(Marker::End));
        assert_eq!(g.marker('.'), Some(Marker::Open));
        assert_eq!(g.marker('X'), Some(Marker::Blocked));
        assert_eq!(g.marker('o'), None);
        assert_eq!(g.marker('#'), None);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn glyph_inverts_marker() {
        let g = Glyphs::default();
        for m in Marker::ALL {
            assert_eq!(g.marker(g.glyph(m)), Some(m));
        }
    }

    #[test]
    fn duplicate_glyph_rejected() {
        let g = Glyphs {
            path: '.',
            ..Glyphs::default()
        };
        assert_eq!(g.validate(), Err(ConfigError::DuplicateGlyph { ch: '.' }));
    }
}
