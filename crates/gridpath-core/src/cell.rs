//! The [`Marker`] type — what a single grid cell holds.

/// Role of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Marker {
    /// Where the search begins.
    Start,
    /// Where the search must arrive.
    End,
    /// Traversable floor.
    #[default]
    Open,
    /// Impassable; gets no graph node.
    Blocked,
}

impl Marker {
    /// All markers, in declaration order.
    pub const ALL: [Marker; 4] = [Marker::Start, Marker::End, Marker::Open, Marker::Blocked];

    /// Whether a path may pass through a cell with this marker.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Marker::Blocked)
    }

    /// Lowercase name, as used in error and log output.
    pub const fn name(self) -> &'static str {
        match self {
            Marker::Start => "start",
            Marker::End => "end",
            Marker::Open => "open",
            Marker::Blocked => "blocked",
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn markers_use_lowercase_names() {
        let json = serde_json::to_string(&Marker::ALL).unwrap();
        assert_eq!(json, r#"["start","end","open","blocked"]"#);
        let back: Vec<Marker> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Marker::ALL);
    }
}
