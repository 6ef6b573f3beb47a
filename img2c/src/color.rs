//! Named colors for the rendered canvas.
use image::Rgba;
use std::collections::HashMap;

/// Color returned for names missing from a table.
pub const UNKNOWN_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Immutable name to color lookup. Callers own their table and pass it to
/// whatever resolves color names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: HashMap<String, Rgba<u8>>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::from_entries([
            ("black", Rgba([0, 0, 0, 255])),
            ("gray", Rgba([140, 140, 140, 255])),
            ("red", Rgba([255, 0, 0, 255])),
            ("green", Rgba([0, 128, 0, 255])),
            ("blue", Rgba([0, 0, 255, 255])),
        ])
    }
}

impl ColorTable {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Rgba<u8>)>) -> Self {
        Self {
            colors: entries
                .into_iter()
                .map(|(name, color)| (name.to_string(), color))
                .collect(),
        }
    }

    /// Copy of this table with `name` added or replaced.
    pub fn with_color(&self, name: &str, color: Rgba<u8>) -> Self {
        let mut colors = self.colors.clone();
        colors.insert(name.to_string(), color);
        Self { colors }
    }

    /// Exact, case-sensitive lookup; unknown names give [`UNKNOWN_COLOR`].
    pub fn resolve(&self, name: &str) -> Rgba<u8> {
        match self.colors.get(name) {
            Some(color) => *color,
            None => {
                log::debug!("unknown color {name:?}, using transparent black");
                UNKNOWN_COLOR
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
