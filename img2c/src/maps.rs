/// Character palettes, densest glyph first. With light ink on a dark
/// background the first entry stands for the brightest cells and the last
/// one for the darkest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharMap {
    Default,
    Classic,
    Detailed,
    Gradient,
    BlackWhite,
    Custom(Vec<char>),
}

impl CharMap {
    pub fn chars(self) -> Vec<char> {
        match self {
            CharMap::Default => DEFAULT.chars().collect(),
            CharMap::Classic => CLASSIC.chars().collect(),
            CharMap::Detailed => DETAILED.chars().collect(),
            CharMap::Gradient => GRADIENT.chars().collect(),
            CharMap::BlackWhite => BLACKWHITE.chars().collect(),
            CharMap::Custom(chars) => chars,
        }
    }

    /// One palette entry per `char` of `chars`, duplicates and order kept.
    pub fn custom(chars: &str) -> Self {
        Self::Custom(chars.chars().collect())
    }
}

/// Picks the palette entry for a cell brightness in `[0, 255]`.
///
/// The brightness is quantized into `palette.len()` equal buckets and the
/// bucket index is inverted, so brightness 0 yields the last entry and
/// brightness 255 the first. `palette` must not be empty.
pub fn map_to_char(palette: &[char], brightness: f64) -> char {
    let len = palette.len();
    let brightness = brightness.clamp(0.0, u8::MAX as f64);
    let mut index = (brightness * len as f64) as usize >> 8;
    if index == len {
        index -= 1;
    }
    palette[len - index - 1]
}

/// The palette used when the caller does not supply one.
pub const DEFAULT: &str = "M80V1i:*|, "; // 11 chars

// ASCII-127 Only
const CLASSIC: &str = r##"@%#*+=-:. "##; // 10 chars
const DETAILED: &str = r##"$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/|()1{}[]?-_+~i!lI;:,"^`'. "##; // 67 chars

// Block elements
const GRADIENT: &str = r#"█▓▒░ "#; // 5 chars
const BLACKWHITE: &str = r#"█ "#; // 2 chars
