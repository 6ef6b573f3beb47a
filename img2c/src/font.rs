//! Fixed monospace bitmap glyphs used to draw characters onto a canvas.
use font8x8::UnicodeFonts;

/// A rasterized glyph: a `width x height` ink mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    mask: Vec<bool>,
}

impl Glyph {
    pub fn from_mask(width: u32, height: u32, mask: Vec<bool>) -> Self {
        debug_assert_eq!(mask.len(), (width * height) as usize);
        Self {
            width,
            height,
            mask,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_ink(&self, gx: u32, gy: u32) -> bool {
        gx < self.width && gy < self.height && self.mask[(gy * self.width + gx) as usize]
    }

    /// Offsets of every ink pixel, row-major.
    pub fn ink(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(i, _)| (i as u32 % self.width, i as u32 / self.width))
    }
}

/// A bitmap font. Each [`Glyph`] carries its own pixel size.
pub trait GlyphSet: Sync {
    fn glyph(&self, ch: char) -> Glyph;
}

/// The public-domain 8x8 font from the `font8x8` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font8x8;

impl Font8x8 {
    fn lookup(ch: char) -> Option<[u8; 8]> {
        font8x8::BASIC_FONTS
            .get(ch)
            .or_else(|| font8x8::LATIN_FONTS.get(ch))
            .or_else(|| font8x8::BOX_FONTS.get(ch))
            .or_else(|| font8x8::BLOCK_FONTS.get(ch))
            .or_else(|| font8x8::GREEK_FONTS.get(ch))
    }
}

impl GlyphSet for Font8x8 {
    fn glyph(&self, ch: char) -> Glyph {
        let rows = Self::lookup(ch)
            .or_else(|| Self::lookup('?'))
            .unwrap_or([0; 8]);
        // bit 0 is the leftmost pixel of a row
        let mask = rows
            .iter()
            .flat_map(|bits| (0..8u8).map(move |gx| (*bits >> gx) & 1 == 1))
            .collect();
        Glyph::from_mask(8, 8, mask)
    }
}
