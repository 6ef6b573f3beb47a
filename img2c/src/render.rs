use image::{Pixel, Rgba, RgbaImage};

use crate::{
    font::{Font8x8, GlyphSet},
    pipeline::CharGrid,
    sampler::CellSize,
};

/// Colors used when drawing a character grid onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub background: Rgba<u8>,
    pub ink: Rgba<u8>,
}

/// Draws a [`CharGrid`] back into a raster using a bitmap font.
pub struct CanvasRenderer<G: GlyphSet = Font8x8> {
    glyphs: G,
}

impl Default for CanvasRenderer<Font8x8> {
    fn default() -> Self {
        Self::new(Font8x8)
    }
}

impl<G: GlyphSet> CanvasRenderer<G> {
    pub fn new(glyphs: G) -> Self {
        Self { glyphs }
    }

    /// Renders `grid` onto a new `width x height` canvas.
    ///
    /// The canvas is filled with the background, then each glyph is painted
    /// in ink with its top-left corner at the cell's top-left pixel. Glyphs
    /// larger than a cell spill into the neighbouring cells and are clipped
    /// at the canvas border.
    pub fn render(
        &self,
        grid: &CharGrid,
        cell: CellSize,
        (width, height): (u32, u32),
        style: &RenderStyle,
    ) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(width, height, style.background);
        if grid.columns == 0 {
            return canvas;
        }

        let row_ink = |(y, row): (usize, &[char])| -> Vec<(u32, u32)> {
            let offset_y = y as u32 * cell.height;
            row.iter()
                .enumerate()
                .flat_map(|(x, ch)| {
                    let offset_x = x as u32 * cell.width;
                    self.glyphs
                        .glyph(*ch)
                        .ink()
                        .map(|(gx, gy)| (offset_x + gx, offset_y + gy))
                        .collect::<Vec<_>>()
                })
                .filter(|(px, py)| *px < width && *py < height)
                .collect()
        };

        #[cfg(feature = "parallel")]
        let strokes: Vec<Vec<(u32, u32)>> = {
            use rayon::{
                iter::{IndexedParallelIterator, ParallelIterator},
                slice::ParallelSlice,
            };
            grid.chars
                .par_chunks(grid.columns as usize)
                .enumerate()
                .map(row_ink)
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let strokes: Vec<Vec<(u32, u32)>> = grid
            .chars
            .chunks(grid.columns as usize)
            .enumerate()
            .map(row_ink)
            .collect();

        // ink is composited over the canvas in row-major order
        for (px, py) in strokes.into_iter().flatten() {
            canvas.get_pixel_mut(px, py).blend(&style.ink);
        }
        canvas
    }
}
