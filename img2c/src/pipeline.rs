use crate::{
    error::*,
    maps::{CharMap, map_to_char},
    render::{CanvasRenderer, RenderStyle},
    sampler::{CellSize, GridSampler},
};
use image::{DynamicImage, RgbaImage};
use std::io::Read;

/// Row-major grid of the characters chosen for each cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    pub columns: u32,
    pub rows: u32,
    pub chars: Vec<char>,
}

impl CharGrid {
    pub fn new(columns: u32, rows: u32, chars: Vec<char>) -> Self {
        debug_assert_eq!(chars.len(), columns as usize * rows as usize);
        Self {
            columns,
            rows,
            chars,
        }
    }

    /// Every row followed by `\n`. A grid with rows but no columns gives one
    /// empty line per row; a grid with no rows gives an empty string.
    pub fn to_ascii(&self) -> String {
        let capacity = (self.columns as usize + 1) * self.rows as usize;
        let mut output = String::with_capacity(capacity);
        for y in 0..self.rows as usize {
            let start = y * self.columns as usize;
            output.extend(&self.chars[start..start + self.columns as usize]);
            output.push('\n');
        }
        output
    }
}

/// Result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub ascii: String,
    pub image: Option<RgbaImage>,
}

pub struct AsciiPipeline {
    /// The character lookup table, densest glyph first.
    pub palette: Vec<char>,
    /// Size of the source rectangle behind each character.
    pub cell: CellSize,
    /// When set, the character grid is also drawn onto an image.
    pub style: Option<RenderStyle>,
    renderer: CanvasRenderer,
}

impl AsciiPipeline {
    pub fn new(char_map: CharMap, cell: CellSize, style: Option<RenderStyle>) -> Self {
        Self {
            palette: char_map.chars(),
            cell,
            style,
            renderer: CanvasRenderer::default(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.palette.is_empty() {
            return Err(Error::Configuration(ERROR_NO_CHARS.to_string()));
        }
        self.cell.validate()
    }

    /// Validates the settings, then reads and decodes `source` and converts it.
    /// `source` is not touched when validation fails, and it is dropped
    /// before this returns on every path.
    pub fn convert<R: Read>(&self, mut source: R) -> Result<Conversion, Error> {
        self.validate()?;
        let mut buf = Vec::new();
        source.read_to_end(&mut buf)?;
        drop(source);
        let img = image::load_from_memory(&buf).map_err(Error::Decode)?;
        self.convert_image(&img)
    }

    pub fn convert_image(&self, img: &DynamicImage) -> Result<Conversion, Error> {
        self.validate()?;
        let grid = self.to_grid(img)?;
        let image = self.style.as_ref().map(|style| {
            self.renderer
                .render(&grid, self.cell, (img.width(), img.height()), style)
        });
        Ok(Conversion {
            ascii: grid.to_ascii(),
            image,
        })
    }

    pub fn to_grid(&self, img: &DynamicImage) -> Result<CharGrid, Error> {
        let sampler = GridSampler::new(img, self.cell)?;
        let (columns, rows) = sampler.pieces();
        let chars = sampler
            .map(|cell| map_to_char(&self.palette, cell.brightness))
            .collect();
        Ok(CharGrid::new(columns, rows, chars))
    }
}

/// One-shot conversion of an encoded image.
pub fn convert<R: Read>(
    source: R,
    char_map: CharMap,
    cell: CellSize,
    style: Option<RenderStyle>,
) -> Result<Conversion, Error> {
    AsciiPipeline::new(char_map, cell, style).convert(source)
}
