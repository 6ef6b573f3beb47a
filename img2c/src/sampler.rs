//! Splits an image into a regular grid of cells and measures the mean
//! brightness of each one.
use crate::error::*;
use image::{DynamicImage, ImageBuffer, Rgb};

type Rgb16Image = ImageBuffer<Rgb<u16>, Vec<u16>>;

/// Size of one grid cell in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Configuration(ERROR_DIMENSIONS.to_string()));
        }
        Ok(())
    }

    /// Number of whole cells that fit in an image of the given size.
    /// Remainder strips on the right and bottom are dropped.
    pub fn pieces(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.width, height / self.height)
    }
}

/// Brightness of one cell, with its grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub x: u32,
    pub y: u32,
    pub brightness: f64,
}

/// Row-major iterator over the cells of an image.
pub struct GridSampler {
    pixels: Rgb16Image,
    cell: CellSize,
    pieces_x: u32,
    pieces_y: u32,
    next: u64,
}

impl GridSampler {
    pub fn new(image: &DynamicImage, cell: CellSize) -> Result<Self, Error> {
        cell.validate()?;
        let (pieces_x, pieces_y) = cell.pieces(image.width(), image.height());
        log::debug!(
            "sampling {}x{} image into {pieces_x}x{pieces_y} cells of {}x{}",
            image.width(),
            image.height(),
            cell.width,
            cell.height
        );
        Ok(Self {
            pixels: image.to_rgb16(),
            cell,
            pieces_x,
            pieces_y,
            next: 0,
        })
    }

    /// `(columns, rows)` of the grid.
    pub fn pieces(&self) -> (u32, u32) {
        (self.pieces_x, self.pieces_y)
    }

    fn total(&self) -> u64 {
        self.pieces_x as u64 * self.pieces_y as u64
    }

    fn cell_brightness(&self, x: u32, y: u32) -> f64 {
        let (offset_x, offset_y) = (x * self.cell.width, y * self.cell.height);
        let mut sum: u64 = 0;
        for py in offset_y..offset_y + self.cell.height {
            for px in offset_x..offset_x + self.cell.width {
                let Rgb([r, g, b]) = *self.pixels.get_pixel(px, py);
                sum += (r >> 8) as u64 + (g >> 8) as u64 + (b >> 8) as u64;
            }
        }
        let count = self.cell.width as f64 * self.cell.height as f64;
        sum as f64 / 3.0 / count
    }
}

impl Iterator for GridSampler {
    type Item = CellSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }
        let x = (self.next % self.pieces_x as u64) as u32;
        let y = (self.next / self.pieces_x as u64) as u32;
        self.next += 1;
        Some(CellSample {
            x,
            y,
            brightness: self.cell_brightness(x, y),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total() - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridSampler {}
