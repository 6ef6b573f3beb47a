//! Image to character-grid conversion.
//!
//! An image is cut into fixed-size cells, each cell's mean brightness picks a
//! character from a palette, and the rows of characters form the ASCII art.
//! The grid can also be drawn back onto an image with a bitmap font.

pub mod color;
pub mod encode;
pub mod error;
pub mod font;
pub mod maps;
pub mod pipeline;
pub mod render;
pub mod sampler;
pub mod source;

pub use error::Error;
pub use image;
pub use pipeline::{AsciiPipeline, CharGrid, Conversion, convert};
pub use render::RenderStyle;
pub use sampler::CellSize;
