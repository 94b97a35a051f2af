//! Pixel decoding module
//!
//! Converts captured encoded image bytes into the canonical linear-color
//! float32 RGBA pixel buffer consumed by the container writers.

mod decoder;
mod linear;
pub mod types;

pub use decoder::PixelDecoder;
pub use linear::LinearRgbaDecoder;
pub use types::{CHANNEL_COUNT, PixelBuffer};
