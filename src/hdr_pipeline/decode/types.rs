//! Decoded pixel buffer type

use crate::hdr_pipeline::common::error::{CaptureError, Result};

/// Number of channels in a decoded buffer (R, G, B, A).
pub const CHANNEL_COUNT: usize = 4;

/// Linear-color float32 pixel data, row-major, RGBA interleaved per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl PixelBuffer {
    /// Builds a buffer, enforcing `samples.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, samples: Vec<f32>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNEL_COUNT))
            .ok_or_else(|| {
                CaptureError::ContextCreationFailed(format!(
                    "pixel buffer dimensions overflow: {}x{}",
                    width, height
                ))
            })?;
        if samples.len() != expected {
            return Err(CaptureError::ContextCreationFailed(format!(
                "pixel buffer size mismatch: expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// One row of interleaved RGBA samples.
    pub fn row(&self, y: u32) -> &[f32] {
        let stride = self.width as usize * CHANNEL_COUNT;
        let start = y as usize * stride;
        &self.samples[start..start + stride]
    }
}
