use tracing::debug;

use crate::hdr_pipeline::camera::CapturedPhoto;
use crate::hdr_pipeline::common::error::{CaptureError, Result};
use crate::hdr_pipeline::decode::decoder::PixelDecoder;
use crate::hdr_pipeline::decode::types::{CHANNEL_COUNT, PixelBuffer};

/// Decodes captured image bytes into a linear-color float32 RGBA buffer.
///
/// The encoded image is decoded at native dimensions and pushed through the
/// inverse sRGB transfer on R, G and B; alpha passes through untouched. No
/// resizing, no gamma re-encoding, no premultiply inversion.
pub struct LinearRgbaDecoder;

impl PixelDecoder for LinearRgbaDecoder {
    fn decode(&self, photo: &CapturedPhoto) -> Result<PixelBuffer> {
        self.decode_bytes(&photo.data)
    }
}

impl LinearRgbaDecoder {
    /// Decodes encoded image bytes directly, without a capture attached.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<PixelBuffer> {
        let image = image::load_from_memory(data)
            .map_err(|e| CaptureError::ImageProcessingFailed(e.to_string()))?;

        let width = image.width();
        let height = image.height();
        debug!("Decoding captured image: {}x{}", width, height);

        let rgba = image.to_rgba32f();

        let mut samples = Vec::new();
        let capacity = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNEL_COUNT))
            .ok_or_else(|| {
                CaptureError::ContextCreationFailed(format!(
                    "float buffer dimensions overflow: {}x{}",
                    width, height
                ))
            })?;
        samples.try_reserve_exact(capacity).map_err(|e| {
            CaptureError::ContextCreationFailed(format!(
                "failed to allocate {} float samples: {}",
                capacity, e
            ))
        })?;

        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            samples.push(srgb_to_linear(r));
            samples.push(srgb_to_linear(g));
            samples.push(srgb_to_linear(b));
            samples.push(a);
        }

        PixelBuffer::new(width, height, samples)
    }
}

/// Inverse sRGB electro-optical transfer, defined over the extended range.
fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}
