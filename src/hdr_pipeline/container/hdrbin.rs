use std::io::Write;

use tracing::debug;

use crate::hdr_pipeline::common::error::Result;
use crate::hdr_pipeline::container::writer::ContainerWriter;
use crate::hdr_pipeline::decode::PixelBuffer;

pub const HDRBIN_MAGIC: &[u8; 6] = b"HDRBIN";
pub const HDRBIN_VERSION: u16 = 1;
/// 6 magic + 2 version + 4 width + 4 height + 1 channels + 1 data type
/// + 8 reserved.
pub const HDRBIN_HEADER_LEN: usize = 26;
/// Payload sample type tag: float32.
pub const HDRBIN_DATA_TYPE_F32: u8 = 1;

/// HDRBIN container: fixed 26-byte header followed by the float32 LE
/// payload, row-major, RGBA interleaved per pixel. Total file size is
/// exactly `26 + width * height * 16` bytes.
pub struct HdrBinWriter;

impl ContainerWriter for HdrBinWriter {
    fn extension(&self) -> &'static str {
        "hdrbin"
    }

    fn write(&self, buffer: &PixelBuffer, out: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding HDRBIN image: {}x{}",
            buffer.width(),
            buffer.height()
        );

        out.write_all(HDRBIN_MAGIC)?;
        out.write_all(&HDRBIN_VERSION.to_le_bytes())?;
        out.write_all(&buffer.width().to_le_bytes())?;
        out.write_all(&buffer.height().to_le_bytes())?;
        out.write_all(&[4u8, HDRBIN_DATA_TYPE_F32])?;
        out.write_all(&[0u8; 8])?;

        for sample in buffer.samples() {
            out.write_all(&sample.to_le_bytes())?;
        }

        Ok(())
    }
}
