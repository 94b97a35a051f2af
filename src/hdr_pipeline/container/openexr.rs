use std::io::Write;

use tracing::debug;

use crate::hdr_pipeline::common::error::Result;
use crate::hdr_pipeline::container::writer::ContainerWriter;
use crate::hdr_pipeline::decode::{CHANNEL_COUNT, PixelBuffer};

pub const EXR_MAGIC: u32 = 0x762f3101;
/// Version 2, single part, no long names.
pub const EXR_VERSION: u32 = 0x0000_0002;

const PIXEL_TYPE_FLOAT: u32 = 2;
const COMPRESSION_NONE: u8 = 0;
const LINE_ORDER_INCREASING_Y: u8 = 0;

/// Single-part uncompressed scanline OpenEXR subset.
///
/// Layout: magic and version, the required header attributes in a fixed
/// order, a NUL header terminator, an absolute uint64 LE scanline offset
/// table, then one record per row in increasing-Y order. Each record is the
/// int32 row index, the uint32 payload byte count, and four planar blocks of
/// float32 LE row data in channel order R, G, B, A.
pub struct OpenExrWriter;

impl ContainerWriter for OpenExrWriter {
    fn extension(&self) -> &'static str {
        "exr"
    }

    fn write(&self, buffer: &PixelBuffer, out: &mut dyn Write) -> Result<()> {
        let width = buffer.width();
        let height = buffer.height();
        debug!("Encoding OpenEXR image: {}x{}", width, height);

        // The header is buffered so the offset table can be computed from
        // its final length.
        let mut header = Vec::new();
        header.extend_from_slice(&EXR_MAGIC.to_le_bytes());
        header.extend_from_slice(&EXR_VERSION.to_le_bytes());

        write_attribute(&mut header, "channels", "chlist", &channel_list());
        write_attribute(&mut header, "compression", "compression", &[COMPRESSION_NONE]);

        let window = box2i(width, height);
        write_attribute(&mut header, "dataWindow", "box2i", &window);
        write_attribute(&mut header, "displayWindow", "box2i", &window);

        write_attribute(&mut header, "lineOrder", "lineOrder", &[LINE_ORDER_INCREASING_Y]);
        write_attribute(&mut header, "pixelAspectRatio", "float", &1.0f32.to_le_bytes());

        let mut center = Vec::new();
        center.extend_from_slice(&0.0f32.to_le_bytes());
        center.extend_from_slice(&0.0f32.to_le_bytes());
        write_attribute(&mut header, "screenWindowCenter", "v2f", &center);
        write_attribute(&mut header, "screenWindowWidth", "float", &1.0f32.to_le_bytes());

        // End of header.
        header.push(0);
        out.write_all(&header)?;

        // Scanline offset table: absolute offsets from the file start, the
        // first record beginning immediately after the table.
        let row_payload = width as u64 * CHANNEL_COUNT as u64 * 4;
        let record_len = 8 + row_payload;
        let mut offset = header.len() as u64 + u64::from(height) * 8;
        for _ in 0..height {
            out.write_all(&offset.to_le_bytes())?;
            offset += record_len;
        }

        for y in 0..height {
            out.write_all(&(y as i32).to_le_bytes())?;
            out.write_all(&(row_payload as u32).to_le_bytes())?;

            let row = buffer.row(y);
            for channel in 0..CHANNEL_COUNT {
                for x in 0..width as usize {
                    let sample = row[x * CHANNEL_COUNT + channel];
                    out.write_all(&sample.to_le_bytes())?;
                }
            }
        }

        Ok(())
    }
}

fn channel_list() -> Vec<u8> {
    let mut value = Vec::new();
    for name in ["R", "G", "B", "A"] {
        value.extend_from_slice(name.as_bytes());
        value.push(0);
        value.extend_from_slice(&PIXEL_TYPE_FLOAT.to_le_bytes());
        value.extend_from_slice(&1u32.to_le_bytes()); // xSampling
        value.extend_from_slice(&1u32.to_le_bytes()); // ySampling
    }
    value.push(0); // end of channel list
    value
}

fn box2i(width: u32, height: u32) -> Vec<u8> {
    let mut value = Vec::new();
    value.extend_from_slice(&0i32.to_le_bytes());
    value.extend_from_slice(&0i32.to_le_bytes());
    value.extend_from_slice(&(width as i32 - 1).to_le_bytes());
    value.extend_from_slice(&(height as i32 - 1).to_le_bytes());
    value
}

fn write_attribute(out: &mut Vec<u8>, name: &str, type_tag: &str, value: &[u8]) {
    out.extend_from_slice(name.as_bytes());
    out.push(0);
    out.extend_from_slice(type_tag.as_bytes());
    out.push(0);
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
}
