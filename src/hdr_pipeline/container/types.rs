//! Container format selection

/// On-disk container for a captured HDR pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerFormat {
    /// HDRBIN: fixed 26-byte header, float32 RGBA interleaved payload.
    #[default]
    HdrBin,
    /// Single-part uncompressed scanline OpenEXR, planar channel rows.
    OpenExr,
}
