//! Camera capture format model

/// Sample depth reported by a capture format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BitDepth {
    /// 8 bits per component.
    Standard8,
    /// 10 bits per component or better.
    High10Plus,
}

/// A supported frame rate interval, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRateRange {
    pub min: f64,
    pub max: f64,
}

impl FrameRateRange {
    pub fn contains(&self, rate: f64) -> bool {
        self.min <= rate && rate <= self.max
    }
}

/// Immutable snapshot of one device-reported capture capability.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureFormat {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether the device can capture HDR video in this format.
    pub hdr_capable: bool,
    /// Sample depth of this format.
    pub bit_depth: BitDepth,
    /// Supported frame rate ranges, in device order.
    pub frame_rate_ranges: Vec<FrameRateRange>,
}

impl CaptureFormat {
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
