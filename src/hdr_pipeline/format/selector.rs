use std::cmp::Reverse;

use tracing::{debug, warn};

use crate::hdr_pipeline::camera::CameraDevice;
use crate::hdr_pipeline::format::types::CaptureFormat;

/// Target rate used when pinning a frame rate on the selected format.
/// Lower rates are preferred over high ones; still capture gains nothing
/// from fast video.
pub const TARGET_FRAME_RATE: f64 = 30.0;

/// Picks the best capture format for HDR still capture, or `None` for an
/// empty list.
///
/// Ordering, descending priority:
/// 1. HDR-capable formats first.
/// 2. Higher pixel count first.
/// 3. 10-bit-or-better sample depth first.
/// 4. Original enumeration index, ascending. This makes the residual order
///    among fully-tied formats deterministic rather than an artifact of
///    sort stability.
pub fn select_best_format(formats: &[CaptureFormat]) -> Option<&CaptureFormat> {
    formats
        .iter()
        .enumerate()
        .min_by_key(|(index, format)| {
            (
                Reverse(format.hdr_capable),
                Reverse(format.pixel_count()),
                Reverse(format.bit_depth),
                *index,
            )
        })
        .map(|(_, format)| format)
}

/// Pins the device frame rate for the chosen format.
///
/// The first range containing [`TARGET_FRAME_RATE`] wins and the active rate
/// becomes `min(target, range.max)`. A format with no qualifying range keeps
/// the device default; frame rate problems never fail the capture.
pub fn configure_frame_rate(device: &mut dyn CameraDevice, format: &CaptureFormat) {
    let Some(range) = format
        .frame_rate_ranges
        .iter()
        .find(|range| range.contains(TARGET_FRAME_RATE))
    else {
        debug!(
            "No frame rate range covers {} fps, keeping device default",
            TARGET_FRAME_RATE
        );
        return;
    };

    let rate = TARGET_FRAME_RATE.min(range.max);
    if let Err(e) = device.set_frame_rate(rate) {
        warn!("Failed to set frame rate to {} fps: {}", rate, e);
    }
}
