//! Capture format selection module
//!
//! Scores device-reported capture formats by HDR capability, resolution and
//! sample depth, and pins a frame rate on the winner.

mod selector;
pub mod types;

pub use selector::{TARGET_FRAME_RATE, configure_frame_rate, select_best_format};
pub use types::{BitDepth, CaptureFormat, FrameRateRange};
