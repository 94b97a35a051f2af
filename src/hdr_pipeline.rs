//! HDR still-capture pipeline
//!
//! Selects an optimal camera capture format, runs a one-shot still capture
//! while the host's tracking session is paused, decodes the frame into a
//! linear float32 RGBA buffer and serializes it into a binary container.

pub mod camera;
pub mod common;
pub mod container;
pub mod coordinator;
pub mod decode;
pub mod format;
pub mod timing;

pub use common::{CaptureError, Result};

pub use format::{BitDepth, CaptureFormat, FrameRateRange, select_best_format};

pub use camera::{
    CameraDevice, CameraProvider, CaptureSession, CapturedPhoto, LensKind, SessionState,
};

pub use decode::{LinearRgbaDecoder, PixelBuffer, PixelDecoder};

pub use container::{
    ContainerFormat, ContainerWriter, HdrBinWriter, OpenExrWriter, write_container,
};

pub use coordinator::{
    CaptureConfig, CaptureConfigBuilder, CaptureWorker, HdrCapturePipeline, InlineDispatcher,
    TrackingSession, UiDispatcher,
};

pub use timing::{PipelineTimings, StepTiming, Timer};
