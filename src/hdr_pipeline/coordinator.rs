//! Capture coordination module
//!
//! Pauses the externally-owned tracking session, runs the capture pipeline
//! on a single background worker and resumes the session, handing the caller
//! a bounded-timeout result.

mod pipeline;
mod tracking;
pub mod types;
mod worker;


pub use pipeline::HdrCapturePipeline;
pub use tracking::{InlineDispatcher, TrackingSession, UiDispatcher};
pub use types::{CaptureConfig, CaptureConfigBuilder};
pub use worker::CaptureWorker;
