//! Camera capture module
//!
//! Trait seam to the platform camera API plus the one-shot still-capture
//! session state machine built on top of it.

pub mod device;
mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use device::{CameraDevice, CameraProvider, LENS_PREFERENCE, LensKind};
pub use session::{CaptureSession, CapturedPhoto, SessionState};
