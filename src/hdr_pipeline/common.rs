//! Common utilities module
//!
//! Shared error taxonomy used across the HDR capture pipeline.

pub mod error;

pub use error::{CaptureError, Result};
