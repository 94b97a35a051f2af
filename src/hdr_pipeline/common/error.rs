use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No back-facing camera device is available")]
    CameraUnavailable,

    #[error("Camera device rejected the capture input: {0}")]
    InputUnsupported(String),

    #[error("Camera device rejected the still-image output: {0}")]
    OutputUnsupported(String),

    #[error("Capture session is not ready: {0}")]
    SessionNotReady(String),

    #[error("Still-image output is not ready for capture")]
    OutputNotReady,

    #[error("Capture completed but produced no image data")]
    ImageDataUnavailable,

    #[error("Failed to process captured image: {0}")]
    ImageProcessingFailed(String),

    #[error("Failed to create rendering context: {0}")]
    ContextCreationFailed(String),

    #[error("HDR capture timed out after {0} seconds")]
    Timeout(u64),

    #[error("HDR capture completed but no result was available")]
    NoResult,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
