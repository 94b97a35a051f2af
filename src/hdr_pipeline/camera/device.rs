use crate::hdr_pipeline::common::error::Result;
use crate::hdr_pipeline::format::CaptureFormat;

/// Physical lens behind a back-facing camera device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensKind {
    UltraWide,
    Wide,
    Telephoto,
}

/// Device selection policy: widest field of view first.
pub const LENS_PREFERENCE: [LensKind; 3] =
    [LensKind::UltraWide, LensKind::Wide, LensKind::Telephoto];

/// One back-facing camera device as exposed by the platform layer.
///
/// Implementations wrap the platform capture API. `start` must block the
/// caller until the device reports itself running; converting the platform's
/// asynchronous start/stop callbacks into this synchronous contract is the
/// implementation's job.
pub trait CameraDevice: Send {
    fn lens_kind(&self) -> LensKind;

    /// All capture formats this device reports. May be empty.
    fn formats(&self) -> &[CaptureFormat];

    /// The format the device will capture with. Defaults to a device-chosen
    /// format until `set_active_format` replaces it.
    fn active_format(&self) -> &CaptureFormat;

    fn set_active_format(&mut self, format: CaptureFormat) -> Result<()>;

    fn set_frame_rate(&mut self, rate: f64) -> Result<()>;

    fn set_hdr_enabled(&mut self, enabled: bool);

    fn supports_wide_color(&self) -> bool;
    fn set_wide_color_enabled(&mut self, enabled: bool);

    fn supports_continuous_auto_exposure(&self) -> bool;
    fn set_continuous_auto_exposure(&mut self, enabled: bool);

    fn supports_continuous_auto_focus(&self) -> bool;
    fn set_continuous_auto_focus(&mut self, enabled: bool);

    /// Attaches the single capture input. Returns false when the device
    /// cannot accept it.
    fn attach_input(&mut self) -> bool;

    /// Attaches the single still-image output. Returns false when the device
    /// cannot accept it.
    fn attach_still_output(&mut self) -> bool;

    /// Starts the device and blocks until it is running.
    fn start(&mut self) -> Result<()>;

    /// Stops the device and releases it. Idempotent.
    fn stop(&mut self);

    /// Captures exactly one still image, returning its encoded bytes.
    fn capture_still(&mut self) -> Result<Vec<u8>>;
}

/// Enumerates the back-facing camera set.
pub trait CameraProvider: Send {
    fn back_cameras(&self) -> Vec<Box<dyn CameraDevice>>;
}
