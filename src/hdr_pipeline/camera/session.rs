use std::time::Duration;

use tracing::{debug, info};

use crate::hdr_pipeline::camera::device::{CameraDevice, CameraProvider, LENS_PREFERENCE};
use crate::hdr_pipeline::common::error::{CaptureError, Result};
use crate::hdr_pipeline::format::{CaptureFormat, configure_frame_rate, select_best_format};

/// Lifecycle state of a one-shot capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unconfigured,
    Configured,
    Running,
    Capturing,
    Completed,
    Failed,
    Stopped,
}

/// One encoded still image together with the format it was captured with.
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    pub data: Vec<u8>,
    pub format: CaptureFormat,
}

/// A single-use still-capture session.
///
/// `configure → start → capture_once → stop`, in that order. `stop` is
/// reachable from every state and must always run before the session is
/// discarded; a stopped session is never reused.
pub struct CaptureSession {
    device: Option<Box<dyn CameraDevice>>,
    state: SessionState,
    settle_after_start: Duration,
}

impl CaptureSession {
    pub fn new(settle_after_start: Duration) -> Self {
        Self {
            device: None,
            state: SessionState::Unconfigured,
            settle_after_start,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Acquires the preferred back-facing device and configures it for HDR
    /// still capture: best format, frame rate, HDR/wide-color/exposure/focus
    /// where supported, one input and one still-image output.
    pub fn configure(&mut self, provider: &dyn CameraProvider) -> Result<()> {
        if self.state != SessionState::Unconfigured {
            return Err(CaptureError::SessionNotReady(format!(
                "configure called in state {:?}",
                self.state
            )));
        }

        let mut device = Self::best_back_camera(provider)?;
        debug!("Selected {:?} back camera", device.lens_kind());

        // An empty format list keeps the device's own default active format.
        if let Some(best) = select_best_format(device.formats()) {
            let best = best.clone();
            debug!(
                "Selected capture format: {}x{} hdr={} depth={:?}",
                best.width, best.height, best.hdr_capable, best.bit_depth
            );
            device.set_active_format(best.clone())?;
            configure_frame_rate(device.as_mut(), &best);
        }

        if device.active_format().hdr_capable {
            device.set_hdr_enabled(true);
        }
        if device.supports_continuous_auto_exposure() {
            device.set_continuous_auto_exposure(true);
        }
        if device.supports_continuous_auto_focus() {
            device.set_continuous_auto_focus(true);
        }
        if device.supports_wide_color() {
            device.set_wide_color_enabled(true);
        }

        if !device.attach_input() {
            self.state = SessionState::Failed;
            self.device = Some(device);
            return Err(CaptureError::InputUnsupported(
                "device rejected capture input".to_string(),
            ));
        }
        if !device.attach_still_output() {
            self.state = SessionState::Failed;
            self.device = Some(device);
            return Err(CaptureError::OutputUnsupported(
                "device rejected still-image output".to_string(),
            ));
        }

        self.device = Some(device);
        self.state = SessionState::Configured;
        Ok(())
    }

    /// Starts the device and waits a fixed settle delay so autoexposure and
    /// autofocus converge before a capture is attempted.
    pub fn start(&mut self) -> Result<()> {
        if self.state != SessionState::Configured {
            return Err(CaptureError::SessionNotReady(format!(
                "start called in state {:?}",
                self.state
            )));
        }
        let device = self
            .device
            .as_mut()
            .ok_or_else(|| CaptureError::SessionNotReady("no device attached".to_string()))?;

        if let Err(e) = device.start() {
            self.state = SessionState::Failed;
            return Err(e);
        }

        debug!(
            "Session running, settling for {:?} before capture",
            self.settle_after_start
        );
        std::thread::sleep(self.settle_after_start);

        self.state = SessionState::Running;
        Ok(())
    }

    /// Requests exactly one still image.
    pub fn capture_once(&mut self) -> Result<CapturedPhoto> {
        if self.state != SessionState::Running {
            return Err(CaptureError::SessionNotReady(format!(
                "capture_once called in state {:?}",
                self.state
            )));
        }
        self.state = SessionState::Capturing;

        let device = self
            .device
            .as_mut()
            .ok_or_else(|| CaptureError::SessionNotReady("no device attached".to_string()))?;

        let data = match device.capture_still() {
            Ok(data) => data,
            Err(e) => {
                self.state = SessionState::Failed;
                return Err(e);
            }
        };
        if data.is_empty() {
            self.state = SessionState::Failed;
            return Err(CaptureError::ImageDataUnavailable);
        }

        let format = device.active_format().clone();
        info!(
            "Captured still image: {} bytes at {}x{}",
            data.len(),
            format.width,
            format.height
        );
        self.state = SessionState::Completed;
        Ok(CapturedPhoto { data, format })
    }

    /// Halts the device and releases it. Callable from any state, any number
    /// of times.
    pub fn stop(&mut self) {
        if let Some(device) = self.device.as_mut() {
            device.stop();
        }
        self.state = SessionState::Stopped;
    }

    fn best_back_camera(provider: &dyn CameraProvider) -> Result<Box<dyn CameraDevice>> {
        let mut devices = provider.back_cameras();
        for kind in LENS_PREFERENCE {
            if let Some(index) = devices.iter().position(|d| d.lens_kind() == kind) {
                return Ok(devices.swap_remove(index));
            }
        }
        Err(CaptureError::CameraUnavailable)
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if self.state != SessionState::Stopped {
            self.stop();
        }
    }
}
