//! Mock camera backend shared by the session, pipeline and worker tests.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::hdr_pipeline::camera::device::{CameraDevice, CameraProvider, LensKind};
use crate::hdr_pipeline::common::error::{CaptureError, Result};
use crate::hdr_pipeline::format::{BitDepth, CaptureFormat};

/// Counters shared across every device a provider hands out, so tests can
/// observe lifecycle behavior across session boundaries.
#[derive(Debug, Default)]
pub struct DeviceProbe {
    pub running: AtomicBool,
    concurrent: AtomicUsize,
    pub max_concurrent: AtomicUsize,
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub captures: AtomicUsize,
}

impl DeviceProbe {
    fn started(&self) {
        self.running.store(true, Ordering::SeqCst);
        self.starts.fetch_add(1, Ordering::SeqCst);
        let now = self.concurrent.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent.fetch_max(now, Ordering::SeqCst);
    }

    fn stopped(&self, was_running: bool) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        if was_running {
            self.running.store(false, Ordering::SeqCst);
            self.concurrent.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

#[derive(Clone)]
pub struct MockDeviceSpec {
    pub lens: LensKind,
    pub formats: Vec<CaptureFormat>,
    pub accept_input: bool,
    pub accept_output: bool,
    pub fail_capture: bool,
    pub still_bytes: Vec<u8>,
    pub capture_delay: Duration,
    /// Shared event log for ordering assertions across mocks.
    pub events: Option<Arc<Mutex<Vec<&'static str>>>>,
}

impl MockDeviceSpec {
    pub fn new(lens: LensKind) -> Self {
        Self {
            lens,
            formats: Vec::new(),
            accept_input: true,
            accept_output: true,
            fail_capture: false,
            still_bytes: vec![0u8; 4],
            capture_delay: Duration::ZERO,
            events: None,
        }
    }

    pub fn with_formats(mut self, formats: Vec<CaptureFormat>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_still_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.still_bytes = bytes;
        self
    }

    pub fn with_events(mut self, events: Arc<Mutex<Vec<&'static str>>>) -> Self {
        self.events = Some(events);
        self
    }
}

pub fn test_format(width: u32, height: u32, hdr: bool) -> CaptureFormat {
    CaptureFormat {
        width,
        height,
        hdr_capable: hdr,
        bit_depth: BitDepth::Standard8,
        frame_rate_ranges: vec![],
    }
}

pub struct MockDevice {
    spec: MockDeviceSpec,
    active: CaptureFormat,
    running: bool,
    pub probe: Arc<DeviceProbe>,
}

impl MockDevice {
    pub fn new(spec: MockDeviceSpec, probe: Arc<DeviceProbe>) -> Self {
        // Device-chosen default until set_active_format replaces it.
        let active = spec
            .formats
            .first()
            .cloned()
            .unwrap_or_else(|| test_format(1280, 720, false));
        Self {
            spec,
            active,
            running: false,
            probe,
        }
    }
}

impl CameraDevice for MockDevice {
    fn lens_kind(&self) -> LensKind {
        self.spec.lens
    }

    fn formats(&self) -> &[CaptureFormat] {
        &self.spec.formats
    }

    fn active_format(&self) -> &CaptureFormat {
        &self.active
    }

    fn set_active_format(&mut self, format: CaptureFormat) -> Result<()> {
        self.active = format;
        Ok(())
    }

    fn set_frame_rate(&mut self, _rate: f64) -> Result<()> {
        Ok(())
    }

    fn set_hdr_enabled(&mut self, _enabled: bool) {}

    fn supports_wide_color(&self) -> bool {
        false
    }
    fn set_wide_color_enabled(&mut self, _enabled: bool) {}

    fn supports_continuous_auto_exposure(&self) -> bool {
        true
    }
    fn set_continuous_auto_exposure(&mut self, _enabled: bool) {}

    fn supports_continuous_auto_focus(&self) -> bool {
        true
    }
    fn set_continuous_auto_focus(&mut self, _enabled: bool) {}

    fn attach_input(&mut self) -> bool {
        self.spec.accept_input
    }

    fn attach_still_output(&mut self) -> bool {
        self.spec.accept_output
    }

    fn start(&mut self) -> Result<()> {
        self.running = true;
        self.probe.started();
        Ok(())
    }

    fn stop(&mut self) {
        self.probe.stopped(self.running);
        self.running = false;
    }

    fn capture_still(&mut self) -> Result<Vec<u8>> {
        if !self.spec.capture_delay.is_zero() {
            std::thread::sleep(self.spec.capture_delay);
        }
        self.probe.captures.fetch_add(1, Ordering::SeqCst);
        if let Some(events) = &self.spec.events {
            events.lock().unwrap().push("capture_still");
        }
        if self.spec.fail_capture {
            return Err(CaptureError::OutputNotReady);
        }
        Ok(self.spec.still_bytes.clone())
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        if self.running {
            self.probe.stopped(true);
            self.running = false;
        }
    }
}

pub struct MockProvider {
    pub specs: Vec<MockDeviceSpec>,
    pub probe: Arc<DeviceProbe>,
}

impl MockProvider {
    pub fn new(specs: Vec<MockDeviceSpec>) -> Self {
        Self {
            specs,
            probe: Arc::new(DeviceProbe::default()),
        }
    }
}

impl CameraProvider for MockProvider {
    fn back_cameras(&self) -> Vec<Box<dyn CameraDevice>> {
        self.specs
            .iter()
            .map(|spec| {
                Box::new(MockDevice::new(spec.clone(), self.probe.clone())) as Box<dyn CameraDevice>
            })
            .collect()
    }
}
