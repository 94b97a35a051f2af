//! Capture request configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::hdr_pipeline::container::ContainerFormat;

/// Configuration for one HDR capture pipeline.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Container format written to disk.
    pub container: ContainerFormat,
    /// Wait after the camera session starts running, letting autoexposure
    /// and autofocus converge before the still is taken.
    pub settle_after_start: Duration,
    /// Wait after pausing the tracking session before the camera is touched.
    pub settle_after_pause: Duration,
    /// Hard bound on how long a caller blocks on one capture request.
    pub timeout: Duration,
    /// Directory capture files are written into.
    pub output_dir: PathBuf,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            container: ContainerFormat::HdrBin,
            settle_after_start: Duration::from_secs(2),
            settle_after_pause: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            output_dir: std::env::temp_dir(),
        }
    }
}

impl CaptureConfig {
    pub fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::default()
    }
}

/// Builder for CaptureConfig
#[derive(Default)]
pub struct CaptureConfigBuilder {
    container: Option<ContainerFormat>,
    settle_after_start: Option<Duration>,
    settle_after_pause: Option<Duration>,
    timeout: Option<Duration>,
    output_dir: Option<PathBuf>,
}

impl CaptureConfigBuilder {
    pub fn container(mut self, container: ContainerFormat) -> Self {
        self.container = Some(container);
        self
    }

    pub fn settle_after_start(mut self, settle: Duration) -> Self {
        self.settle_after_start = Some(settle);
        self
    }

    pub fn settle_after_pause(mut self, settle: Duration) -> Self {
        self.settle_after_pause = Some(settle);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn build(self) -> CaptureConfig {
        let default = CaptureConfig::default();
        CaptureConfig {
            container: self.container.unwrap_or(default.container),
            settle_after_start: self.settle_after_start.unwrap_or(default.settle_after_start),
            settle_after_pause: self.settle_after_pause.unwrap_or(default.settle_after_pause),
            timeout: self.timeout.unwrap_or(default.timeout),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
        }
    }
}
