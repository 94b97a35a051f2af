use std::path::PathBuf;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::hdr_pipeline::camera::{CameraProvider, CaptureSession, CapturedPhoto};
use crate::hdr_pipeline::common::error::Result;
use crate::hdr_pipeline::container::write_container;
use crate::hdr_pipeline::coordinator::types::CaptureConfig;
use crate::hdr_pipeline::decode::{LinearRgbaDecoder, PixelDecoder};
use crate::hdr_pipeline::timing::{PipelineTimings, Timer};

/// End-to-end still capture: configure a one-shot camera session, take one
/// frame, decode it to linear float32 RGBA and write the configured
/// container to a uniquely named file.
pub struct HdrCapturePipeline<P: CameraProvider, D: PixelDecoder> {
    provider: P,
    decoder: D,
    config: CaptureConfig,
}

impl<P: CameraProvider> HdrCapturePipeline<P, LinearRgbaDecoder> {
    pub fn new(provider: P, config: CaptureConfig) -> Self {
        Self {
            provider,
            decoder: LinearRgbaDecoder,
            config,
        }
    }
}

impl<P: CameraProvider, D: PixelDecoder> HdrCapturePipeline<P, D> {
    pub fn with_custom(provider: P, decoder: D, config: CaptureConfig) -> Self {
        Self {
            provider,
            decoder,
            config,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Captures one still image and writes it to the scratch directory,
    /// returning the path of the container file. The camera session is torn
    /// down unconditionally, success or failure.
    #[instrument(skip(self))]
    pub fn capture_to_file(&self) -> Result<PathBuf> {
        let mut timings = PipelineTimings::new();
        info!("Starting HDR still capture");

        let mut session = CaptureSession::new(self.config.settle_after_start);
        let captured = self.run_session(&mut session, &mut timings);
        // The session is single-use; release the device whatever happened.
        session.stop();
        let photo = captured?;

        let timer = Timer::start("decode_pixels");
        let buffer = self.decoder.decode(&photo)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let writer = self.config.container.writer();
        let file_name = format!("hdr_camera_capture_{}.{}", Uuid::new_v4(), writer.extension());
        let path = self.config.output_dir.join(file_name);

        let timer = Timer::start("write_container");
        write_container(&path, writer.as_ref(), &buffer)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        info!(
            "Capture complete: {}x{} -> {} in {:.3}ms",
            buffer.width(),
            buffer.height(),
            path.display(),
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(path)
    }

    fn run_session(
        &self,
        session: &mut CaptureSession,
        timings: &mut PipelineTimings,
    ) -> Result<CapturedPhoto> {
        let timer = Timer::start("configure_session");
        session.configure(&self.provider)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("start_session");
        session.start()?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("capture_still");
        let photo = session.capture_once()?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok(photo)
    }
}
