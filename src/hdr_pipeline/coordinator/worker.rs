use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{info, warn};

use crate::hdr_pipeline::camera::CameraProvider;
use crate::hdr_pipeline::common::error::{CaptureError, Result};
use crate::hdr_pipeline::coordinator::pipeline::HdrCapturePipeline;
use crate::hdr_pipeline::coordinator::tracking::{TrackingSession, UiDispatcher};
use crate::hdr_pipeline::decode::PixelDecoder;

struct Request {
    tracking: Arc<dyn TrackingSession>,
    reply: mpsc::Sender<Result<PathBuf>>,
}

/// Owns the single background worker that executes capture requests.
///
/// Requests serialize through the worker's queue, so at most one capture is
/// in flight at a time; the camera device and the tracking session are both
/// exclusively-owned singleton resources. The calling thread blocks on its
/// request up to the configured timeout. There is no cancellation: a caller
/// that times out stops waiting, while the background work runs to
/// completion and its result is discarded.
pub struct CaptureWorker {
    requests: Option<mpsc::Sender<Request>>,
    timeout: Duration,
    worker: Option<JoinHandle<()>>,
}

impl CaptureWorker {
    pub fn new<P, D>(pipeline: HdrCapturePipeline<P, D>, ui: Arc<dyn UiDispatcher>) -> Self
    where
        P: CameraProvider + Send + 'static,
        D: PixelDecoder + Send + 'static,
    {
        let timeout = pipeline.config().timeout;
        let settle_after_pause = pipeline.config().settle_after_pause;
        let (requests, queue) = mpsc::channel::<Request>();

        let worker = thread::spawn(move || {
            while let Ok(request) = queue.recv() {
                let result =
                    run_paused_capture(&pipeline, &ui, request.tracking, settle_after_pause);
                // A send failure means the caller timed out and dropped its
                // receiver; the result is discarded.
                let _ = request.reply.send(result);
            }
        });

        Self {
            requests: Some(requests),
            timeout,
            worker: Some(worker),
        }
    }

    /// Pauses the tracking session, captures one HDR still to a container
    /// file and resumes the session, returning the file path. Synchronous
    /// from the caller's point of view, bounded by the configured timeout.
    pub fn capture_hdr(&self, tracking: Arc<dyn TrackingSession>) -> Result<PathBuf> {
        let (reply, response) = mpsc::channel();
        self.requests
            .as_ref()
            .ok_or(CaptureError::NoResult)?
            .send(Request { tracking, reply })
            .map_err(|_| CaptureError::NoResult)?;

        match response.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(CaptureError::Timeout(self.timeout.as_secs())),
            Err(RecvTimeoutError::Disconnected) => Err(CaptureError::NoResult),
        }
    }
}

impl Drop for CaptureWorker {
    fn drop(&mut self) {
        // Closing the queue lets the worker drain and exit.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_paused_capture<P, D>(
    pipeline: &HdrCapturePipeline<P, D>,
    ui: &Arc<dyn UiDispatcher>,
    tracking: Arc<dyn TrackingSession>,
    settle_after_pause: Duration,
) -> Result<PathBuf>
where
    P: CameraProvider,
    D: PixelDecoder,
{
    let was_running = tracking.has_active_frame();

    if was_running {
        info!("Pausing tracking session for still capture");
        let session = tracking.clone();
        ui.dispatch_sync(Box::new(move || session.pause()));
        thread::sleep(settle_after_pause);
    }

    let result = pipeline.capture_to_file();

    // Resume runs whatever the capture outcome was, so the tracking session
    // is not left paused. Its own failure is logged and never overrides the
    // capture result. Known gap: a resume failure after a capture failure
    // leaves the session paused with only a log line to show for it.
    if was_running {
        let session = tracking.clone();
        let (resumed_tx, resumed_rx) = mpsc::channel();
        ui.dispatch_sync(Box::new(move || {
            let _ = resumed_tx.send(session.resume());
        }));
        match resumed_rx.recv() {
            Ok(Ok(())) => info!("Tracking session resumed"),
            Ok(Err(e)) => warn!("Failed to resume tracking session: {}", e),
            Err(_) => warn!("Tracking session resume never ran"),
        }
    }

    result
}
