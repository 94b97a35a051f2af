use crate::hdr_pipeline::common::error::Result;

/// The externally-owned continuous AR tracking session.
///
/// The coordinator only ever pauses it for the duration of a still capture
/// and resumes it afterwards; everything else about the session belongs to
/// the host. `pause` and `resume` carry a UI-thread affinity and are always
/// invoked through a [`UiDispatcher`].
pub trait TrackingSession: Send + Sync {
    /// Whether the session currently has an active frame, i.e. is running.
    fn has_active_frame(&self) -> bool;

    fn pause(&self);

    /// Re-runs the session with its prior configuration.
    fn resume(&self) -> Result<()>;
}

/// Marshals a closure onto the host's UI-affinity thread and blocks the
/// caller until it has run.
pub trait UiDispatcher: Send + Sync {
    fn dispatch_sync(&self, f: Box<dyn FnOnce() + Send>);
}

/// Runs the closure on the calling thread. Suitable for hosts without a
/// UI-thread requirement and for tests.
pub struct InlineDispatcher;

impl UiDispatcher for InlineDispatcher {
    fn dispatch_sync(&self, f: Box<dyn FnOnce() + Send>) {
        f();
    }
}
