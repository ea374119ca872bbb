//! Response observer port
//!
//! Defines the interface for watching a mentor reply as it streams in.

use mentor_domain::Module;

/// Callback for live display of a reply being generated
///
/// Implementations live in the presentation layer. `on_partial` always
/// receives the whole reply so far, not just the newest fragment, so a
/// renderer can simply redraw.
pub trait ResponseObserver: Send + Sync {
    /// Called once before the model is contacted.
    fn on_stream_start(&self, _module: Module) {}

    /// Called with the accumulated reply after each delta, and once with the
    /// apology text when the quota is exhausted.
    fn on_partial(&self, accumulated: &str);

    /// Called when the reply has been committed to the transcript.
    ///
    /// Not called when the provider fails; the error is returned instead.
    fn on_stream_end(&self) {}
}

/// No-op observer for callers that only need the final transcript
pub struct NoResponseObserver;

impl ResponseObserver for NoResponseObserver {
    fn on_partial(&self, _accumulated: &str) {}
}
