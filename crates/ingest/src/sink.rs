//! Progress logging sink.
//!
//! Pipeline stages report one summary line each (fetch counts, dedup counts)
//! through a [`LogSink`]. Callers inject their own; the default forwards to
//! `tracing`.

use tracing::info;

/// Single-argument text logger.
///
/// Any `Fn(&str) + Send + Sync` closure is a sink.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Forwards progress lines to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        info!(target: "propline", "{}", message);
    }
}
