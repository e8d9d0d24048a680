//! Snapshot source trait definitions.

use async_trait::async_trait;

use crate::errors::FeedError;
use crate::models::FeedSnapshot;
use crate::sink::LogSink;

/// Something that can produce one full feed snapshot.
///
/// The pipeline is generic over this trait so the network fetcher can be
/// swapped for a fixture or a recorded document.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use propline_ingest::provider::SnapshotSource;
///
/// struct Recorded(FeedSnapshot);
///
/// #[async_trait]
/// impl SnapshotSource for Recorded {
///     fn id(&self) -> &'static str {
///         "RECORDED"
///     }
///
///     async fn fetch_snapshot(&self, _sink: &dyn LogSink) -> Result<FeedSnapshot, FeedError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Constant identifier used in logs, e.g. "PRIZEPICKS".
    fn id(&self) -> &'static str;

    /// Fetch the entire catalog in one request.
    ///
    /// Implementations emit a single progress line to `sink` on success and
    /// return no partial data on failure.
    async fn fetch_snapshot(&self, sink: &dyn LogSink) -> Result<FeedSnapshot, FeedError>;
}
