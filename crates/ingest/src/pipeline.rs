//! Pipeline entry points.
//!
//! ```text
//! SnapshotSource ──> FeedSnapshot ──> ResourceGraph
//!                                          │
//!                                          v
//!                              ProjectionNormalizer ──> TierDeduplicator ──> Vec<NormalizedProp>
//! ```
//!
//! Everything after the fetch is a pure function of the snapshot. State is
//! local to one call; a failed fetch returns the error and nothing else.

use std::sync::Arc;

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::FeedConfig;
use crate::dedup::TierDeduplicator;
use crate::errors::FeedError;
use crate::graph::ResourceGraph;
use crate::models::{FeedSnapshot, NormalizedProp, RawProjection};
use crate::normalize::ProjectionNormalizer;
use crate::provider::prizepicks::PrizePicksFetcher;
use crate::provider::SnapshotSource;
use crate::sink::{LogSink, TracingSink};

/// Raw projections plus the lookup tables built from `included`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResolvedSnapshot {
    pub projections: Vec<RawProjection>,
    pub graph: ResourceGraph,
}

impl From<FeedSnapshot> for ResolvedSnapshot {
    fn from(snapshot: FeedSnapshot) -> Self {
        let graph = ResourceGraph::build(&snapshot.included);
        Self {
            projections: snapshot.projections,
            graph,
        }
    }
}

/// Normalize every projection of a resolved snapshot (no dedup).
pub fn normalize_snapshot(snapshot: &ResolvedSnapshot, clock: &dyn Clock) -> Vec<NormalizedProp> {
    ProjectionNormalizer::new(&snapshot.graph, clock).normalize_all(&snapshot.projections)
}

/// Normalize and deduplicate a resolved snapshot.
pub fn process_snapshot(
    snapshot: &ResolvedSnapshot,
    clock: &dyn Clock,
    sink: &dyn LogSink,
) -> Vec<NormalizedProp> {
    let props = normalize_snapshot(snapshot, clock);
    TierDeduplicator::new(sink).run(props)
}

/// A configured feed: one source, one sink, one clock.
pub struct PropsFeed<S: SnapshotSource> {
    source: S,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
}

impl PropsFeed<PrizePicksFetcher> {
    /// Build a feed backed by the PrizePicks fetcher.
    ///
    /// # Errors
    ///
    /// Fails with [`FeedError::Configuration`] when the proxy URL is missing.
    pub fn prizepicks(config: FeedConfig) -> Result<Self, FeedError> {
        Ok(Self::new(PrizePicksFetcher::new(config)?))
    }
}

impl<S: SnapshotSource> PropsFeed<S> {
    /// Wrap a source with the default tracing sink and system clock.
    pub fn new(source: S) -> Self {
        Self {
            source,
            sink: Arc::new(TracingSink),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch one snapshot and index its resources, without normalizing.
    pub async fn fetch_resolved(&self) -> Result<ResolvedSnapshot, FeedError> {
        let snapshot = self.source.fetch_snapshot(self.sink.as_ref()).await?;
        Ok(ResolvedSnapshot::from(snapshot))
    }

    /// Fetch one snapshot and return normalized, tier-deduplicated props.
    pub async fn fetch_props(&self) -> Result<Vec<NormalizedProp>, FeedError> {
        let snapshot = self.fetch_resolved().await?;
        Ok(process_snapshot(
            &snapshot,
            self.clock.as_ref(),
            self.sink.as_ref(),
        ))
    }
}
