//! Propline Ingest Crate
//!
//! Turns the PrizePicks projections board into flat, ingestion-ready player
//! props.
//!
//! # Overview
//!
//! The provider publishes a sparse JSON:API document: a `data` list of
//! projections and an `included` pool of players, games, leagues and stat
//! types referenced by id. This crate:
//! - Fetches one full snapshot through an authenticated proxy
//! - Indexes the included pool into typed lookup tables
//! - Joins every projection against those tables into a [`NormalizedProp`]
//! - Collapses the provider's difficulty tiers to one canonical line
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | PrizePicksFetcher|  (single GET via proxy)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   FeedSnapshot   |  (data + included)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  ResourceGraph   |  (player / game / league / stat_type by id)
//! +------------------+
//!          |
//!          v
//! +--------------------+
//! |ProjectionNormalizer|  (fallback chains, sport codes)
//! +--------------------+
//!          |
//!          v
//! +------------------+
//! | TierDeduplicator |  (one record per player/stat/sport/game)
//! +------------------+
//! ```
//!
//! # Entry points
//!
//! - [`PropsFeed::fetch_resolved`] - raw projections plus the lookup tables
//! - [`PropsFeed::fetch_props`] - normalized, deduplicated props

pub mod clock;
pub mod config;
pub mod dedup;
pub mod errors;
pub mod graph;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod provider;
pub mod sink;
pub mod sport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FeedConfig;
pub use dedup::{dedupe, DedupReport, TierDeduplicator, TierKey};
pub use errors::{ErrorKind, FeedError};
pub use graph::ResourceGraph;
pub use models::{FeedSnapshot, IncludedResource, NormalizedProp, RawProjection};
pub use normalize::ProjectionNormalizer;
pub use pipeline::{normalize_snapshot, process_snapshot, PropsFeed, ResolvedSnapshot};
pub use provider::prizepicks::PrizePicksFetcher;
pub use provider::SnapshotSource;
pub use sink::{LogSink, TracingSink};
pub use sport::map_sport_code;
