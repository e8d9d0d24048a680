//! Feed models
//!
//! - `raw` - Provider document shapes (RawProjection, IncludedResource, FeedSnapshot)
//! - `prop` - The flat output record (NormalizedProp)
//! - `lenient` - Tolerant field decoders used by `raw`

mod lenient;
mod prop;
mod raw;

pub use prop::{NormalizedProp, PRIZEPICKS_SOURCE};
pub use raw::{
    FeedSnapshot, GameAttributes, IncludedResource, LeagueAttributes, PlayerAttributes,
    ProjectionAttributes, ProjectionRelationships, RawProjection, Relationship,
    ResourceIdentifier, StatTypeAttributes,
};
