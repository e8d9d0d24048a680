//! Feed sources.
//!
//! - The `SnapshotSource` trait the pipeline fetches through
//! - The PrizePicks fetcher, the only network implementation

mod traits;

pub mod prizepicks;

pub use traits::SnapshotSource;
