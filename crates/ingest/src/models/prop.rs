use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Source tag stamped on every record from this provider.
pub const PRIZEPICKS_SOURCE: &str = "prizepicks";

/// Flat, ingestion-ready player prop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProp {
    /// Provider-prefixed projection id, unique within a snapshot.
    pub id: String,

    pub player_name: String,

    /// Canonical sport identifier (see [`crate::sport::map_sport_code`]).
    pub sport: String,

    pub stat_type: String,

    /// The line. Never null; projections without one are dropped upstream.
    pub stat_value: Decimal,

    // PrizePicks publishes a single line with no two-sided market,
    // so the pricing fields stay empty for this source.
    pub over_odds: Option<Decimal>,
    pub under_odds: Option<Decimal>,
    pub over_multiplier: Option<Decimal>,
    pub under_multiplier: Option<Decimal>,

    /// Human-readable game label.
    pub game: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    pub source: String,

    pub ingested_at: DateTime<Utc>,
}

impl NormalizedProp {
    /// Create a prop with the pricing fields left empty.
    pub fn new(
        id: String,
        player_name: String,
        sport: String,
        stat_type: String,
        stat_value: Decimal,
        game: String,
        ingested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player_name,
            sport,
            stat_type,
            stat_value,
            over_odds: None,
            under_odds: None,
            over_multiplier: None,
            under_multiplier: None,
            game,
            start_time: None,
            source: PRIZEPICKS_SOURCE.to_string(),
            ingested_at,
        }
    }

    pub fn with_start_time(mut self, start_time: Option<DateTime<Utc>>) -> Self {
        self.start_time = start_time;
        self
    }
}
