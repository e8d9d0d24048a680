use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// One entry of the feed's primary `data` list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawProjection {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub attributes: ProjectionAttributes,

    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub relationships: ProjectionRelationships,
}

/// Attributes carried on the projection itself.
///
/// A value of the wrong JSON type reads as absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectionAttributes {
    /// The line. `None` means the projection is dropped during normalization.
    #[serde(default, deserialize_with = "lenient::option")]
    pub line_score: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub stat_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub stat_display_name: Option<String>,
    /// Usually the opponent or matchup text, e.g. "LAL".
    #[serde(default, deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub start_time: Option<String>,
    // Note: odds_type, rank, is_promo and the rest exist but are not used
}

/// Relationship name -> referenced resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectionRelationships {
    #[serde(
        default,
        rename = "new_player",
        alias = "player",
        deserialize_with = "lenient::object"
    )]
    pub player: Option<Relationship>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub game: Option<Relationship>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub league: Option<Relationship>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub stat_type: Option<Relationship>,
}

impl ProjectionRelationships {
    pub fn player_id(&self) -> Option<&str> {
        self.player.as_ref().and_then(Relationship::id)
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game.as_ref().and_then(Relationship::id)
    }

    pub fn league_id(&self) -> Option<&str> {
        self.league.as_ref().and_then(Relationship::id)
    }

    pub fn stat_type_id(&self) -> Option<&str> {
        self.stat_type.as_ref().and_then(Relationship::id)
    }
}

/// JSON:API relationship object.
///
/// Only the to-one form links anything; `data` is `None` when it is null,
/// a to-many array, or an identifier without a usable id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<ResourceIdentifier>,
}

impl Relationship {
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    // Note: `type` is not checked; the relationship name already says what it points at
}

/// One entry of the shared `included` pool.
///
/// The `type` tag selects the attribute schema. Tags this crate does not
/// know about land in [`IncludedResource::Unrecognized`] and are ignored by
/// the graph builder.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IncludedResource {
    #[serde(rename = "new_player", alias = "player")]
    Player {
        #[serde(deserialize_with = "lenient::id")]
        id: String,
        #[serde(default, deserialize_with = "lenient::object_or_default")]
        attributes: PlayerAttributes,
    },
    #[serde(rename = "game")]
    Game {
        #[serde(deserialize_with = "lenient::id")]
        id: String,
        #[serde(default, deserialize_with = "lenient::object_or_default")]
        attributes: GameAttributes,
    },
    #[serde(rename = "league")]
    League {
        #[serde(deserialize_with = "lenient::id")]
        id: String,
        #[serde(default, deserialize_with = "lenient::object_or_default")]
        attributes: LeagueAttributes,
    },
    #[serde(rename = "stat_type")]
    StatType {
        #[serde(deserialize_with = "lenient::id")]
        id: String,
        #[serde(default, deserialize_with = "lenient::object_or_default")]
        attributes: StatTypeAttributes,
    },
    #[serde(other)]
    Unrecognized,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    #[serde(default, deserialize_with = "lenient::option")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub name: Option<String>,
    /// Team abbreviation, e.g. "LAL".
    #[serde(default, deserialize_with = "lenient::option")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub position: Option<String>,
    /// League code as the provider spells it on the player record.
    #[serde(default, deserialize_with = "lenient::option")]
    pub league: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameAttributes {
    #[serde(default, deserialize_with = "lenient::option")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueAttributes {
    #[serde(default, deserialize_with = "lenient::option")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTypeAttributes {
    #[serde(default, deserialize_with = "lenient::option")]
    pub name: Option<String>,
}

/// One full snapshot as returned by the provider.
///
/// Entries of `data` and `included` decode one at a time; an entry that
/// cannot be read at all (no id, not an object) is skipped with a warning
/// and the rest of the snapshot survives.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default, rename = "data", deserialize_with = "lenient::skip_invalid")]
    pub projections: Vec<RawProjection>,
    #[serde(default, deserialize_with = "lenient::skip_invalid")]
    pub included: Vec<IncludedResource>,
}
