//! Typed lookup tables over the feed's `included` pool.
//!
//! The graph is built once per snapshot and read-only afterwards. Lookups
//! never fail: an absent or unknown id resolves to an empty attribute set.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{
    GameAttributes, IncludedResource, LeagueAttributes, PlayerAttributes, StatTypeAttributes,
};

static EMPTY_PLAYER: PlayerAttributes = PlayerAttributes {
    display_name: None,
    name: None,
    team: None,
    team_name: None,
    position: None,
    league: None,
};

static EMPTY_GAME: GameAttributes = GameAttributes {
    name: None,
    start_time: None,
    status: None,
};

static EMPTY_LEAGUE: LeagueAttributes = LeagueAttributes { name: None };

static EMPTY_STAT_TYPE: StatTypeAttributes = StatTypeAttributes { name: None };

/// Resource id -> attributes, one map per resource kind.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResourceGraph {
    players: HashMap<String, PlayerAttributes>,
    games: HashMap<String, GameAttributes>,
    leagues: HashMap<String, LeagueAttributes>,
    stat_types: HashMap<String, StatTypeAttributes>,
}

impl ResourceGraph {
    /// Index the included pool by kind and id.
    ///
    /// Unrecognized kinds are skipped. A later resource with the same id and
    /// kind replaces the earlier one.
    pub fn build(included: &[IncludedResource]) -> Self {
        let mut graph = Self::default();

        for resource in included {
            match resource {
                IncludedResource::Player { id, attributes } => {
                    graph.players.insert(id.clone(), attributes.clone());
                }
                IncludedResource::Game { id, attributes } => {
                    graph.games.insert(id.clone(), attributes.clone());
                }
                IncludedResource::League { id, attributes } => {
                    graph.leagues.insert(id.clone(), attributes.clone());
                }
                IncludedResource::StatType { id, attributes } => {
                    graph.stat_types.insert(id.clone(), attributes.clone());
                }
                IncludedResource::Unrecognized => {}
            }
        }

        graph
    }

    pub fn player(&self, id: Option<&str>) -> &PlayerAttributes {
        id.and_then(|id| self.players.get(id))
            .unwrap_or(&EMPTY_PLAYER)
    }

    pub fn game(&self, id: Option<&str>) -> &GameAttributes {
        id.and_then(|id| self.games.get(id)).unwrap_or(&EMPTY_GAME)
    }

    pub fn league(&self, id: Option<&str>) -> &LeagueAttributes {
        id.and_then(|id| self.leagues.get(id))
            .unwrap_or(&EMPTY_LEAGUE)
    }

    pub fn stat_type(&self, id: Option<&str>) -> &StatTypeAttributes {
        id.and_then(|id| self.stat_types.get(id))
            .unwrap_or(&EMPTY_STAT_TYPE)
    }

    /// Number of distinct players in the snapshot.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of distinct games in the snapshot.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn league_count(&self) -> usize {
        self.leagues.len()
    }

    pub fn stat_type_count(&self) -> usize {
        self.stat_types.len()
    }

    pub fn players(&self) -> &HashMap<String, PlayerAttributes> {
        &self.players
    }

    pub fn games(&self) -> &HashMap<String, GameAttributes> {
        &self.games
    }

    pub fn leagues(&self) -> &HashMap<String, LeagueAttributes> {
        &self.leagues
    }

    pub fn stat_types(&self) -> &HashMap<String, StatTypeAttributes> {
        &self.stat_types
    }
}
