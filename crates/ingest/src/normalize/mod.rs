//! Projection normalization.
//!
//! Joins each sparse projection against the [`ResourceGraph`] and flattens
//! it into a [`NormalizedProp`]. Missing relationships never fail; they
//! degrade to the placeholders defined in [`rules`].

pub mod rules;

use crate::clock::Clock;
use crate::graph::ResourceGraph;
use crate::models::{NormalizedProp, RawProjection, PRIZEPICKS_SOURCE};
use crate::sport::map_sport_code;

use rules::{Resolved, GAME_LABEL, PLAYER_NAME, STAT_TYPE};

/// Builds the output id for a raw projection id.
pub fn prop_id(projection_id: &str) -> String {
    format!("{}_{}", PRIZEPICKS_SOURCE, projection_id)
}

/// Normalizes projections against one snapshot's graph.
pub struct ProjectionNormalizer<'a> {
    graph: &'a ResourceGraph,
    clock: &'a dyn Clock,
}

impl<'a> ProjectionNormalizer<'a> {
    pub fn new(graph: &'a ResourceGraph, clock: &'a dyn Clock) -> Self {
        Self { graph, clock }
    }

    /// Resolve a projection's relationships through the graph.
    pub fn resolve<'p>(&self, projection: &'p RawProjection) -> Resolved<'p>
    where
        'a: 'p,
    {
        let links = &projection.relationships;
        Resolved {
            projection,
            player: self.graph.player(links.player_id()),
            game: self.graph.game(links.game_id()),
            league: self.graph.league(links.league_id()),
            stat_type: self.graph.stat_type(links.stat_type_id()),
        }
    }

    /// Flatten one projection.
    ///
    /// Returns `None` when the projection has no line; that is the only
    /// record-level filter in the pipeline.
    pub fn normalize(&self, projection: &RawProjection) -> Option<NormalizedProp> {
        let stat_value = projection.attributes.line_score?;
        let resolved = self.resolve(projection);

        let prop = NormalizedProp::new(
            prop_id(&projection.id),
            PLAYER_NAME.resolve(&resolved),
            map_sport_code(rules::league_code(&resolved)),
            STAT_TYPE.resolve(&resolved),
            stat_value,
            GAME_LABEL.resolve(&resolved),
            self.clock.now(),
        )
        .with_start_time(rules::start_time(&resolved));

        Some(prop)
    }

    /// Flatten every projection, silently dropping those without a line.
    pub fn normalize_all(&self, projections: &[RawProjection]) -> Vec<NormalizedProp> {
        projections
            .iter()
            .filter_map(|projection| self.normalize(projection))
            .collect()
    }
}
