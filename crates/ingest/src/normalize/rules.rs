//! Ordered extraction rules for the normalizer's fallback chains.
//!
//! Each chain is a slice of rules tried in order; the first rule yielding a
//! non-blank value wins and the chain's placeholder covers the rest.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::models::{
    GameAttributes, LeagueAttributes, PlayerAttributes, RawProjection, StatTypeAttributes,
};

/// Placeholder for unresolved player names and stat types.
pub const UNKNOWN: &str = "Unknown";

/// Suffix appended to a team abbreviation to synthesize a game label.
pub const GAME_SUFFIX: &str = " Game";

/// A projection with its relationships already resolved against the graph.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    pub projection: &'a RawProjection,
    pub player: &'a PlayerAttributes,
    pub game: &'a GameAttributes,
    pub league: &'a LeagueAttributes,
    pub stat_type: &'a StatTypeAttributes,
}

/// One step of a fallback chain.
pub type Rule = for<'a> fn(&Resolved<'a>) -> Option<Cow<'a, str>>;

/// Rules plus the value used when none of them match.
pub struct Fallback {
    pub rules: &'static [Rule],
    pub placeholder: &'static str,
}

impl Fallback {
    /// Evaluate the chain, returning the first non-blank value (trimmed).
    pub fn resolve(&self, resolved: &Resolved<'_>) -> String {
        first_match(self.rules, resolved)
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| self.placeholder.to_string())
    }
}

pub fn first_match<'a>(rules: &[Rule], resolved: &Resolved<'a>) -> Option<Cow<'a, str>> {
    rules
        .iter()
        .filter_map(|rule| rule(resolved))
        .find(|value| !value.trim().is_empty())
}

fn text(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

// ============================================================================
// Player name
// ============================================================================

fn player_display_name<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.player.display_name)
}

fn player_name<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.player.name)
}

pub const PLAYER_NAME: Fallback = Fallback {
    rules: &[player_display_name, player_name],
    placeholder: UNKNOWN,
};

// ============================================================================
// Stat type
// ============================================================================

fn projection_stat_type<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.projection.attributes.stat_type)
}

fn projection_stat_display_name<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.projection.attributes.stat_display_name)
}

fn stat_type_resource_name<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.stat_type.name)
}

pub const STAT_TYPE: Fallback = Fallback {
    rules: &[
        projection_stat_type,
        projection_stat_display_name,
        stat_type_resource_name,
    ],
    placeholder: UNKNOWN,
};

// ============================================================================
// Game label
// ============================================================================

fn projection_description<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.projection.attributes.description)
}

fn game_name<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.game.name)
}

fn team_game<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    r.player
        .team
        .as_deref()
        .map(str::trim)
        .filter(|team| !team.is_empty())
        .map(|team| Cow::Owned(format!("{}{}", team, GAME_SUFFIX)))
}

pub const GAME_LABEL: Fallback = Fallback {
    rules: &[projection_description, game_name, team_game],
    placeholder: "Unknown Game",
};

// ============================================================================
// League code / start time
// ============================================================================

/// League code as published by the provider, or empty when unresolved.
pub fn league_code<'a>(r: &Resolved<'a>) -> &'a str {
    r.league.name.as_deref().map(str::trim).unwrap_or("")
}

fn projection_start_time<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.projection.attributes.start_time)
}

fn game_start_time<'a>(r: &Resolved<'a>) -> Option<Cow<'a, str>> {
    text(&r.game.start_time)
}

const START_TIME_RULES: &[Rule] = &[projection_start_time, game_start_time];

/// First start time that parses as RFC 3339, normalized to UTC.
pub fn start_time(r: &Resolved<'_>) -> Option<DateTime<Utc>> {
    START_TIME_RULES
        .iter()
        .filter_map(|rule| rule(r))
        .find_map(|value| DateTime::parse_from_rfc3339(value.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
