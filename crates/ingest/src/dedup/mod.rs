//! Tier deduplication.
//!
//! PrizePicks publishes one logical line several times at different
//! difficulty tiers (goblin < standard < demon). All variants share the
//! player/stat/sport/game identity and differ only in the line value.
//! This module keeps exactly one record per identity.
//!
//! # Selection rule
//!
//! | Group size | Kept record |
//! |------------|-------------|
//! | 1 | The sole member |
//! | 2+ | Second-smallest line (index 1 after an ascending stable sort) |
//!
//! With three tiers this is the standard line. With two tiers it is the
//! *larger* line, and with four or more it is the second-smallest whatever
//! the provider labelled it. The payload carries no tier label to select
//! by, so both cases are kept as-is rather than guessed at.

use std::collections::HashMap;
use std::fmt;

use crate::models::NormalizedProp;
use crate::sink::LogSink;

/// Identity shared by every tier of one logical line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TierKey {
    pub player_name: String,
    pub stat_type: String,
    pub sport: String,
    pub game: String,
}

impl TierKey {
    pub fn of(prop: &NormalizedProp) -> Self {
        Self {
            player_name: prop.player_name.clone(),
            stat_type: prop.stat_type.clone(),
            sport: prop.sport.clone(),
            game: prop.game.clone(),
        }
    }
}

/// Counts from one dedup pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DedupReport {
    /// Records before deduplication.
    pub raw: usize,
    /// Records kept (one per identity).
    pub kept: usize,
    /// Tier variants removed.
    pub removed: usize,
}

impl fmt::Display for DedupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deduplicated {} props to {} ({} tier variants removed)",
            self.raw, self.kept, self.removed
        )
    }
}

/// Group props by [`TierKey`], preserving first-seen order of the groups.
pub fn group_by_tier(props: Vec<NormalizedProp>) -> Vec<(TierKey, Vec<NormalizedProp>)> {
    let mut index: HashMap<TierKey, usize> = HashMap::new();
    let mut groups: Vec<(TierKey, Vec<NormalizedProp>)> = Vec::new();

    for prop in props {
        let key = TierKey::of(&prop);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(prop),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![prop]));
            }
        }
    }

    groups
}

/// Pick the canonical record of one tier group.
///
/// Returns `None` only for an empty group.
pub fn select_canonical(mut group: Vec<NormalizedProp>) -> Option<NormalizedProp> {
    if group.len() < 2 {
        return group.pop();
    }

    group.sort_by(|a, b| a.stat_value.cmp(&b.stat_value));
    Some(group.swap_remove(1))
}

/// Collapse tier variants, returning the kept records and the pass counts.
pub fn dedupe(props: Vec<NormalizedProp>) -> (Vec<NormalizedProp>, DedupReport) {
    let raw = props.len();

    let kept: Vec<NormalizedProp> = group_by_tier(props)
        .into_iter()
        .filter_map(|(_, group)| select_canonical(group))
        .collect();

    let report = DedupReport {
        raw,
        kept: kept.len(),
        removed: raw - kept.len(),
    };

    (kept, report)
}

/// Deduplicates tiers and reports a summary line to a sink.
pub struct TierDeduplicator<'a> {
    sink: &'a dyn LogSink,
}

impl<'a> TierDeduplicator<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self { sink }
    }

    pub fn run(&self, props: Vec<NormalizedProp>) -> Vec<NormalizedProp> {
        let (kept, report) = dedupe(props);
        self.sink.log(&report.to_string());
        kept
    }
}
