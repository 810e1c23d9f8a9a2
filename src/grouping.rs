use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::fixtures::Fixture;
use crate::priorities::{league_priority, priority_order};

/// One league's fixtures for a view, keyed by (country, league).
#[derive(Debug, Clone, Serialize)]
pub struct FixtureGroup {
    pub country: String,
    pub league: String,
    pub fixtures: Vec<Fixture>,
}

impl FixtureGroup {
    /// Sum of predictions across the group. On market views the fixtures are
    /// pre-trimmed to qualifying predictions, so this is the qualifying count.
    pub fn prediction_count(&self) -> usize {
        self.fixtures.iter().map(|f| f.predictions.len()).sum()
    }
}

/// Collect fixtures into (country, league) groups, in first-seen order.
/// All sorts below are stable, so ties that survive every comparator tier
/// keep this encounter order.
fn collect_groups(fixtures: &[Fixture]) -> Vec<FixtureGroup> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<FixtureGroup> = Vec::new();

    for fixture in fixtures {
        let key = (fixture.country.clone(), fixture.league.clone());
        match index.get(&key) {
            Some(&at) => groups[at].fixtures.push(fixture.clone()),
            None => {
                index.insert(key, groups.len());
                groups.push(FixtureGroup {
                    country: fixture.country.clone(),
                    league: fixture.league.clone(),
                    fixtures: vec![fixture.clone()],
                });
            }
        }
    }

    groups
}

fn alphabetical(a: &FixtureGroup, b: &FixtureGroup) -> Ordering {
    a.country.cmp(&b.country).then_with(|| a.league.cmp(&b.league))
}

/// Board and country views: pinned leagues first, then configured priority
/// order, then country/league alphabetical.
pub fn group_for_board(fixtures: &[Fixture], pinned: &HashSet<String>) -> Vec<FixtureGroup> {
    let mut groups = collect_groups(fixtures);
    groups.sort_by(|a, b| {
        let a_pinned = pinned.contains(&a.league);
        let b_pinned = pinned.contains(&b.league);
        b_pinned
            .cmp(&a_pinned)
            .then_with(|| priority_order(league_priority(&a.league), league_priority(&b.league)))
            .then_with(|| alphabetical(a, b))
    });
    groups
}

/// Market views: fixtures with the most qualifying predictions first, inside
/// each group and across groups. Count ties fall back to priority order and
/// then alphabetical; pinning does not apply here.
pub fn group_for_market(fixtures: &[Fixture]) -> Vec<FixtureGroup> {
    let mut ordered = fixtures.to_vec();
    ordered.sort_by(|a, b| b.predictions.len().cmp(&a.predictions.len()));

    let mut groups = collect_groups(&ordered);
    groups.sort_by(|a, b| {
        b.prediction_count()
            .cmp(&a.prediction_count())
            .then_with(|| priority_order(league_priority(&a.league), league_priority(&b.league)))
            .then_with(|| alphabetical(a, b))
    });
    groups
}

/// Model views: plain country then league alphabetical ordering.
pub fn group_alphabetical(fixtures: &[Fixture]) -> Vec<FixtureGroup> {
    let mut groups = collect_groups(fixtures);
    groups.sort_by(alphabetical);
    groups
}
