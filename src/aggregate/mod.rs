//! Reduction of a roster into per-dimension counts and a salary total.
//!
//! Every function here is total: the empty roster yields empty maps and a
//! zero salary. Iteration order never changes a result.

use crate::core::{EntityId, PlayerEntry, Position};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// Number of entries sharing each key.
pub type CountMap<K> = HashMap<K, usize>;

fn count_by<K, F>(roster: &[PlayerEntry], key: F) -> CountMap<K>
where
    K: Eq + Hash,
    F: Fn(&PlayerEntry) -> K,
{
    roster.iter().fold(HashMap::new(), |mut counts, entry| {
        *counts.entry(key(entry)).or_insert(0) += 1;
        counts
    })
}

/// Count entries per game.
pub fn count_by_game(roster: &[PlayerEntry]) -> CountMap<EntityId> {
    count_by(roster, |entry| entry.game_id.clone())
}

/// Count entries per team.
pub fn count_by_team(roster: &[PlayerEntry]) -> CountMap<EntityId> {
    count_by(roster, |entry| entry.team_id.clone())
}

/// Count entries per position. Positions nobody fills are absent.
pub fn count_by_position(roster: &[PlayerEntry]) -> CountMap<Position> {
    count_by(roster, |entry| entry.position)
}

/// Sum of every entry's salary.
pub fn total_salary(roster: &[PlayerEntry]) -> u64 {
    roster.iter().map(|entry| u64::from(entry.salary)).sum()
}

/// All aggregates of a roster, computed in one place.
///
/// `games` and `teams` serialize as `[id, count]` pairs sorted by id, so
/// `12` and `"12"` stay distinct keys in the output.
///
/// # Example
///
/// ```rust
/// use lineup_rules::aggregate::LineupSummary;
/// use lineup_rules::core::{PlayerEntry, Position};
///
/// let roster = vec![
///     PlayerEntry::new(1i64, "Chris Sale", Position::Pitcher, 22i64, 123i64, 9500),
///     PlayerEntry::new(2i64, "Bryce Harper", Position::Outfield, 12i64, 119i64, 3800),
/// ];
///
/// let summary = LineupSummary::from_roster(&roster);
/// assert_eq!(summary.total_salary, 13300);
/// assert_eq!(summary.entry_count, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineupSummary {
    #[serde(serialize_with = "serialize_id_counts")]
    pub games: CountMap<EntityId>,
    #[serde(serialize_with = "serialize_id_counts")]
    pub teams: CountMap<EntityId>,
    pub positions: CountMap<Position>,
    pub total_salary: u64,
    pub entry_count: usize,
}

impl LineupSummary {
    pub fn from_roster(roster: &[PlayerEntry]) -> Self {
        let summary = Self {
            games: count_by_game(roster),
            teams: count_by_team(roster),
            positions: count_by_position(roster),
            total_salary: total_salary(roster),
            entry_count: roster.len(),
        };

        tracing::trace!(
            entries = summary.entry_count,
            games = summary.games.len(),
            teams = summary.teams.len(),
            total_salary = summary.total_salary,
            "aggregated lineup"
        );

        summary
    }
}

fn serialize_id_counts<S>(counts: &CountMap<EntityId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut pairs: Vec<(&EntityId, &usize)> = counts.iter().collect();
    pairs.sort();
    serializer.collect_seq(pairs)
}
