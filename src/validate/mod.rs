//! Standard contest validation.
//!
//! Free functions applying one shared `LineupRules::default()`: salary cap 45000, at
//! most 3 entries per game, at most 2 per team, and exactly
//! P, C, 1B, 2B, 3B, SS plus three OF.

use crate::aggregate::CountMap;
use crate::core::{EntityId, PlayerEntry, Position};
use crate::enforcement::LineupRules;
use lazy_static::lazy_static;

lazy_static! {
    static ref STANDARD_RULES: LineupRules = LineupRules::default();
}

/// True if any game contributes more than 3 entries.
pub fn violates_game_count(games: &CountMap<EntityId>) -> bool {
    STANDARD_RULES.violates_game_count(games)
}

/// True if any team contributes more than 2 entries.
pub fn violates_team_count(teams: &CountMap<EntityId>) -> bool {
    STANDARD_RULES.violates_team_count(teams)
}

/// True unless every position has exactly its required count.
pub fn violates_position_count(positions: &CountMap<Position>) -> bool {
    STANDARD_RULES.violates_position_count(positions)
}

/// True if the total salary is above 45000.
pub fn violates_salary(roster: &[PlayerEntry]) -> bool {
    STANDARD_RULES.violates_salary(roster)
}

/// Check a lineup against every standard rule.
///
/// # Example
///
/// ```rust
/// use lineup_rules::core::{PlayerEntry, Position};
/// use lineup_rules::validate_lineup;
///
/// let roster = vec![PlayerEntry::new(1i64, "Chris Sale", Position::Pitcher, 12i64, 123i64, 9500)];
/// assert!(!validate_lineup(&roster));
/// ```
pub fn validate_lineup(roster: &[PlayerEntry]) -> bool {
    STANDARD_RULES.is_valid(roster)
}
