//! Lineup eligibility rules using Validation.

use crate::aggregate::{total_salary, CountMap, LineupSummary};
use crate::core::{EntityId, PlayerEntry, Position};
use crate::enforcement::builder::RulesBuilder;
use crate::enforcement::violations::RuleViolation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Maximum total salary of a standard lineup.
pub const SALARY_CAP: u64 = 45_000;

/// Maximum entries drawn from a single game.
pub const MAX_PLAYERS_PER_GAME: usize = 3;

/// Maximum entries drawn from a single team.
pub const MAX_PLAYERS_PER_TEAM: usize = 2;

/// Exact number of entries required at each position.
pub const REQUIRED_SLOTS: [(Position, usize); 7] = [
    (Position::Pitcher, 1),
    (Position::Catcher, 1),
    (Position::FirstBase, 1),
    (Position::SecondBase, 1),
    (Position::ThirdBase, 1),
    (Position::Shortstop, 1),
    (Position::Outfield, 3),
];

/// Limits a lineup must satisfy.
///
/// Every limit is inclusive: a count or salary equal to its limit passes.
/// The `violates_*` predicates answer one rule each; `enforce` runs all of
/// them and keeps every violation. Fields omitted from a serialized
/// config take the standard contest values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupRules {
    pub(crate) salary_cap: u64,
    pub(crate) max_per_game: usize,
    pub(crate) max_per_team: usize,
    pub(crate) slots: BTreeMap<Position, usize>,
}

impl Default for LineupRules {
    fn default() -> Self {
        Self {
            salary_cap: SALARY_CAP,
            max_per_game: MAX_PLAYERS_PER_GAME,
            max_per_team: MAX_PLAYERS_PER_TEAM,
            slots: REQUIRED_SLOTS.into_iter().collect(),
        }
    }
}

impl LineupRules {
    pub fn builder() -> RulesBuilder {
        RulesBuilder::new()
    }

    pub fn salary_cap(&self) -> u64 {
        self.salary_cap
    }

    pub fn max_per_game(&self) -> usize {
        self.max_per_game
    }

    pub fn max_per_team(&self) -> usize {
        self.max_per_team
    }

    /// Entries required at `position`; unlisted positions require none.
    pub fn required_count(&self, position: Position) -> usize {
        self.slots.get(&position).copied().unwrap_or(0)
    }

    pub fn violates_game_count(&self, games: &CountMap<EntityId>) -> bool {
        games.values().any(|&count| count > self.max_per_game)
    }

    pub fn violates_team_count(&self, teams: &CountMap<EntityId>) -> bool {
        teams.values().any(|&count| count > self.max_per_team)
    }

    /// A position missing from `positions` counts as zero.
    pub fn violates_position_count(&self, positions: &CountMap<Position>) -> bool {
        Position::ALL.into_iter().any(|position| {
            positions.get(&position).copied().unwrap_or(0) != self.required_count(position)
        })
    }

    pub fn violates_salary(&self, roster: &[PlayerEntry]) -> bool {
        total_salary(roster) > self.salary_cap
    }

    /// True iff no rule is violated. Aggregates are computed once.
    pub fn is_valid(&self, roster: &[PlayerEntry]) -> bool {
        let summary = LineupSummary::from_roster(roster);

        let valid = !self.violates_game_count(&summary.games)
            && !self.violates_salary_total(summary.total_salary)
            && !self.violates_team_count(&summary.teams)
            && !self.violates_position_count(&summary.positions);

        tracing::debug!(entries = summary.entry_count, valid, "validated lineup");
        valid
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success with the lineup's summary if every rule holds.
    /// Returns Validation::Failure with every violation otherwise.
    pub fn enforce(
        &self,
        roster: &[PlayerEntry],
    ) -> Validation<LineupSummary, NonEmptyVec<RuleViolation>> {
        let summary = LineupSummary::from_roster(roster);
        let mut checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = Vec::new();

        for (game_id, count) in over_limit(&summary.games, self.max_per_game) {
            checks.push(Validation::fail(RuleViolation::GameLimitExceeded {
                game_id,
                count,
                max: self.max_per_game,
            }));
        }

        for (team_id, count) in over_limit(&summary.teams, self.max_per_team) {
            checks.push(Validation::fail(RuleViolation::TeamLimitExceeded {
                team_id,
                count,
                max: self.max_per_team,
            }));
        }

        for position in Position::ALL {
            let count = summary.positions.get(&position).copied().unwrap_or(0);
            let required = self.required_count(position);
            let check = if count != required {
                Validation::fail(RuleViolation::PositionSlotMismatch {
                    position,
                    count,
                    required,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let check = if self.violates_salary_total(summary.total_salary) {
            Validation::fail(RuleViolation::SalaryCapExceeded {
                total: summary.total_salary,
                cap: self.salary_cap,
            })
        } else {
            Validation::success(())
        };
        checks.push(check);

        match Validation::all_vec(checks) {
            Validation::Success(_) => Validation::Success(summary),
            Validation::Failure(errors) => {
                tracing::debug!(violations = errors.len(), "lineup rejected");
                Validation::Failure(errors)
            }
        }
    }

    fn violates_salary_total(&self, total: u64) -> bool {
        total > self.salary_cap
    }
}

/// Keys whose count exceeds `max`, sorted by key.
fn over_limit(counts: &CountMap<EntityId>, max: usize) -> Vec<(EntityId, usize)> {
    let mut offenders: Vec<(EntityId, usize)> = counts
        .iter()
        .filter(|(_, count)| **count > max)
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    offenders.sort();
    offenders
}
