//! Builder API for customizing lineup rules.

use crate::core::Position;
use crate::enforcement::rules::LineupRules;

/// Builder for `LineupRules`.
///
/// Starts from the standard contest rules; each call overrides one limit.
pub struct RulesBuilder {
    rules: LineupRules,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self {
            rules: LineupRules::default(),
        }
    }

    /// Set the maximum total salary
    pub fn salary_cap(mut self, cap: u64) -> Self {
        self.rules.salary_cap = cap;
        self
    }

    /// Set the maximum number of entries from one game
    pub fn max_per_game(mut self, max: usize) -> Self {
        self.rules.max_per_game = max;
        self
    }

    /// Set the maximum number of entries from one team
    pub fn max_per_team(mut self, max: usize) -> Self {
        self.rules.max_per_team = max;
        self
    }

    /// Require exactly `count` entries at `position`. Zero forbids the position.
    pub fn slot(mut self, position: Position, count: usize) -> Self {
        self.rules.slots.insert(position, count);
        self
    }

    pub fn build(self) -> LineupRules {
        self.rules
    }
}

impl Default for RulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
