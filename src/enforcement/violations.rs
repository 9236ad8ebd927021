//! Rule violations reported by lineup enforcement.

use crate::core::{EntityId, Position};
use serde::Serialize;
use thiserror::Error;

/// A single broken eligibility rule
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
pub enum RuleViolation {
    #[error("Game {game_id} has {count} players (max {max})")]
    GameLimitExceeded {
        game_id: EntityId,
        count: usize,
        max: usize,
    },

    #[error("Team {team_id} has {count} players (max {max})")]
    TeamLimitExceeded {
        team_id: EntityId,
        count: usize,
        max: usize,
    },

    #[error("Position {position} has {count} players (requires {required})")]
    PositionSlotMismatch {
        position: Position,
        count: usize,
        required: usize,
    },

    #[error("Total salary {total} exceeds cap {cap}")]
    SalaryCapExceeded { total: u64, cap: u64 },
}

/// The rule a violation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    GameCount,
    TeamCount,
    PositionCount,
    Salary,
}

impl RuleViolation {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::GameLimitExceeded { .. } => RuleKind::GameCount,
            Self::TeamLimitExceeded { .. } => RuleKind::TeamCount,
            Self::PositionSlotMismatch { .. } => RuleKind::PositionCount,
            Self::SalaryCapExceeded { .. } => RuleKind::Salary,
        }
    }
}
