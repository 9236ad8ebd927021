//! Player entries and the identifiers that group them.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a player, team or game.
///
/// Contest feeds use either integers or strings for these. The two forms
/// are never coerced into each other: `12` and `"12"` are different keys.
/// Ordering exists only so reports can list keys deterministically.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One roster slot occupant.
///
/// Field names follow the contest feed (`teamId`, `gameId`) when
/// serialized.
///
/// # Example
///
/// ```rust
/// use lineup_rules::core::{EntityId, PlayerEntry, Position};
///
/// let entry = PlayerEntry::new(1i64, "Chris Sale", Position::Pitcher, 22i64, 123i64, 9500);
/// assert_eq!(entry.team_id, EntityId::Number(22));
/// assert_eq!(entry.salary, 9500);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    /// Not checked for uniqueness; feeds may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// Display only; never read by the rules
    #[serde(default)]
    pub name: String,
    pub position: Position,
    pub team_id: EntityId,
    pub game_id: EntityId,
    pub salary: u32,
}

impl PlayerEntry {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        position: Position,
        team_id: impl Into<EntityId>,
        game_id: impl Into<EntityId>,
        salary: u32,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            position,
            team_id: team_id.into(),
            game_id: game_id.into(),
            salary,
        }
    }
}

/// An owned lineup. Rule functions borrow it as `&[PlayerEntry]`.
pub type Roster = Vec<PlayerEntry>;
