//! Roster positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A roster slot a player can occupy.
///
/// Serializes to the abbreviations used in contest data (`"P"`, `"1B"`,
/// `"OF"`, ...).
///
/// # Example
///
/// ```rust
/// use lineup_rules::core::Position;
///
/// let position: Position = "1B".parse().unwrap();
/// assert_eq!(position, Position::FirstBase);
/// assert_eq!(position.abbreviation(), "1B");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "OF")]
    Outfield,
}

impl Position {
    /// Every position, in slot order.
    pub const ALL: [Position; 7] = [
        Self::Pitcher,
        Self::Catcher,
        Self::FirstBase,
        Self::SecondBase,
        Self::ThirdBase,
        Self::Shortstop,
        Self::Outfield,
    ];

    /// Contest abbreviation for this position.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::Outfield => "OF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Returned when a string is not one of the known position abbreviations.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown position: {0:?}")]
pub struct PositionParseError(pub String);

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.abbreviation() == s)
            .ok_or_else(|| PositionParseError(s.to_string()))
    }
}
