//! Decoding rosters from contest feed JSON.
//!
//! An entry missing `position`, `salary`, `teamId` or `gameId` is malformed
//! and rejects the whole roster: rules never see a partially decoded
//! lineup. `id` and `name` are never read by the rules and may be omitted.

use crate::core::{PlayerEntry, Roster};
use serde_json::Value;

pub mod error;

pub use error::RosterError;

/// Decode a roster from a JSON string.
///
/// # Example
///
/// ```rust
/// use lineup_rules::roster;
///
/// let json = r#"[
///     {"id": 1, "name": "Chris Sale", "position": "P", "teamId": 22, "gameId": 123, "salary": 9500}
/// ]"#;
///
/// let lineup = roster::from_json_str(json).unwrap();
/// assert_eq!(lineup.len(), 1);
/// ```
pub fn from_json_str(json: &str) -> Result<Roster, RosterError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| RosterError::Parse(e.to_string()))?;
    from_json_value(value)
}

/// Decode a roster from an already parsed JSON value.
pub fn from_json_value(value: Value) -> Result<Roster, RosterError> {
    let Value::Array(items) = value else {
        return Err(RosterError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<PlayerEntry>(item).map_err(|e| {
                tracing::warn!(index, error = %e, "rejected roster entry");
                RosterError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}
