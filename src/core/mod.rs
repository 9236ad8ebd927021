//! Core lineup data model.
//!
//! This module contains the plain values the rules operate on:
//! - `Position` for the closed set of roster slots
//! - `EntityId` for opaque player, team and game identifiers
//! - `PlayerEntry` for one roster slot occupant
//!
//! Nothing here is validated at construction. A `Roster` may hold any
//! number of entries with any mix of positions; the enforcement layer
//! decides whether that mix is eligible.

mod entry;
mod position;

pub use entry::{EntityId, PlayerEntry, Roster};
pub use position::{Position, PositionParseError};
