//! Lineup Rules: pure eligibility checks for fantasy baseball lineups
//!
//! A lineup is eligible when it stays under the salary cap, draws at most
//! three players from any one game and two from any one team, and fills
//! every position slot exactly. All checks are pure functions over a
//! borrowed roster; nothing is cached or shared between calls.
//!
//! # Core Concepts
//!
//! - **Aggregates**: counts by game, team and position, plus total salary
//! - **Rules**: one `violates_*` predicate per eligibility rule
//! - **Enforcement**: every violation at once via Stillwater's `Validation`
//!
//! # Example
//!
//! ```rust
//! use lineup_rules::core::{PlayerEntry, Position};
//! use lineup_rules::validate_lineup;
//!
//! let roster = vec![
//!     PlayerEntry::new(1i64, "Chris Sale", Position::Pitcher, 12i64, 123i64, 9500),
//!     PlayerEntry::new(2i64, "Yadier Molina", Position::Catcher, 22i64, 115i64, 2500),
//!     PlayerEntry::new(3i64, "Luke Voit", Position::FirstBase, 20i64, 115i64, 2800),
//!     PlayerEntry::new(4i64, "Dee Gordon", Position::SecondBase, 18i64, 101i64, 3200),
//!     PlayerEntry::new(5i64, "Manny Machado", Position::ThirdBase, 14i64, 134i64, 3100),
//!     PlayerEntry::new(6i64, "Troy Tulowitzki", Position::Shortstop, 27i64, 126i64, 3300),
//!     PlayerEntry::new(7i64, "Andrew McCutchen", Position::Outfield, 11i64, 131i64, 3800),
//!     PlayerEntry::new(8i64, "Bryce Harper", Position::Outfield, 15i64, 119i64, 3800),
//!     PlayerEntry::new(9i64, "Mookie Betts", Position::Outfield, 12i64, 123i64, 3600),
//! ];
//!
//! assert!(validate_lineup(&roster));
//! ```

pub mod aggregate;
pub mod core;
pub mod enforcement;
pub mod roster;
pub mod validate;

// Re-export commonly used types
pub use aggregate::{
    count_by_game, count_by_position, count_by_team, total_salary, CountMap, LineupSummary,
};
pub use self::core::{EntityId, PlayerEntry, Position, Roster};
pub use enforcement::{LineupRules, RuleKind, RuleViolation, RulesBuilder};
pub use roster::RosterError;
pub use validate::{
    validate_lineup, violates_game_count, violates_position_count, violates_salary,
    violates_team_count,
};
