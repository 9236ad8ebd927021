//! Validation-based enforcement of lineup eligibility rules.
//!
//! Each rule is available as a standalone `violates_*` predicate on
//! `LineupRules`. For diagnostics, `LineupRules::enforce` runs every rule
//! and uses Stillwater's `Validation` to accumulate ALL violations instead
//! of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use lineup_rules::core::{PlayerEntry, Position};
//! use lineup_rules::enforcement::{LineupRules, RuleKind};
//! use stillwater::validation::Validation;
//!
//! let rules = LineupRules::builder().salary_cap(10_000).build();
//! let roster = vec![
//!     PlayerEntry::new(1i64, "Chris Sale", Position::Pitcher, 22i64, 123i64, 9500),
//!     PlayerEntry::new(2i64, "Bryce Harper", Position::Outfield, 12i64, 119i64, 3800),
//! ];
//!
//! match rules.enforce(&roster) {
//!     Validation::Failure(violations) => {
//!         assert!(violations.iter().any(|v| v.kind() == RuleKind::Salary));
//!         assert!(violations.iter().any(|v| v.kind() == RuleKind::PositionCount));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::RulesBuilder;
pub use rules::{
    LineupRules, MAX_PLAYERS_PER_GAME, MAX_PLAYERS_PER_TEAM, REQUIRED_SLOTS, SALARY_CAP,
};
pub use violations::{RuleKind, RuleViolation};
