//! Rule evaluation: requirements, targets, verdicts.
//!
//! Targets describe what a round asks for as a list of tagged
//! `Requirement`s plus a `Payout` and `Penalty`. `RuleEvaluator` checks a
//! build against one target and always returns a `Verdict`.

pub mod evaluator;
pub mod payout;
pub mod requirement;
pub mod target;
pub mod verdict;

pub use evaluator::RuleEvaluator;
pub use payout::{select_tier, Payout, Penalty, ScoreTerm, Tier};
pub use requirement::{Matcher, Measure, Operand, Requirement, RequirementKind};
pub use target::{TargetCatalog, TargetId, TargetSpec, MAX_TARGETS};
pub use verdict::{FailureReason, Outcome, Side, Verdict};
