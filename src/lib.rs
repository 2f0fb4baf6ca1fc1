//! # lab-rules
//!
//! A rule-matching and scoring engine for lab-simulation mini-games.
//!
//! Each game offers a catalog of options grouped into slots. The player
//! assembles a build (one option per slot, or a pool of several), may turn
//! a few numeric dials, and submits the build against a target. The engine
//! decides success or failure, explains why, and settles the score.
//!
//! ## Design Principles
//!
//! 1. **Data, not code**: Games are declared as `GameDefinition` values
//!    (slots, options with free-form attributes, targets with requirement
//!    lists). Adding a game never touches the evaluator.
//!
//! 2. **Pure evaluation**: `RuleEvaluator::evaluate` is a function of the
//!    build and the target. All randomness and mutable session state live
//!    in `RoundController`.
//!
//! 3. **Integers throughout**: Attributes, dials and scores are `i64`.
//!    Fractional quantities are stored in scaled units (centivolts, cents).
//!
//! ## Modules
//!
//! - `core`: Slot and session configuration, deterministic RNG
//! - `options`: Option definitions, attributes, registry
//! - `build`: Player builds, aggregation, completeness checks
//! - `rules`: Requirements, targets, payouts, the evaluator
//! - `round`: Session controller, ledger, snapshots
//! - `games`: The bundled game catalogs

pub mod core;
pub mod options;
pub mod build;
pub mod rules;
pub mod round;
pub mod games;
pub mod error;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    AdvancePolicy, BuildRules, CheckOrder, DialConfig, DialSource, GameConfig, Rank, ReportMode,
    SessionRng, SessionRules, SlotConfig, SlotId, SlotMode,
};

pub use crate::options::{AttributeKey, AttributeValue, OptionDef, OptionId, OptionRegistry};

pub use crate::build::{validate, Aggregate, Build, IncompleteReason, Pick};

pub use crate::rules::{
    FailureReason, Matcher, Measure, Operand, Outcome, Payout, Penalty, Requirement,
    RuleEvaluator, ScoreTerm, TargetCatalog, TargetId, TargetSpec, Tier, Verdict,
};

pub use crate::round::{
    EndReason, Ledger, RoundController, RoundRecord, RoundState, SessionSnapshot, SessionStatus,
};

pub use crate::games::GameDefinition;

pub use crate::error::LabError;
