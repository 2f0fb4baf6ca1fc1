//! Sessions: round state, ledger and checkpoints.
//!
//! `RoundController` replaces per-game global state with one owned value.
//! It draws targets, takes build edits, submits builds to the evaluator
//! and keeps the books.

pub mod controller;
pub mod ledger;
pub mod snapshot;

pub use controller::{RoundController, RoundState};
pub use ledger::{EndReason, Ledger, RoundRecord, SessionStatus};
pub use snapshot::SessionSnapshot;
