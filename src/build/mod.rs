//! Builds: what the player has assembled for one attempt.
//!
//! - `Build`: picked options plus dial settings
//! - `Aggregate`: per-key sums over a build
//! - `validate`: shape checks that decide whether a build can be scored

pub mod aggregate;
pub mod picks;
pub mod validate;

pub use aggregate::{Aggregate, COST};
pub use picks::{Build, Pick};
pub use validate::{validate, IncompleteReason};
