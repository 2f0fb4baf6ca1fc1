//! In-memory session checkpoints.
//!
//! A snapshot captures everything mutable about a session: RNG position,
//! the current round, the ledger and the history. The game definition is
//! not included; `RoundController::restore` takes it separately and checks
//! the name matches.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::controller::RoundState;
use super::ledger::{Ledger, RoundRecord, SessionStatus};
use crate::core::SessionRngState;
use crate::error::LabError;

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Name of the game this session was playing.
    pub game: String,
    pub rng: SessionRngState,
    pub state: RoundState,
    pub ledger: Ledger,
    pub history: Vector<RoundRecord>,
    pub status: SessionStatus,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LabError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LabError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
