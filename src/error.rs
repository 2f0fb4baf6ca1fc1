//! Error type for catalog construction, controller actions and snapshots.
//!
//! Evaluating a build never produces an error: an invalid build yields an
//! `Outcome::Incomplete` verdict instead. `LabError` covers everything
//! around the evaluator that can genuinely go wrong.

use thiserror::Error;

use crate::core::SlotId;
use crate::options::{AttributeKey, OptionId};

/// Errors raised outside of rule evaluation.
#[derive(Error, Debug)]
pub enum LabError {
    #[error("unknown option {0}")]
    UnknownOption(OptionId),

    #[error("unknown slot {0}")]
    UnknownSlot(SlotId),

    #[error("unknown dial {0}")]
    UnknownDial(AttributeKey),

    #[error("dial {0} is derived and cannot be set directly")]
    DialLocked(AttributeKey),

    #[error("build is full: at most {max} options")]
    BuildFull { max: usize },

    #[error("session is over")]
    SessionOver,

    #[error("option {0} is already registered")]
    DuplicateOption(OptionId),

    #[error("game {0} has no targets")]
    EmptyTargetCatalog(String),

    #[error("unknown game {0}")]
    UnknownGame(String),

    #[error("invalid game config: {0}")]
    Config(String),

    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot codec: {0}")]
    Snapshot(#[from] bincode::Error),
}
