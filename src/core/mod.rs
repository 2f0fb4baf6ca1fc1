//! Core engine types: slots, configuration, RNG.
//!
//! This module contains the game-agnostic building blocks. Games configure
//! these via `GameConfig` rather than modifying the core.

pub mod config;
pub mod rng;

pub use config::{
    AdvancePolicy, BuildRules, CheckOrder, DialConfig, DialSource, GameConfig, Rank, ReportMode,
    SessionRules, SlotConfig, SlotId, SlotMode,
};
pub use rng::{SessionRng, SessionRngState};
