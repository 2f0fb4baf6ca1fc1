//! Shape checks run before a build is scored.
//!
//! A build that fails these checks is *incomplete*: the evaluator reports
//! it as such and never checks requirements against it.

use serde::{Deserialize, Serialize};

use super::picks::Build;
use crate::core::{DialSource, GameConfig, SlotId, SlotMode};
use crate::options::{AttributeKey, OptionId, OptionRegistry};

/// Why a build can't be scored yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncompleteReason {
    /// Nothing picked and nothing dialled in.
    Empty,
    /// Fewer options than the game needs.
    TooFew { min: usize, got: usize },
    /// More options than the game allows.
    TooMany { max: usize, got: usize },
    /// A required slot has no option.
    MissingSlot(SlotId),
    /// A pick names a slot the game doesn't declare.
    UnknownSlot(SlotId),
    /// A pick names an option the game doesn't have.
    UnknownOption(OptionId),
    /// An option was placed into a slot it doesn't belong to.
    WrongSlot { option: OptionId, slot: SlotId },
    /// Two options share a single-occupancy slot.
    DuplicateSlot(SlotId),
    /// The same option appears twice.
    DuplicateOption(OptionId),
    /// A dial setting for a key the game doesn't declare.
    UnknownDial(AttributeKey),
    /// A dial setting the dial could never produce.
    DialOutOfRange { key: AttributeKey, value: i64 },
}

impl std::fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncompleteReason::Empty => f.write_str("nothing selected"),
            IncompleteReason::TooFew { min, got } => {
                write!(f, "select at least {min} options ({got} selected)")
            }
            IncompleteReason::TooMany { max, got } => {
                write!(f, "at most {max} options allowed ({got} selected)")
            }
            IncompleteReason::MissingSlot(slot) => write!(f, "{slot} is empty"),
            IncompleteReason::UnknownSlot(slot) => write!(f, "{slot} does not exist"),
            IncompleteReason::UnknownOption(id) => write!(f, "unknown option {id}"),
            IncompleteReason::WrongSlot { option, slot } => {
                write!(f, "{option} does not belong in {slot}")
            }
            IncompleteReason::DuplicateSlot(slot) => write!(f, "{slot} holds more than one option"),
            IncompleteReason::DuplicateOption(id) => write!(f, "{id} selected twice"),
            IncompleteReason::UnknownDial(key) => write!(f, "unknown dial {key}"),
            IncompleteReason::DialOutOfRange { key, value } => {
                write!(f, "dial {key} cannot be set to {value}")
            }
        }
    }
}

/// Check a build against a game's build rules.
///
/// Returns the first problem found, or `None` if the build can be scored.
pub fn validate(
    build: &Build,
    config: &GameConfig,
    registry: &OptionRegistry,
) -> Option<IncompleteReason> {
    let rules = &config.build;

    if build.is_empty() {
        return Some(IncompleteReason::Empty);
    }
    if build.len() > rules.max_options {
        return Some(IncompleteReason::TooMany {
            max: rules.max_options,
            got: build.len(),
        });
    }
    if build.len() < rules.min_options {
        return Some(IncompleteReason::TooFew {
            min: rules.min_options,
            got: build.len(),
        });
    }

    let picks = build.picks();
    for (i, pick) in picks.iter().enumerate() {
        if config.get_slot(pick.slot).is_none() {
            return Some(IncompleteReason::UnknownSlot(pick.slot));
        }
        let Some(option) = registry.get(&pick.option) else {
            return Some(IncompleteReason::UnknownOption(pick.option.clone()));
        };
        if option.slot != pick.slot {
            return Some(IncompleteReason::WrongSlot {
                option: pick.option.clone(),
                slot: pick.slot,
            });
        }

        let earlier = &picks[..i];
        if earlier.iter().any(|p| p.option == pick.option) {
            return Some(IncompleteReason::DuplicateOption(pick.option.clone()));
        }
        if rules.mode == SlotMode::OnePerSlot && earlier.iter().any(|p| p.slot == pick.slot) {
            return Some(IncompleteReason::DuplicateSlot(pick.slot));
        }
    }

    if let Some(reason) = check_dials(build, config) {
        return Some(reason);
    }

    rules
        .required_slots
        .iter()
        .find(|slot| build.option_in(**slot).is_none())
        .map(|slot| IncompleteReason::MissingSlot(*slot))
}

/// Every dial setting must belong to a declared dial and lie within what
/// that dial can produce. Complements must agree with the dial they track.
fn check_dials(build: &Build, config: &GameConfig) -> Option<IncompleteReason> {
    for (key, value) in build.dials() {
        let Some(dial) = config.get_dial(key) else {
            return Some(IncompleteReason::UnknownDial(key.clone()));
        };
        let allowed = match &dial.source {
            DialSource::Player { min, max, .. } | DialSource::Random { min, max } => {
                (*min..=*max).contains(&value)
            }
            DialSource::Complement { of, total } => {
                value == total.saturating_sub(build.dial(of).unwrap_or(0))
            }
        };
        if !allowed {
            return Some(IncompleteReason::DialOutOfRange {
                key: key.clone(),
                value,
            });
        }
    }
    None
}
