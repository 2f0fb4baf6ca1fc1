//! How a verdict turns into a score.

use serde::{Deserialize, Serialize};

use super::requirement::{Measure, Requirement};
use crate::core::SlotId;
use crate::options::AttributeKey;

/// Score awarded on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payout {
    /// Nothing.
    #[default]
    None,
    /// A flat amount.
    Fixed(i64),
    /// A flat amount minus the build's total cost.
    NetOfCost(i64),
    /// An integer attribute of the option in `slot`.
    FromOption { slot: SlotId, key: AttributeKey },
    /// `base - measure`, for closeness scoring.
    Closeness { base: i64, measure: Measure },
    /// Summed points mapped onto reward tiers.
    Tiered {
        terms: Vec<ScoreTerm>,
        tiers: Vec<Tier>,
    },
}

impl Payout {
    /// Pay out the picked option's attribute.
    pub fn from_option(slot: SlotId, key: impl Into<AttributeKey>) -> Self {
        Self::FromOption {
            slot,
            key: key.into(),
        }
    }
}

/// One contribution to a tiered score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTerm {
    /// `points` if every requirement in `when` holds.
    Bonus { when: Vec<Requirement>, points: i64 },
    /// The raw value of a measure.
    Measure(Measure),
}

/// A reward band.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Points must be strictly greater than this. `None` always matches.
    pub above: Option<i64>,
    pub reward: i64,
    pub label: String,
    /// Review text shown with the label. Empty for none.
    #[serde(default)]
    pub text: String,
}

impl Tier {
    /// A tier reached by scoring more than `above`.
    pub fn above(above: i64, reward: i64, label: impl Into<String>) -> Self {
        Self {
            above: Some(above),
            reward,
            label: label.into(),
            text: String::new(),
        }
    }

    /// The catch-all bottom tier.
    pub fn floor(reward: i64, label: impl Into<String>) -> Self {
        Self {
            above: None,
            reward,
            label: label.into(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    fn admits(&self, points: i64) -> bool {
        self.above.map_or(true, |above| points > above)
    }
}

/// First tier admitting `points`, in declaration order.
#[must_use]
pub fn select_tier(tiers: &[Tier], points: i64) -> Option<&Tier> {
    tiers.iter().find(|tier| tier.admits(points))
}

/// Score lost on failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Penalty {
    #[default]
    None,
    Fixed(i64),
    /// The build's total cost is forfeited.
    BuildCost,
}
