//! Requirement vocabulary for target specifications.
//!
//! A target is a list of [`Requirement`]s. Each one is a tagged variant
//! checked through a single dispatch in the evaluator, so games describe
//! their rules as data instead of branching code.

use serde::{Deserialize, Serialize};

use crate::build::Aggregate;
use crate::core::SlotId;
use crate::options::{AttributeKey, AttributeValue, OptionDef, OptionId};

/// A number read off a build's aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measure {
    /// Summed value of one attribute (or dial).
    Attribute(AttributeKey),
    /// Sum of `|aggregate - ideal|` over several keys.
    TotalDeviation(Vec<(AttributeKey, i64)>),
    /// Number of options in the build.
    OptionCount,
}

impl Measure {
    /// Measure a single attribute.
    pub fn attribute(key: impl Into<AttributeKey>) -> Self {
        Self::Attribute(key.into())
    }

    /// Measure the total deviation from a set of ideal values.
    pub fn deviation<K: Into<AttributeKey>>(ideals: impl IntoIterator<Item = (K, i64)>) -> Self {
        Self::TotalDeviation(ideals.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Evaluate against an aggregate.
    #[must_use]
    pub fn value(&self, aggregate: &Aggregate) -> i64 {
        match self {
            Measure::Attribute(key) => aggregate.get(key),
            Measure::TotalDeviation(ideals) => ideals
                .iter()
                .map(|(key, ideal)| {
                    i64::try_from(aggregate.get(key).abs_diff(*ideal)).unwrap_or(i64::MAX)
                })
                .fold(0, i64::saturating_add),
            Measure::OptionCount => i64::try_from(aggregate.option_count()).unwrap_or(i64::MAX),
        }
    }

    /// Name used in failure reasons.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Measure::Attribute(key) => key.to_string(),
            Measure::TotalDeviation(_) => "total error".to_string(),
            Measure::OptionCount => "option count".to_string(),
        }
    }
}

/// Categorical test applied to the option picked in a slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Matcher {
    /// The option must be exactly this one.
    Option(OptionId),
    /// The option must carry this attribute value.
    Attribute { key: AttributeKey, value: AttributeValue },
}

impl Matcher {
    /// Match a specific option.
    pub fn option(id: impl Into<OptionId>) -> Self {
        Self::Option(id.into())
    }

    /// Match any option with `key == value`.
    pub fn attribute(key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        Self::Attribute {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Does `option` satisfy this matcher?
    #[must_use]
    pub fn matches(&self, option: &OptionDef) -> bool {
        match self {
            Matcher::Option(id) => option.id == *id,
            Matcher::Attribute { key, value } => option.get_attr(key.as_str()) == Some(value),
        }
    }

    /// Describe what is expected.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Matcher::Option(id) => id.to_string(),
            Matcher::Attribute { key, value } => format!("{key}={value}"),
        }
    }
}

/// A number that is either fixed or read from the option in a slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// A constant.
    Const(i64),
    /// An integer attribute of whatever option sits in `slot`.
    /// Missing attributes read as zero.
    SlotAttribute { slot: SlotId, key: AttributeKey },
}

impl Operand {
    /// Read an attribute off the option in a slot.
    pub fn slot_attr(slot: SlotId, key: impl Into<AttributeKey>) -> Self {
        Self::SlotAttribute {
            slot,
            key: key.into(),
        }
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Const(v)
    }
}

/// Requirement category, in default priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequirementKind {
    Min,
    Max,
    Exclude,
    ExactMatch,
    Range,
}

/// One condition of a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    /// `measure >= min`.
    Min { measure: Measure, min: i64 },
    /// `measure <= max`.
    Max { measure: Measure, max: i64 },
    /// The option in `slot` must match `expected`.
    ExactMatch { slot: SlotId, expected: Matcher },
    /// The option in `slot`, if any, must not match `forbidden`.
    Exclude { slot: SlotId, forbidden: Matcher },
    /// `target - tolerance <= measure <= target + tolerance`.
    Range {
        measure: Measure,
        target: Operand,
        tolerance: Operand,
    },
}

impl Requirement {
    /// Minimum on an attribute.
    pub fn min(key: impl Into<AttributeKey>, min: i64) -> Self {
        Self::Min {
            measure: Measure::attribute(key),
            min,
        }
    }

    /// Maximum on an attribute.
    pub fn max(key: impl Into<AttributeKey>, max: i64) -> Self {
        Self::Max {
            measure: Measure::attribute(key),
            max,
        }
    }

    /// A specific option in a slot.
    pub fn exact(slot: SlotId, option: impl Into<OptionId>) -> Self {
        Self::ExactMatch {
            slot,
            expected: Matcher::option(option),
        }
    }

    /// An option carrying `key == value` in a slot.
    pub fn exact_attr(
        slot: SlotId,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self::ExactMatch {
            slot,
            expected: Matcher::attribute(key, value),
        }
    }

    /// No option carrying `key == value` in a slot.
    pub fn exclude_attr(
        slot: SlotId,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self::Exclude {
            slot,
            forbidden: Matcher::attribute(key, value),
        }
    }

    /// Attribute within a constant `target ± tolerance`.
    pub fn range(key: impl Into<AttributeKey>, target: i64, tolerance: i64) -> Self {
        Self::range_between(key, Operand::Const(target), Operand::Const(tolerance))
    }

    /// Attribute within `target ± tolerance`, where either bound may come
    /// from the option in a slot.
    pub fn range_between(key: impl Into<AttributeKey>, target: Operand, tolerance: Operand) -> Self {
        Self::Range {
            measure: Measure::attribute(key),
            target,
            tolerance,
        }
    }

    /// Category used for priority ordering.
    #[must_use]
    pub fn kind(&self) -> RequirementKind {
        match self {
            Requirement::Min { .. } => RequirementKind::Min,
            Requirement::Max { .. } => RequirementKind::Max,
            Requirement::Exclude { .. } => RequirementKind::Exclude,
            Requirement::ExactMatch { .. } => RequirementKind::ExactMatch,
            Requirement::Range { .. } => RequirementKind::Range,
        }
    }
}
