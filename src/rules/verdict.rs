//! Evaluation results.

use serde::{Deserialize, Serialize};

use crate::build::IncompleteReason;

/// Which way a value missed its band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Below,
    Above,
}

/// Why a requirement was not met.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// A minimum was not reached.
    Shortfall {
        measure: String,
        actual: i64,
        required: i64,
    },
    /// A maximum was exceeded.
    Excess {
        measure: String,
        actual: i64,
        limit: i64,
    },
    /// The option in a slot is not the one required.
    Mismatch {
        slot: String,
        expected: String,
        found: String,
    },
    /// A slot a requirement reads from is empty.
    MissingSlot { slot: String },
    /// The option in a slot is ruled out.
    Excluded { slot: String, found: String },
    /// A value fell outside `[low, high]`.
    OutOfRange {
        measure: String,
        actual: i64,
        low: i64,
        high: i64,
    },
    /// The balance can't cover the build.
    InsufficientFunds { cost: i64, funds: i64 },
}

impl FailureReason {
    /// How far below a minimum the build fell, if that is what failed.
    #[must_use]
    pub fn shortfall(&self) -> Option<i64> {
        match self {
            FailureReason::Shortfall {
                actual, required, ..
            } => Some(required.saturating_sub(*actual)),
            FailureReason::InsufficientFunds { cost, funds } => Some(cost.saturating_sub(*funds)),
            _ => None,
        }
    }

    /// For range failures, which side of the band the value landed on.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            FailureReason::OutOfRange { actual, low, .. } if actual < low => Some(Side::Below),
            FailureReason::OutOfRange { .. } => Some(Side::Above),
            _ => None,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Shortfall {
                measure,
                actual,
                required,
            } => write!(
                f,
                "{measure} too low ({actual}/{required}): short by {}",
                required.saturating_sub(*actual)
            ),
            FailureReason::Excess {
                measure,
                actual,
                limit,
            } => write!(
                f,
                "{measure} too high ({actual}/{limit}): over by {}",
                actual.saturating_sub(*limit)
            ),
            FailureReason::Mismatch {
                slot,
                expected,
                found,
            } => write!(f, "wrong {slot}: needs {expected}, got {found}"),
            FailureReason::MissingSlot { slot } => write!(f, "no {slot} selected"),
            FailureReason::Excluded { slot, found } => write!(f, "{found} is rejected as {slot}"),
            FailureReason::OutOfRange {
                measure,
                actual,
                low,
                high,
            } => {
                let side = if actual < low { "too low" } else { "too high" };
                write!(f, "{measure} {side} ({actual} not in {low}..={high})")
            }
            FailureReason::InsufficientFunds { cost, funds } => {
                write!(f, "insufficient funds: build costs {cost}, have {funds}")
            }
        }
    }
}

/// Top-level result of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
    /// The build was not scored.
    Incomplete(IncompleteReason),
}

/// What the evaluator decided about a build.
///
/// `score` is the signed change to the player's balance: the payout on
/// success, minus the penalty on failure, zero when incomplete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub score: i64,
    /// Violated requirements in priority order. Empty unless failed.
    pub reasons: Vec<FailureReason>,
    /// Rating text from a tiered payout.
    pub label: Option<String>,
    /// Review text accompanying the rating.
    #[serde(default)]
    pub remark: Option<String>,
}

impl Verdict {
    pub fn success(score: i64) -> Self {
        Self {
            outcome: Outcome::Success,
            score,
            reasons: Vec::new(),
            label: None,
            remark: None,
        }
    }

    pub fn failure(reasons: Vec<FailureReason>, penalty: i64) -> Self {
        Self {
            outcome: Outcome::Failure,
            score: penalty.saturating_neg(),
            reasons,
            label: None,
            remark: None,
        }
    }

    pub fn incomplete(reason: IncompleteReason) -> Self {
        Self {
            outcome: Outcome::Incomplete(reason),
            score: 0,
            reasons: Vec::new(),
            label: None,
            remark: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failure
    }

    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self.outcome, Outcome::Incomplete(_))
    }

    /// Readable explanation, `None` on success.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Success => None,
            Outcome::Incomplete(reason) => Some(reason.to_string()),
            Outcome::Failure => Some(
                self.reasons
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        }
    }

    /// Shortfall of the first reported violation, if it was a minimum.
    #[must_use]
    pub fn shortfall(&self) -> Option<i64> {
        self.reasons.first().and_then(FailureReason::shortfall)
    }
}
