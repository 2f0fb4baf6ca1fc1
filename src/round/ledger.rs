//! Session bookkeeping: balance, reputation and win/loss tallies.

use serde::{Deserialize, Serialize};

use crate::build::Build;
use crate::core::SessionRules;
use crate::rules::{Outcome, TargetId, Verdict};

/// Why a session stopped accepting submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Balance reached zero or below.
    Bankrupt,
    /// Reputation reached zero.
    ReputationLost,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::Bankrupt => f.write_str("bankrupt"),
            EndReason::ReputationLost => f.write_str("reputation lost"),
        }
    }
}

/// Whether a session still accepts submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Active,
    Ended(EndReason),
}

/// Running totals for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub balance: i64,
    /// `None` when the game doesn't track reputation.
    pub reputation: Option<i64>,
    pub wins: u32,
    pub losses: u32,
}

impl Ledger {
    /// Starting ledger for a session.
    #[must_use]
    pub fn new(rules: &SessionRules) -> Self {
        Self {
            balance: rules.starting_balance,
            reputation: rules.starting_reputation,
            wins: 0,
            losses: 0,
        }
    }

    /// Fold a scored verdict into the totals. Incomplete verdicts are ignored.
    pub fn apply(&mut self, verdict: &Verdict, rules: &SessionRules) {
        let delta = match verdict.outcome {
            Outcome::Success => {
                self.wins = self.wins.saturating_add(1);
                rules.reputation_step
            }
            Outcome::Failure => {
                self.losses = self.losses.saturating_add(1);
                -rules.reputation_step
            }
            Outcome::Incomplete(_) => return,
        };

        self.balance = self.balance.saturating_add(verdict.score);
        if let Some(floor) = rules.balance_floor {
            self.balance = self.balance.max(floor);
        }
        if let Some(rep) = self.reputation.as_mut() {
            *rep = rep.saturating_add(delta).clamp(0, rules.reputation_max);
        }
    }

    /// Title earned by the current balance: the first rank it clears.
    #[must_use]
    pub fn rank<'r>(&self, rules: &'r SessionRules) -> Option<&'r str> {
        rules
            .ranks
            .iter()
            .find(|rank| rank.above.map_or(true, |above| self.balance > above))
            .map(|rank| rank.title.as_str())
    }

    /// The challenge level: one more than the targets cleared so far.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.wins.saturating_add(1)
    }

    /// The end condition this ledger has hit, if any.
    #[must_use]
    pub fn end_reason(&self, rules: &SessionRules) -> Option<EndReason> {
        if rules.end_on_empty_balance && self.balance <= 0 {
            return Some(EndReason::Bankrupt);
        }
        if rules.end_on_lost_reputation && self.reputation.is_some_and(|r| r <= 0) {
            return Some(EndReason::ReputationLost);
        }
        None
    }
}

/// One scored submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub target: TargetId,
    /// The build as evaluated, random dials included.
    pub build: Build,
    pub verdict: Verdict,
    pub balance_after: i64,
}
