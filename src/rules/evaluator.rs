//! The rule evaluator: one build against one target.
//!
//! Evaluation is a pure function of `(Build, TargetSpec)` plus the game's
//! immutable configuration and option registry:
//!
//! 1. Validate the build shape. Invalid builds are `Incomplete`.
//! 2. Aggregate attribute values by summation.
//! 3. Check requirements in the game's priority order.
//! 4. Score the result with the target's payout or penalty.
//!
//! ```
//! use lab_rules::build::Build;
//! use lab_rules::games;
//! use lab_rules::rules::RuleEvaluator;
//!
//! let game = games::by_name("battery-baron").unwrap();
//! let (_, phone) = game.targets.find("phone").unwrap();
//! let build = Build::new()
//!     .with_pick(games::battery::CATHODE, "nmc")
//!     .with_pick(games::battery::ELECTROLYTE, "liquid")
//!     .with_pick(games::battery::ANODE, "silicon");
//!
//! let verdict = RuleEvaluator::new(&game).evaluate(&build, phone);
//! assert!(verdict.is_success());
//! ```

use tracing::{debug, trace};

use super::payout::{select_tier, Payout, Penalty, ScoreTerm};
use super::requirement::{Operand, Requirement};
use super::target::TargetSpec;
use super::verdict::{FailureReason, Verdict};
use crate::build::{validate, Aggregate, Build};
use crate::core::{CheckOrder, GameConfig, ReportMode, SlotId};
use crate::games::GameDefinition;
use crate::options::{OptionDef, OptionRegistry};

/// Stateless evaluator borrowing one game's rules.
#[derive(Clone, Copy, Debug)]
pub struct RuleEvaluator<'a> {
    config: &'a GameConfig,
    options: &'a OptionRegistry,
}

impl<'a> RuleEvaluator<'a> {
    /// Evaluator for a game definition.
    #[must_use]
    pub fn new(game: &'a GameDefinition) -> Self {
        Self::from_parts(&game.config, &game.options)
    }

    /// Evaluator over a config and registry held separately.
    #[must_use]
    pub fn from_parts(config: &'a GameConfig, options: &'a OptionRegistry) -> Self {
        Self { config, options }
    }

    /// Evaluate a build against a target. Always returns a verdict.
    #[must_use]
    pub fn evaluate(&self, build: &Build, target: &TargetSpec) -> Verdict {
        if let Some(reason) = validate(build, self.config, self.options) {
            trace!(target_key = %target.key, %reason, "build incomplete");
            return Verdict::incomplete(reason);
        }

        let aggregate = Aggregate::collect(build, self.options);
        let reasons = self.violations(build, &aggregate, &target.requirements);

        let verdict = if reasons.is_empty() {
            self.payout(&target.payout, build, &aggregate)
        } else {
            let penalty = Self::penalty(target.penalty, &aggregate);
            Verdict::failure(reasons, penalty)
        };

        trace!(
            target_key = %target.key,
            outcome = ?verdict.outcome,
            score = verdict.score,
            "verdict"
        );
        verdict
    }

    /// Requirements in the order this game checks them.
    fn ordered<'r>(&self, requirements: &'r [Requirement]) -> Vec<&'r Requirement> {
        let mut ordered: Vec<&Requirement> = requirements.iter().collect();
        if self.config.check_order == CheckOrder::ByKind {
            // stable: catalog order breaks ties
            ordered.sort_by_key(|r| r.kind());
        }
        ordered
    }

    fn violations(
        &self,
        build: &Build,
        aggregate: &Aggregate,
        requirements: &[Requirement],
    ) -> Vec<FailureReason> {
        let mut reasons = Vec::new();
        for requirement in self.ordered(requirements) {
            if let Err(reason) = self.check(requirement, build, aggregate) {
                debug!(kind = ?requirement.kind(), %reason, "requirement violated");
                reasons.push(reason);
                if self.config.report == ReportMode::FirstOnly {
                    break;
                }
            }
        }
        reasons
    }

    /// Check a single requirement.
    pub fn check(
        &self,
        requirement: &Requirement,
        build: &Build,
        aggregate: &Aggregate,
    ) -> Result<(), FailureReason> {
        match requirement {
            Requirement::Min { measure, min } => {
                let actual = measure.value(aggregate);
                if actual < *min {
                    return Err(FailureReason::Shortfall {
                        measure: measure.label(),
                        actual,
                        required: *min,
                    });
                }
                Ok(())
            }

            Requirement::Max { measure, max } => {
                let actual = measure.value(aggregate);
                if actual > *max {
                    return Err(FailureReason::Excess {
                        measure: measure.label(),
                        actual,
                        limit: *max,
                    });
                }
                Ok(())
            }

            Requirement::ExactMatch { slot, expected } => {
                let option = self.picked(build, *slot).ok_or_else(|| FailureReason::MissingSlot {
                    slot: self.config.slot_name(*slot),
                })?;
                if expected.matches(option) {
                    Ok(())
                } else {
                    Err(FailureReason::Mismatch {
                        slot: self.config.slot_name(*slot),
                        expected: expected.label(),
                        found: option.id.to_string(),
                    })
                }
            }

            Requirement::Exclude { slot, forbidden } => match self.picked(build, *slot) {
                Some(option) if forbidden.matches(option) => Err(FailureReason::Excluded {
                    slot: self.config.slot_name(*slot),
                    found: option.id.to_string(),
                }),
                _ => Ok(()),
            },

            Requirement::Range {
                measure,
                target,
                tolerance,
            } => {
                let center = self.operand(target, build)?;
                let tolerance = self.operand(tolerance, build)?.saturating_abs();
                let (low, high) = (
                    center.saturating_sub(tolerance),
                    center.saturating_add(tolerance),
                );
                let actual = measure.value(aggregate);
                if actual < low || actual > high {
                    return Err(FailureReason::OutOfRange {
                        measure: measure.label(),
                        actual,
                        low,
                        high,
                    });
                }
                Ok(())
            }
        }
    }

    fn picked(&self, build: &Build, slot: SlotId) -> Option<&'a OptionDef> {
        build.option_in(slot).and_then(|id| self.options.get(id))
    }

    fn operand(&self, operand: &Operand, build: &Build) -> Result<i64, FailureReason> {
        match operand {
            Operand::Const(v) => Ok(*v),
            Operand::SlotAttribute { slot, key } => self
                .picked(build, *slot)
                .map(|option| option.get_int(key.as_str(), 0))
                .ok_or_else(|| FailureReason::MissingSlot {
                    slot: self.config.slot_name(*slot),
                }),
        }
    }

    fn payout(&self, payout: &Payout, build: &Build, aggregate: &Aggregate) -> Verdict {
        match payout {
            Payout::None => Verdict::success(0),
            Payout::Fixed(n) => Verdict::success(*n),
            Payout::NetOfCost(n) => Verdict::success(n.saturating_sub(aggregate.cost())),
            Payout::FromOption { slot, key } => {
                let value = self
                    .picked(build, *slot)
                    .map_or(0, |option| option.get_int(key.as_str(), 0));
                Verdict::success(value)
            }
            Payout::Closeness { base, measure } => {
                Verdict::success(base.saturating_sub(measure.value(aggregate)))
            }
            Payout::Tiered { terms, tiers } => {
                let points: i64 = terms
                    .iter()
                    .map(|term| match term {
                        ScoreTerm::Bonus { when, points } => {
                            let holds = when
                                .iter()
                                .all(|r| self.check(r, build, aggregate).is_ok());
                            if holds {
                                *points
                            } else {
                                0
                            }
                        }
                        ScoreTerm::Measure(measure) => measure.value(aggregate),
                    })
                    .fold(0, i64::saturating_add);
                debug!(points, "tiered score");
                match select_tier(tiers, points) {
                    Some(tier) if tier.text.is_empty() => {
                        Verdict::success(tier.reward).with_label(tier.label.clone())
                    }
                    Some(tier) => Verdict::success(tier.reward)
                        .with_label(tier.label.clone())
                        .with_remark(tier.text.clone()),
                    None => Verdict::success(0),
                }
            }
        }
    }

    fn penalty(penalty: Penalty, aggregate: &Aggregate) -> i64 {
        match penalty {
            Penalty::None => 0,
            Penalty::Fixed(p) => p,
            Penalty::BuildCost => aggregate.cost(),
        }
    }
}
