//! The round controller.
//!
//! `RoundController` owns all mutable session state: the current target,
//! the build being assembled, dial settings, the ledger and the history.
//! The evaluator only ever sees immutable borrows of it.
//!
//! ```
//! use lab_rules::games;
//! use lab_rules::round::RoundController;
//!
//! let game = games::by_name("nano-weaver").unwrap();
//! let mut session = RoundController::new(game, 7).unwrap();
//!
//! session.select(&"hexagonal".into()).unwrap();
//! let verdict = session.submit().unwrap();
//!
//! assert!(verdict.is_success());
//! assert_eq!(session.ledger().balance, 130);
//! assert_eq!(session.round(), 2);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::ledger::{Ledger, RoundRecord, SessionStatus};
use super::snapshot::SessionSnapshot;
use crate::build::{validate, Aggregate, Build};
use crate::core::{AdvancePolicy, DialSource, GameConfig, SessionRng, SlotMode};
use crate::error::LabError;
use crate::games::GameDefinition;
use crate::options::{AttributeKey, OptionId};
use crate::rules::{FailureReason, RuleEvaluator, TargetId, TargetSpec, Verdict};

/// The state of the round in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// 1-based round number.
    pub round: u32,
    pub target: TargetId,
    pub build: Build,
}

/// Drives a session of one game: target draws, build edits, submissions.
#[derive(Clone, Debug)]
pub struct RoundController {
    game: GameDefinition,
    rng: SessionRng,
    state: RoundState,
    ledger: Ledger,
    history: Vector<RoundRecord>,
    status: SessionStatus,
}

impl RoundController {
    /// Start a session and draw the first target.
    pub fn new(game: GameDefinition, seed: u64) -> Result<Self, LabError> {
        game.validate()?;
        let mut rng = SessionRng::new(seed);
        let target = draw_target(&game, &mut rng)?;
        let state = RoundState {
            round: 1,
            target,
            build: fresh_build(&game.config),
        };
        let ledger = Ledger::new(&game.config.session);

        info!(game = %game.name(), seed, target = %target, "session started");

        Ok(Self {
            game,
            rng,
            state,
            ledger,
            history: Vector::new(),
            status: SessionStatus::Active,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn game(&self) -> &GameDefinition {
        &self.game
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn target_id(&self) -> TargetId {
        self.state.target
    }

    /// The current target. Always present: target IDs are drawn from the
    /// catalog and restored snapshots are checked against it.
    pub fn target(&self) -> Result<&TargetSpec, LabError> {
        self.game
            .targets
            .get(self.state.target)
            .ok_or_else(|| LabError::Config(format!("{} is not in the catalog", self.state.target)))
    }

    #[must_use]
    pub fn build(&self) -> &Build {
        &self.state.build
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, SessionStatus::Ended(_))
    }

    /// Evaluator over this session's game.
    #[must_use]
    pub fn evaluator(&self) -> RuleEvaluator<'_> {
        RuleEvaluator::new(&self.game)
    }

    /// Evaluate the current build without submitting it.
    ///
    /// Random dials are not rolled, so they count as zero.
    pub fn preview(&self) -> Result<Verdict, LabError> {
        Ok(self.evaluator().evaluate(&self.state.build, self.target()?))
    }

    // === Build actions ===

    /// Add an option to the build.
    ///
    /// One-per-slot games replace whatever the option's slot held. Pooled
    /// games append, ignore repeats, and refuse once the build is full.
    pub fn select(&mut self, id: &OptionId) -> Result<(), LabError> {
        let slot = self
            .game
            .options
            .get(id)
            .map(|o| o.slot)
            .ok_or_else(|| LabError::UnknownOption(id.clone()))?;
        let rules = &self.game.config.build;

        match rules.mode {
            SlotMode::OnePerSlot => {
                if let Some(replaced) = self.state.build.place(slot, id.clone()) {
                    debug!(%replaced, with = %id, "option replaced");
                }
            }
            SlotMode::Pool => {
                if self.state.build.contains(id) {
                    return Ok(());
                }
                if self.state.build.len() >= rules.max_options {
                    return Err(LabError::BuildFull {
                        max: rules.max_options,
                    });
                }
                self.state.build.push(slot, id.clone());
            }
        }
        Ok(())
    }

    /// Remove an option. Returns whether it was in the build.
    pub fn deselect(&mut self, id: &OptionId) -> bool {
        self.state.build.remove(id)
    }

    /// Select an option if absent, deselect it if present.
    ///
    /// Returns whether the option is in the build afterwards.
    pub fn toggle(&mut self, id: &OptionId) -> Result<bool, LabError> {
        if self.deselect(id) {
            return Ok(false);
        }
        self.select(id)?;
        Ok(true)
    }

    /// Set a player dial, clamped to its range. Returns the stored value.
    pub fn set_dial(&mut self, key: impl Into<AttributeKey>, value: i64) -> Result<i64, LabError> {
        let key = key.into();
        let dial = self
            .game
            .config
            .get_dial(&key)
            .ok_or_else(|| LabError::UnknownDial(key.clone()))?;
        let clamped = dial
            .clamp(value)
            .ok_or_else(|| LabError::DialLocked(key.clone()))?;

        self.state.build.set_dial(key, clamped);
        apply_complements(&mut self.state.build, &self.game.config);
        Ok(clamped)
    }

    /// Clear the build and reset dials. Target, ledger and history are
    /// untouched.
    pub fn abandon(&mut self) {
        self.state.build = fresh_build(&self.game.config);
        debug!(round = self.state.round, "round abandoned");
    }

    // === Submission ===

    /// Score the current build against the current target.
    ///
    /// Incomplete builds return an `Incomplete` verdict and change nothing.
    /// Scored verdicts update the ledger, append to history, may end the
    /// session, and advance the round per the game's policy.
    pub fn submit(&mut self) -> Result<Verdict, LabError> {
        if let SessionStatus::Ended(reason) = self.status {
            warn!(%reason, "submit after session end");
            return Err(LabError::SessionOver);
        }

        let target = self
            .game
            .targets
            .get(self.state.target)
            .ok_or_else(|| LabError::Config(format!("{} is not in the catalog", self.state.target)))?;

        if let Some(reason) = validate(&self.state.build, &self.game.config, &self.game.options) {
            warn!(round = self.state.round, %reason, "incomplete build submitted");
            return Ok(Verdict::incomplete(reason));
        }

        let mut build = self.state.build.clone();
        for dial in &self.game.config.dials {
            if let DialSource::Random { min, max } = dial.source {
                let rolled = self.rng.roll(min, max);
                debug!(dial = %dial.key, rolled, "random dial");
                build.set_dial(dial.key.clone(), rolled);
            }
        }

        let session = &self.game.config.session;
        let cost = Aggregate::collect(&build, &self.game.options).cost();
        let verdict = if session.charge_build_cost && self.ledger.balance < cost {
            Verdict::failure(
                vec![FailureReason::InsufficientFunds {
                    cost,
                    funds: self.ledger.balance,
                }],
                cost,
            )
        } else {
            RuleEvaluator::new(&self.game).evaluate(&build, target)
        };

        self.ledger.apply(&verdict, session);
        self.history.push_back(RoundRecord {
            round: self.state.round,
            target: self.state.target,
            build,
            verdict: verdict.clone(),
            balance_after: self.ledger.balance,
        });

        info!(
            round = self.state.round,
            target = %target.key,
            outcome = ?verdict.outcome,
            score = verdict.score,
            balance = self.ledger.balance,
            "build submitted"
        );

        if let Some(reason) = self.ledger.end_reason(session) {
            info!(%reason, rounds = self.history.len(), "session ended");
            self.status = SessionStatus::Ended(reason);
            return Ok(verdict);
        }

        let advance = match self.game.config.advance {
            AdvancePolicy::OnSuccess => verdict.is_success(),
            AdvancePolicy::Always => true,
        };
        if advance {
            self.next_round()?;
        }
        Ok(verdict)
    }

    fn next_round(&mut self) -> Result<(), LabError> {
        self.state.round = self.state.round.saturating_add(1);
        self.state.target = draw_target(&self.game, &mut self.rng)?;
        self.state.build = fresh_build(&self.game.config);
        info!(round = self.state.round, target = %self.state.target, "round started");
        Ok(())
    }

    // === Checkpoints ===

    /// Capture the session state.
    #[must_use]
    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.game.name().to_string(),
            rng: self.rng.state(),
            state: self.state.clone(),
            ledger: self.ledger.clone(),
            history: self.history.clone(),
            status: self.status,
        }
    }

    /// Capture the session state as bytes.
    pub fn snapshot(&self) -> Result<Vec<u8>, LabError> {
        self.to_snapshot().to_bytes()
    }

    /// Resume a session from [`RoundController::snapshot`] bytes.
    pub fn restore(game: GameDefinition, bytes: &[u8]) -> Result<Self, LabError> {
        Self::from_snapshot(game, SessionSnapshot::from_bytes(bytes)?)
    }

    /// Resume a session from a decoded snapshot.
    pub fn from_snapshot(game: GameDefinition, snapshot: SessionSnapshot) -> Result<Self, LabError> {
        game.validate()?;
        if snapshot.game != game.name() {
            return Err(LabError::Config(format!(
                "snapshot is for {}, not {}",
                snapshot.game,
                game.name()
            )));
        }
        if game.targets.get(snapshot.state.target).is_none() {
            return Err(LabError::Config(format!(
                "{} is not in the catalog",
                snapshot.state.target
            )));
        }

        Ok(Self {
            game,
            rng: SessionRng::from_state(&snapshot.rng),
            state: snapshot.state,
            ledger: snapshot.ledger,
            history: snapshot.history,
            status: snapshot.status,
        })
    }
}

fn draw_target(game: &GameDefinition, rng: &mut SessionRng) -> Result<TargetId, LabError> {
    let index = rng
        .pick_index(game.targets.len())
        .ok_or_else(|| LabError::EmptyTargetCatalog(game.name().to_string()))?;
    u16::try_from(index)
        .map(TargetId::new)
        .map_err(|_| LabError::Config(format!("target index {index} out of range")))
}

/// An empty build with every player dial at its default.
fn fresh_build(config: &GameConfig) -> Build {
    let mut build = Build::new();
    for dial in &config.dials {
        if let DialSource::Player { default, .. } = dial.source {
            build.set_dial(dial.key.clone(), default);
        }
    }
    apply_complements(&mut build, config);
    build
}

fn apply_complements(build: &mut Build, config: &GameConfig) {
    for dial in &config.dials {
        if let DialSource::Complement { of, total } = &dial.source {
            let value = total.saturating_sub(build.dial(of).unwrap_or(0));
            build.set_dial(dial.key.clone(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{battery, chef, rocket, scent};
    use crate::rules::Outcome;

    fn session(name: &str, seed: u64) -> RoundController {
        RoundController::new(crate::games::by_name(name).unwrap(), seed).unwrap()
    }

    #[test]
    fn test_dials_start_at_defaults() {
        let s = session(rocket::NAME, 1);
        assert_eq!(s.build().dial(&rocket::OXIDIZER.into()), Some(50));
        assert_eq!(s.build().dial(&rocket::FUEL.into()), Some(50));
    }

    #[test]
    fn test_set_dial_clamps_and_updates_complement() {
        let mut s = session(rocket::NAME, 1);
        assert_eq!(s.set_dial(rocket::OXIDIZER, 140).unwrap(), 100);
        assert_eq!(s.build().dial(&rocket::FUEL.into()), Some(0));

        s.set_dial(rocket::OXIDIZER, 68).unwrap();
        assert_eq!(s.build().dial(&rocket::FUEL.into()), Some(32));

        assert!(matches!(
            s.set_dial(rocket::FUEL, 30),
            Err(LabError::DialLocked(_))
        ));
        assert!(matches!(
            s.set_dial("pressure", 1),
            Err(LabError::UnknownDial(_))
        ));
    }

    #[test]
    fn test_select_replaces_in_slot() {
        let mut s = session(battery::NAME, 3);
        s.select(&"lco".into()).unwrap();
        s.select(&"lfp".into()).unwrap();
        assert_eq!(s.build().len(), 1);
        assert_eq!(s.build().option_in(battery::CATHODE), Some(&OptionId::new("lfp")));

        assert!(matches!(
            s.select(&"unobtainium".into()),
            Err(LabError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_pool_fills_up() {
        let mut s = session(scent::NAME, 3);
        for id in ["isoamyl_acetate", "ethyl_butyrate", "c8_aldehyde", "limonene", "santalol"] {
            s.select(&id.into()).unwrap();
        }
        // repeat is a no-op, not an error
        s.select(&"limonene".into()).unwrap();
        assert!(matches!(
            s.select(&"vanillin".into()),
            Err(LabError::BuildFull { max: 5 })
        ));
        assert!(!s.toggle(&"limonene".into()).unwrap());
        assert!(s.toggle(&"vanillin".into()).unwrap());
        assert_eq!(s.build().len(), 5);
    }

    #[test]
    fn test_incomplete_submit_changes_nothing() {
        let mut s = session(battery::NAME, 9);
        s.select(&"lco".into()).unwrap();
        let before = s.to_snapshot();

        let verdict = s.submit().unwrap();
        assert!(matches!(verdict.outcome, Outcome::Incomplete(_)));
        assert_eq!(s.to_snapshot(), before);
    }

    #[test]
    fn test_abandon_only_touches_build() {
        let mut s = session(chef::NAME, 5);
        s.select(&"milk".into()).unwrap();
        s.set_dial(chef::TEMP, 44).unwrap();
        let target = s.target_id();

        s.abandon();
        assert_eq!(s.build().len(), 0);
        assert_eq!(s.build().dial(&chef::TEMP.into()), Some(20));
        assert_eq!(s.target_id(), target);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_failure_keeps_round_success_advances() {
        let mut s = session(rocket::NAME, 2);
        let failed = s.submit().unwrap();
        assert!(failed.is_failure());
        assert_eq!(s.round(), 1);

        s.set_dial(rocket::OXIDIZER, 70).unwrap();
        let won = s.submit().unwrap();
        assert_eq!(won.score, 100);
        assert_eq!(s.round(), 2);
        assert_eq!(s.build().dial(&rocket::OXIDIZER.into()), Some(50));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_submit_after_end() {
        let mut s = session(chef::NAME, 4);
        // 50 reputation, -10 per failure
        for _ in 0..5 {
            s.select(&"milk".into()).unwrap();
            s.select(&"aceto".into()).unwrap();
            s.select(&"sugar".into()).unwrap();
            s.set_dial(chef::TEMP, 100).unwrap();
            assert!(s.submit().unwrap().is_failure());
        }
        assert!(s.is_over());
        assert!(matches!(s.submit(), Err(LabError::SessionOver)));
    }
}
