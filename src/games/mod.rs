//! Built-in game catalogs.
//!
//! Each game is plain data: a `GameConfig`, the options players pick from
//! and the targets rounds are drawn from. Nothing here is evaluated
//! differently per game; the rule evaluator and round controller are
//! shared.
//!
//! Catalogs can also be loaded from JSON with [`GameDefinition::from_json`].

pub mod aqua;
pub mod battery;
pub mod biohack;
pub mod chef;
pub mod nano;
pub mod rocket;
pub mod scent;
pub mod viral;

use serde::{Deserialize, Serialize};

use crate::core::{DialSource, GameConfig};
use crate::error::LabError;
use crate::options::{OptionDef, OptionRegistry};
use crate::rules::{
    Operand, Payout, Requirement, ScoreTerm, TargetCatalog, TargetSpec, MAX_TARGETS,
};

/// Names of every built-in game.
pub const GAME_NAMES: [&str; 8] = [
    aqua::NAME,
    battery::NAME,
    biohack::NAME,
    chef::NAME,
    nano::NAME,
    rocket::NAME,
    scent::NAME,
    viral::NAME,
];

/// Everything the engine needs to run one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    pub config: GameConfig,
    pub options: OptionRegistry,
    pub targets: TargetCatalog,
    /// Background facts for the presentation layer to rotate through.
    #[serde(default)]
    pub facts: Vec<String>,
}

impl GameDefinition {
    /// Assemble and validate a definition.
    pub fn new(
        config: GameConfig,
        options: impl IntoIterator<Item = OptionDef>,
        targets: impl IntoIterator<Item = TargetSpec>,
    ) -> Result<Self, LabError> {
        let mut registry = OptionRegistry::new();
        registry.register_all(options)?;
        let definition = Self {
            config,
            options: registry,
            targets: targets.into_iter().collect(),
            facts: Vec::new(),
        };
        definition.validate()?;
        Ok(definition)
    }

    /// Attach background facts.
    #[must_use]
    pub fn with_facts<S: Into<String>>(mut self, facts: impl IntoIterator<Item = S>) -> Self {
        self.facts.extend(facts.into_iter().map(Into::into));
        self
    }

    /// Game name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Parse and validate a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, LabError> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LabError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check internal consistency.
    ///
    /// Every option, required slot and requirement must refer to a declared
    /// slot, derived dials must refer to declared dials, and there must be at
    /// least one target.
    pub fn validate(&self) -> Result<(), LabError> {
        let config = &self.config;

        if self.targets.is_empty() {
            return Err(LabError::EmptyTargetCatalog(config.name.clone()));
        }
        if self.targets.len() > MAX_TARGETS {
            return Err(LabError::Config(format!(
                "{} targets exceed the limit of {MAX_TARGETS}",
                self.targets.len()
            )));
        }
        if config.session.reputation_max < 0 {
            return Err(LabError::Config(format!(
                "reputation_max {} is negative",
                config.session.reputation_max
            )));
        }
        if config.build.min_options > config.build.max_options {
            return Err(LabError::Config(format!(
                "min_options {} exceeds max_options {}",
                config.build.min_options, config.build.max_options
            )));
        }

        let declared = |slot| {
            if config.get_slot(slot).is_some() {
                Ok(())
            } else {
                Err(LabError::UnknownSlot(slot))
            }
        };

        for option in self.options.iter() {
            declared(option.slot)?;
        }
        for slot in &config.build.required_slots {
            declared(*slot)?;
        }

        for (i, dial) in config.dials.iter().enumerate() {
            if config.dials[..i].iter().any(|d| d.key == dial.key) {
                return Err(LabError::Config(format!("dial {} declared twice", dial.key)));
            }
            match &dial.source {
                DialSource::Complement { of, .. } => {
                    if config.get_dial(of).is_none() {
                        return Err(LabError::UnknownDial(of.clone()));
                    }
                }
                DialSource::Player { min, max, default } => {
                    if min > max || default < min || default > max {
                        return Err(LabError::Config(format!(
                            "dial {} default {default} outside {min}..={max}",
                            dial.key
                        )));
                    }
                }
                DialSource::Random { min, max } => {
                    if min > max {
                        return Err(LabError::Config(format!(
                            "dial {} range {min}..={max} is empty",
                            dial.key
                        )));
                    }
                }
            }
        }

        for target in self.targets.iter() {
            for requirement in &target.requirements {
                check_requirement_slots(requirement, &declared)?;
            }
            match &target.payout {
                Payout::FromOption { slot, .. } => declared(*slot)?,
                Payout::Tiered { terms, .. } => {
                    for term in terms {
                        if let ScoreTerm::Bonus { when, .. } = term {
                            for requirement in when {
                                check_requirement_slots(requirement, &declared)?;
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn check_requirement_slots(
    requirement: &Requirement,
    declared: &impl Fn(crate::core::SlotId) -> Result<(), LabError>,
) -> Result<(), LabError> {
    match requirement {
        Requirement::ExactMatch { slot, .. } | Requirement::Exclude { slot, .. } => declared(*slot),
        Requirement::Range {
            target, tolerance, ..
        } => {
            for operand in [target, tolerance] {
                if let Operand::SlotAttribute { slot, .. } = operand {
                    declared(*slot)?;
                }
            }
            Ok(())
        }
        Requirement::Min { .. } | Requirement::Max { .. } => Ok(()),
    }
}

/// Look up a built-in game by name.
pub fn by_name(name: &str) -> Result<GameDefinition, LabError> {
    match name {
        aqua::NAME => aqua::definition(),
        battery::NAME => battery::definition(),
        biohack::NAME => biohack::definition(),
        chef::NAME => chef::definition(),
        nano::NAME => nano::definition(),
        rocket::NAME => rocket::definition(),
        scent::NAME => scent::definition(),
        viral::NAME => viral::definition(),
        other => Err(LabError::UnknownGame(other.to_string())),
    }
}

/// Every built-in game.
pub fn all() -> Result<Vec<GameDefinition>, LabError> {
    GAME_NAMES.iter().map(|name| by_name(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DialConfig, SessionRules, SlotConfig, SlotId};

    #[test]
    fn test_every_builtin_validates() {
        let games = all().unwrap();
        assert_eq!(games.len(), GAME_NAMES.len());
        for (game, name) in games.iter().zip(GAME_NAMES) {
            assert_eq!(game.name(), name);
        }
    }

    #[test]
    fn test_unknown_game() {
        assert!(matches!(
            by_name("carbon-alchemist"),
            Err(LabError::UnknownGame(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_definitions() {
        let config = GameConfig::new("broken").with_slot(SlotConfig::new(SlotId::new(0), "a"));

        let empty = GameDefinition::new(config.clone(), [], []);
        assert!(matches!(empty, Err(LabError::EmptyTargetCatalog(_))));

        let stray = GameDefinition::new(
            config.clone(),
            [OptionDef::new("x", "X", SlotId::new(3))],
            [TargetSpec::new("t", "T")],
        );
        assert!(matches!(stray, Err(LabError::UnknownSlot(_))));

        let orphan_dial = GameDefinition::new(
            config.clone().with_dial(DialConfig::complement("fuel", "oxidizer", 100)),
            [],
            [TargetSpec::new("t", "T")],
        );
        assert!(matches!(orphan_dial, Err(LabError::UnknownDial(_))));

        let bad_req = GameDefinition::new(
            config,
            [],
            [TargetSpec::new("t", "T").require(Requirement::exact(SlotId::new(9), "x"))],
        );
        assert!(matches!(bad_req, Err(LabError::UnknownSlot(_))));
    }

    #[test]
    fn test_validate_rejects_bad_dials_and_limits() {
        let config = GameConfig::new("broken").with_slot(SlotConfig::new(SlotId::new(0), "a"));
        let one = || [TargetSpec::new("t", "T")];

        let twice = GameDefinition::new(
            config
                .clone()
                .with_dial(DialConfig::player("temp", 0, 100, 20))
                .with_dial(DialConfig::random("temp", 0, 5)),
            [],
            one(),
        );
        assert!(matches!(twice, Err(LabError::Config(msg)) if msg.contains("declared twice")));

        let inverted = GameDefinition::new(
            config.clone().with_dial(DialConfig::random("market", 29, 0)),
            [],
            one(),
        );
        assert!(matches!(inverted, Err(LabError::Config(_))));

        let mut rules = SessionRules::new(0);
        rules.reputation_max = -1;
        let negative = GameDefinition::new(config.clone().with_session(rules), [], one());
        assert!(matches!(negative, Err(LabError::Config(_))));

        let too_many = GameDefinition::new(
            config,
            [],
            (0..=MAX_TARGETS).map(|i| TargetSpec::new(format!("t{i}"), "T")),
        );
        assert!(matches!(too_many, Err(LabError::Config(msg)) if msg.contains("limit")));
    }

    #[test]
    fn test_json_roundtrip() {
        let game = by_name(chef::NAME).unwrap();
        let json = game.to_json().unwrap();
        let back = GameDefinition::from_json(&json).unwrap();
        assert_eq!(game, back);
    }
}
