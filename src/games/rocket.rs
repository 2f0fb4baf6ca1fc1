//! Rocket Fueler: set the oxidizer share of a LOX/RP-1 mixture.
//!
//! There are no options, only a dial. Fuel is whatever the oxidizer
//! leaves of 100%. The launch succeeds when the total error from the ideal
//! 70/30 split is at most 5, scoring `100 - total error` efficiency.

use crate::core::{BuildRules, DialConfig, GameConfig};
use crate::error::LabError;
use crate::rules::{Measure, Payout, Requirement, TargetSpec};

use super::GameDefinition;

pub const NAME: &str = "rocket-fueler";

pub const OXIDIZER: &str = "oxidizer";
pub const FUEL: &str = "fuel";

pub const IDEAL_OXIDIZER: i64 = 70;
pub const IDEAL_FUEL: i64 = 30;
pub const TOLERANCE: i64 = 5;

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_build(BuildRules::new(0, 0))
        .with_dial(DialConfig::player(OXIDIZER, 0, 100, 50))
        .with_dial(DialConfig::complement(FUEL, OXIDIZER, 100));

    let error = Measure::deviation([(OXIDIZER, IDEAL_OXIDIZER), (FUEL, IDEAL_FUEL)]);

    let orbit = TargetSpec::new("orbit", "Reach Orbit")
        .require(Requirement::Max {
            measure: error.clone(),
            max: TOLERANCE,
        })
        .with_payout(Payout::Closeness {
            base: 100,
            measure: error,
        })
        .with_brief("Mix liquid oxygen and RP-1 for a clean burn.")
        .with_hint("Aim for roughly 70% oxidizer, 30% fuel.")
        .with_debrief("Orbit achieved. Second engine cutoff.");

    Ok(GameDefinition::new(config, [], [orbit])?.with_facts([
        "Stoichiometric ratio ensures complete combustion for maximum efficiency.",
        "Liquid oxygen (LOX) boils at -183°C. Cryogenic!",
        "RP-1 is a highly refined form of kerosene used in rockets.",
        "Specific impulse (Isp) measures how effectively a rocket uses propellant.",
        "Hypergolic propellants ignite spontaneously upon contact.",
        "The Saturn V used LOX and RP-1 for its massive first stage.",
    ]))
}
