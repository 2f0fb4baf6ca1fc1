//! Viral Hunter: attach a functional group to a drug scaffold so it binds
//! a pocket on the virus.
//!
//! Charged pockets need the opposite charge and repel a like one;
//! hydrophobic and polar pockets need a group of the same property. The
//! repulsion check runs before the match check, so a like charge reports
//! as repulsion rather than weak binding.

use crate::core::{BuildRules, GameConfig, SessionRules, SlotConfig, SlotId};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::{Payout, Penalty, Requirement, TargetSpec};

use super::GameDefinition;

pub const NAME: &str = "viral-hunter";

pub const CENTER: SlotId = SlotId::new(0);

/// Functional group property attribute.
pub const CHARGE: &str = "charge";

const REWARD: i64 = 500;
const PENALTY: i64 = 50;

fn group(id: &str, name: &str, charge: &str, formula: &str) -> OptionDef {
    OptionDef::new(id, name, CENTER)
        .with_attr(CHARGE, charge)
        .with_attr("formula", formula)
}

fn pocket(property: &str, title: &str, needs: &str) -> TargetSpec {
    let mut spec = TargetSpec::new(property, title)
        .require(Requirement::exact_attr(CENTER, CHARGE, needs))
        .with_payout(Payout::Fixed(REWARD))
        .with_penalty(Penalty::Fixed(PENALTY));
    if property != needs {
        spec = spec.require(Requirement::exclude_attr(CENTER, CHARGE, property));
    }
    spec
}

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(CENTER, "center"))
        .with_build(BuildRules::new(1, 1).requiring([CENTER]))
        .with_session(SessionRules::new(0).with_floor(0));

    let options = [
        group("amine", "Amine", "pos", "NH₃⁺").with_blurb("Positive charge (+)"),
        group("carboxyl", "Carboxyl", "neg", "COO⁻").with_blurb("Negative charge (-)"),
        group("methyl", "Methyl", "hydro", "CH₃").with_blurb("Hydrophobic (greasy)"),
        group("hydroxyl", "Hydroxyl", "polar", "OH").with_blurb("Polar (sticky)"),
    ];

    let targets = [
        pocket("pos", "Positive Pocket", "neg")
            .with_hint("Opposite charges attract. Bring a negative group.")
            .with_debrief(
                "Electrostatic attraction: an oppositely charged group forms a salt bridge \
                 that locks the drug into place.",
            ),
        pocket("neg", "Negative Pocket", "pos")
            .with_hint("Opposite charges attract. Bring a positive group.")
            .with_debrief(
                "Electrostatic attraction: an oppositely charged group forms a salt bridge \
                 that locks the drug into place.",
            ),
        pocket("hydro", "Hydrophobic Pocket", "hydro")
            .with_hint("Greasy likes greasy.")
            .with_debrief(
                "The hydrophobic effect: surrounding water pushes greasy groups together, \
                 driving the drug into the pocket.",
            ),
        pocket("polar", "Polar Pocket", "polar")
            .with_hint("Sticky likes sticky.")
            .with_debrief(
                "Hydrogen bonding: polar groups act as molecular velcro, weaker than ionic \
                 bonds but highly specific.",
            ),
    ];

    GameDefinition::new(config, options, targets)
}
