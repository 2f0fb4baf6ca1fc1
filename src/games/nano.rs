//! Nano Weaver: pick a lattice geometry for a carbon sheet.
//!
//! Only the hexagonal lattice is stable. A successful weave scores the
//! lattice's tensile strength in GPa.

use crate::core::{BuildRules, GameConfig, SlotConfig, SlotId};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::{Payout, Requirement, TargetSpec};

use super::GameDefinition;

pub const NAME: &str = "nano-weaver";

pub const LATTICE: SlotId = SlotId::new(0);

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(LATTICE, "lattice"))
        .with_build(BuildRules::new(1, 1).requiring([LATTICE]));

    let options = [
        OptionDef::new("hexagonal", "Hexagonal", LATTICE)
            .with_attr("strength_gpa", 130i64)
            .with_blurb("Six-sided cells, like graphene."),
        OptionDef::new("pentagonal", "Pentagonal", LATTICE)
            .with_attr("strength_gpa", 80i64)
            .with_blurb("Five-sided cells. Unstable."),
        OptionDef::new("heptagonal", "Heptagonal", LATTICE)
            .with_attr("strength_gpa", 60i64)
            .with_blurb("Seven-sided cells. Warped."),
    ];

    let sheet = TargetSpec::new("graphene", "Graphene Sheet")
        .require(Requirement::exact(LATTICE, "hexagonal"))
        .with_payout(Payout::from_option(LATTICE, "strength_gpa"))
        .with_brief("Weave a stable carbon sheet.")
        .with_hint("Hexagonal lattices disperse force evenly across the structure.")
        .with_debrief("Perfect hexagonal lattice. 1 m² weighs only 0.77 mg.");

    Ok(GameDefinition::new(config, options, [sheet])?.with_facts([
        "Graphene is 200 times stronger than steel by weight.",
        "Carbon nanotubes are rolled-up sheets of graphene.",
        "Hexagonal lattices disperse force evenly across the structure.",
        "Kevlar uses hydrogen bonds; graphene uses covalent bonds (stronger!).",
        "A 1 m² sheet of graphene weighs only 0.77 milligrams.",
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Build;
    use crate::rules::RuleEvaluator;

    #[test]
    fn test_only_hexagonal_is_stable() {
        let game = definition().unwrap();
        let (_, sheet) = game.targets.find("graphene").unwrap();
        let eval = RuleEvaluator::new(&game);

        let hex = eval.evaluate(&Build::new().with_pick(LATTICE, "hexagonal"), sheet);
        assert_eq!(hex.score, 130);

        let pent = eval.evaluate(&Build::new().with_pick(LATTICE, "pentagonal"), sheet);
        assert!(pent.is_failure());
        assert_eq!(pent.score, 0);
    }
}
