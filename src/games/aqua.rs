//! Aqua Purifier: run a water source through filtration, distillation and
//! UV treatment, then bottle it.
//!
//! Any source can be purified; the bottle is worth the source's value.

use crate::core::{BuildRules, GameConfig, SlotConfig, SlotId};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::{Payout, TargetSpec};

use super::GameDefinition;

pub const NAME: &str = "aqua-purifier";

pub const SOURCE: SlotId = SlotId::new(0);

fn source(id: &str, name: &str, value: i64) -> OptionDef {
    OptionDef::new(id, name, SOURCE).with_attr("value", value)
}

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(SOURCE, "source"))
        .with_build(BuildRules::new(1, 1).requiring([SOURCE]));

    let options = [
        source("ocean", "Ocean Water", 50)
            .with_blurb("High salinity. Needs desalination.")
            .with_fact("Reverse osmosis forces water through a semi-permeable membrane to remove salt."),
        source("river", "River Water", 30)
            .with_blurb("Contains sediment and bacteria.")
            .with_fact("Sedimentation lets heavy particles settle before filtration."),
        source("sludge", "Toxic Sludge", 100)
            .with_blurb("Highly contaminated. Requires intensive processing.")
            .with_fact("Activated carbon filters are effective at removing organic contaminants."),
    ];

    let bottle = TargetSpec::new("bottle", "Premium Water")
        .with_payout(Payout::from_option(SOURCE, "value"))
        .with_brief("Purify a water source and bottle it.")
        .with_debrief("Filtered, distilled and UV-treated to 99.9% purity.");

    GameDefinition::new(config, options, [bottle])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Build;
    use crate::rules::RuleEvaluator;

    #[test]
    fn test_value_by_source() {
        let game = definition().unwrap();
        let (_, bottle) = game.targets.find("bottle").unwrap();
        let eval = RuleEvaluator::new(&game);

        for (id, value) in [("ocean", 50), ("river", 30), ("sludge", 100)] {
            let verdict = eval.evaluate(&Build::new().with_pick(SOURCE, id), bottle);
            assert_eq!(verdict.score, value);
        }
        assert!(eval.evaluate(&Build::new(), bottle).is_incomplete());
    }
}
