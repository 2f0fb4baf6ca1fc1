//! Bio Hacker: splice a trait gene into a crop with CRISPR.
//!
//! Every trait splices successfully. There is no score; the picked
//! trait's `result` and `reward` text describe the new crop.

use crate::core::{BuildRules, GameConfig, SlotConfig, SlotId};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::TargetSpec;

use super::GameDefinition;

pub const NAME: &str = "bio-hacker";

pub const TRAIT: SlotId = SlotId::new(0);

fn gene(id: &str, name: &str, result: &str, reward: &str) -> OptionDef {
    OptionDef::new(id, name, TRAIT)
        .with_attr("result", result)
        .with_attr("reward", reward)
}

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(TRAIT, "trait"))
        .with_build(BuildRules::new(1, 1).requiring([TRAIT]));

    let options = [
        gene("biolum", "Bioluminescence", "Glowing Crop", "Yield +15%")
            .with_blurb("Insert genes from jellyfish to make crops glow.")
            .with_fact("Green fluorescent protein (GFP) is often used as a marker in genetic engineering."),
        gene("drought", "Drought Resistance", "Desert-Hardy Crop", "Resilience: High")
            .with_blurb("Edit stomata regulation for water conservation.")
            .with_fact("Abscisic acid pathways regulate how plants respond to water stress."),
        gene("flavor", "Flavor Enhancer", "Sweet-Berry Crop", "Value +50%")
            .with_blurb("Boost terpene production for candy-like taste.")
            .with_fact("Terpenes are aromatic compounds that give plants their scent and flavor."),
    ];

    let splice = TargetSpec::new("splice", "Gene Splice")
        .with_brief("Select a desired trait and splice it into the crop.")
        .with_debrief("Cas9 cut the strand and the new genetic material was inserted.");

    GameDefinition::new(config, options, [splice])
}
