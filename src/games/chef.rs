//! Cultured Chef: ferment a customer's order from a substrate, a microbe
//! and an additive at a chosen temperature.
//!
//! Ingredient checks run in slot order (substrate, microbe, additive) and
//! come before the temperature check, so a wrong microbe is reported even
//! when the temperature happens to be in range. The temperature band is the
//! picked microbe's optimum ± tolerance. Reputation closes the kitchen when
//! it reaches zero.

use crate::core::{BuildRules, DialConfig, GameConfig, SessionRules, SlotConfig, SlotId};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::{Operand, Requirement, TargetSpec};

use super::GameDefinition;

pub const NAME: &str = "cultured-chef";

pub const SUBSTRATE: SlotId = SlotId::new(0);
pub const MICROBE: SlotId = SlotId::new(1);
pub const ADDITIVE: SlotId = SlotId::new(2);

/// Fermentation temperature dial, in °C.
pub const TEMP: &str = "temp";

fn microbe(id: &str, name: &str, kind: &str, optimal_temp: i64) -> OptionDef {
    OptionDef::new(id, name, MICROBE)
        .with_attr("kind", kind)
        .with_attr("optimal_temp", optimal_temp)
        .with_attr("tolerance", 10i64)
}

fn order(key: &str, title: &str, substrate: &str, microbe: &str) -> TargetSpec {
    TargetSpec::new(key, title)
        .require(Requirement::exact(SUBSTRATE, substrate))
        .require(Requirement::exact(MICROBE, microbe))
        .require(Requirement::range_between(
            TEMP,
            Operand::slot_attr(MICROBE, "optimal_temp"),
            Operand::slot_attr(MICROBE, "tolerance"),
        ))
}

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(SUBSTRATE, "substrate"))
        .with_slot(SlotConfig::new(MICROBE, "microbe"))
        .with_slot(SlotConfig::new(ADDITIVE, "additive"))
        .with_build(BuildRules::new(3, 3).requiring([SUBSTRATE, MICROBE, ADDITIVE]))
        .with_dial(DialConfig::player(TEMP, 0, 100, 20))
        .with_session(
            SessionRules::new(0)
                .with_reputation(50, 10)
                .ending_on_lost_reputation(),
        );

    let options = [
        OptionDef::new("milk", "Milk (Lactose)", SUBSTRATE)
            .with_blurb("Rich in lactose sugar and proteins.")
            .with_fact(
                "Bacteria eat the lactose in milk and produce lactic acid, \
                 which thickens the proteins into yogurt or cheese.",
            ),
        OptionDef::new("cabbage", "Cabbage (Fiber/Sugar)", SUBSTRATE)
            .with_blurb("Crunchy vegetable with natural sugars.")
            .with_fact(
                "Salt draws water and sugars out of vegetable cells by osmosis \
                 so bacteria can reach them.",
            ),
        OptionDef::new("flour", "Flour (Starch)", SUBSTRATE)
            .with_blurb("Complex carbs and gluten proteins.")
            .with_fact(
                "Enzymes break the starch in flour into simple sugars that yeast \
                 can eat, producing gas bubbles.",
            ),
        microbe("lacto", "Lactobacillus", "bacteria", 40)
            .with_blurb("The sour bacteria. Loves warm milk.")
            .with_fact(
                "Lactic acid lowers pH, preserving food by making it too acidic \
                 for harmful bacteria.",
            ),
        microbe("yeast", "Saccharomyces (Yeast)", "fungus", 25)
            .with_blurb("The gas maker. Loves room temperature.")
            .with_fact("Yeast turns sugar into ethanol and CO2. It is used for bread, beer and wine."),
        microbe("aceto", "Acetobacter", "bacteria", 30)
            .with_blurb("The vinegar maker. Needs oxygen.")
            .with_fact("Acetobacter turns alcohol into acetic acid, given plenty of oxygen."),
        OptionDef::new("salt", "Salt (NaCl)", ADDITIVE)
            .with_attr("effect", "preservative")
            .with_blurb("Inhibits bad bacteria via osmosis.")
            .with_fact(
                "Salt pulls water out of bacterial cells. Lactobacillus tolerates it; \
                 pathogens do not.",
            ),
        OptionDef::new("sugar", "Sugar (Sucrose)", ADDITIVE)
            .with_attr("effect", "fuel")
            .with_blurb("Extra food for the microbes.")
            .with_fact("Extra sugar speeds fermentation by giving microbes an easy energy source."),
        OptionDef::new("none", "Nothing", ADDITIVE)
            .with_attr("effect", "neutral")
            .with_blurb("Just the basics.")
            .with_fact("Wild fermentation relies only on what is naturally present."),
    ];

    let targets = [
        order("yogurt", "Perfect Yogurt", "milk", "lacto")
            .with_brief("A smooth, tart yogurt. Not too runny!")
            .with_hint("Yogurt needs milk and Lactobacillus. Keep it warm, around 40°C."),
        order("kimchi", "Spicy Kimchi", "cabbage", "lacto")
            .require(Requirement::exact(ADDITIVE, "salt"))
            .with_brief("Preserved cabbage that is safe to eat.")
            .with_hint("Kimchi uses cabbage and Lactobacillus. You need salt to kill the bad bugs."),
        order("sourdough", "Sourdough Starter", "flour", "yeast")
            .with_brief("A bubbly starter for bread.")
            .with_hint("Bread needs flour and yeast at room temperature, around 25°C."),
        order("vinegar", "Malt Vinegar", "flour", "aceto")
            .with_brief("Turn grain mash into vinegar.")
            .with_hint("Malt vinegar comes from grains. Acetobacter needs warmth, around 30°C."),
    ];

    GameDefinition::new(config, options, targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Build;
    use crate::rules::{FailureReason, RuleEvaluator, Side};

    fn jar(substrate: &str, microbe: &str, additive: &str, temp: i64) -> Build {
        Build::new()
            .with_pick(SUBSTRATE, substrate)
            .with_pick(MICROBE, microbe)
            .with_pick(ADDITIVE, additive)
            .with_dial(TEMP, temp)
    }

    #[test]
    fn test_kimchi_needs_salt() {
        let game = definition().unwrap();
        let (_, kimchi) = game.targets.find("kimchi").unwrap();
        let eval = RuleEvaluator::new(&game);

        assert!(eval.evaluate(&jar("cabbage", "lacto", "salt", 35), kimchi).is_success());

        let verdict = eval.evaluate(&jar("cabbage", "lacto", "sugar", 35), kimchi);
        assert_eq!(
            verdict.reasons,
            vec![FailureReason::Mismatch {
                slot: "additive".into(),
                expected: "salt".into(),
                found: "sugar".into(),
            }]
        );
    }

    #[test]
    fn test_too_cold() {
        let game = definition().unwrap();
        let (_, sourdough) = game.targets.find("sourdough").unwrap();
        let verdict = RuleEvaluator::new(&game).evaluate(&jar("flour", "yeast", "none", 5), sourdough);
        assert_eq!(verdict.reasons[0].side(), Some(Side::Below));
    }
}
