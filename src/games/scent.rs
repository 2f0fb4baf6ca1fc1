//! Scent Designer: blend three to five aroma chemicals into a perfume and
//! send it out for review.
//!
//! Picks go into a shared pool rather than one per slot. The review score
//! is +50 for a balanced blend (top, mid and base notes all present), +20
//! for a complex one (five ingredients) and a random market factor of
//! 0..=29. Scores above 80 earn five stars, above 50 three, otherwise one.
//! Every review moves on to a fresh blend. The perfumer's title rises with
//! their money: Rising Star above 2000, Master Perfumer above 5000.

use crate::core::{
    AdvancePolicy, BuildRules, DialConfig, GameConfig, Rank, SessionRules, SlotConfig,
    SlotId,
};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::{Measure, Payout, Requirement, ScoreTerm, TargetSpec, Tier};

use super::GameDefinition;

pub const NAME: &str = "scent-designer";

pub const ESTERS: SlotId = SlotId::new(0);
pub const ALDEHYDES: SlotId = SlotId::new(1);
pub const TERPENES: SlotId = SlotId::new(2);

/// Random market factor dial.
pub const MARKET: &str = "market";

pub const MAX_INGREDIENTS: usize = 5;

fn chem(id: &str, name: &str, slot: SlotId, note: &str, cost: i64, smell: &str) -> OptionDef {
    OptionDef::new(id, name, slot)
        .with_cost(cost)
        .with_attr("note", note)
        // one count per note so the aggregate tallies top/mid/base
        .with_attr(note, 1i64)
        .with_blurb(smell)
}

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(ESTERS, "esters"))
        .with_slot(SlotConfig::new(ALDEHYDES, "aldehydes"))
        .with_slot(SlotConfig::new(TERPENES, "terpenes"))
        .with_build(BuildRules::new(3, MAX_INGREDIENTS).pooled())
        .with_dial(DialConfig::random(MARKET, 0, 29))
        .with_session(SessionRules::new(1000).with_ranks([
            Rank::above(5000, "Master Perfumer"),
            Rank::above(2000, "Rising Star"),
            Rank::base("Novice"),
        ]))
        .with_advance(AdvancePolicy::Always);

    let options = [
        chem("isoamyl_acetate", "Isoamyl Acetate", ESTERS, "top", 50, "Banana / Pear"),
        chem("ethyl_butyrate", "Ethyl Butyrate", ESTERS, "top", 60, "Pineapple"),
        chem("benzyl_acetate", "Benzyl Acetate", ESTERS, "mid", 120, "Jasmine / Floral"),
        chem("c8_aldehyde", "Octanal (C8)", ALDEHYDES, "top", 80, "Waxy / Citrus"),
        chem("c10_aldehyde", "Decanal (C10)", ALDEHYDES, "top", 90, "Orange Peel"),
        chem("c12_aldehyde", "Lauric Aldehyde", ALDEHYDES, "mid", 150, "Fresh / Metallic"),
        chem("limonene", "Limonene", TERPENES, "top", 40, "Lemon / Citrus"),
        chem("linalool", "Linalool", TERPENES, "mid", 100, "Lavender / Spice"),
        chem("santalol", "Santalol", TERPENES, "base", 300, "Sandalwood"),
        chem("vanillin", "Vanillin", TERPENES, "base", 200, "Vanilla"),
    ];

    let review = TargetSpec::new("review", "Critic Review")
        .with_brief("Blend 3 to 5 ingredients. Balance top, mid and base notes.")
        .with_payout(Payout::Tiered {
            terms: vec![
                ScoreTerm::Bonus {
                    when: vec![
                        Requirement::min("top", 1),
                        Requirement::min("mid", 1),
                        Requirement::min("base", 1),
                    ],
                    points: 50,
                },
                ScoreTerm::Bonus {
                    when: vec![Requirement::Min {
                        measure: Measure::OptionCount,
                        min: MAX_INGREDIENTS as i64,
                    }],
                    points: 20,
                },
                ScoreTerm::Measure(Measure::attribute(MARKET)),
            ],
            tiers: vec![
                Tier::above(80, 1000, "⭐⭐⭐⭐⭐")
                    .with_text("A timeless classic! The balance of notes is exquisite."),
                Tier::above(50, 300, "⭐⭐⭐")
                    .with_text("A decent effort, though it lacks a certain je ne sais quoi."),
                Tier::floor(50, "⭐")
                    .with_text("Smells like a chemistry lab accident. Back to the drawing board."),
            ],
        });

    Ok(GameDefinition::new(config, options, [review])?.with_facts([
        "Esters are often responsible for the pleasant smells of fruits.",
        "Aldehydes were made famous by Chanel No. 5 in 1921.",
        "Top notes evaporate quickly, while base notes can last for days.",
        "Musk was originally harvested from deer, but is now synthetic.",
        "Olfactory receptors in your nose detect specific molecular shapes.",
    ]))
}
