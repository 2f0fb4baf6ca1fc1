//! Battery Baron: assemble a cell from a cathode, an electrolyte and an
//! anode to fill a customer contract.
//!
//! Every part costs money up front. A contract pays out minus the cost of
//! materials, a failed build forfeits them, and the lab goes bankrupt when
//! funds run out. Requirements are checked minimums first, then maximums.

use crate::core::{BuildRules, GameConfig, SessionRules, SlotConfig, SlotId};
use crate::error::LabError;
use crate::options::OptionDef;
use crate::rules::{Payout, Penalty, Requirement, TargetSpec};

use super::GameDefinition;

pub const NAME: &str = "battery-baron";

pub const CATHODE: SlotId = SlotId::new(0);
pub const ELECTROLYTE: SlotId = SlotId::new(1);
pub const ANODE: SlotId = SlotId::new(2);

fn part(
    id: &str,
    name: &str,
    slot: SlotId,
    cost: i64,
    energy: i64,
    safety: i64,
    voltage_cv: i64,
) -> OptionDef {
    OptionDef::new(id, name, slot)
        .with_cost(cost)
        .with_attr("energy", energy)
        .with_attr("safety", safety)
        .with_attr("voltage_cv", voltage_cv)
}

pub fn definition() -> Result<GameDefinition, LabError> {
    let config = GameConfig::new(NAME)
        .with_slot(SlotConfig::new(CATHODE, "cathode"))
        .with_slot(SlotConfig::new(ELECTROLYTE, "electrolyte"))
        .with_slot(SlotConfig::new(ANODE, "anode"))
        .with_build(BuildRules::new(3, 3).requiring([CATHODE, ELECTROLYTE, ANODE]))
        .with_session(
            SessionRules::new(1000)
                .with_reputation(50, 10)
                .charging_build_cost(),
        );

    let options = [
        part("lco", "LCO (Lithium Cobalt Oxide)", CATHODE, 300, 9, 3, 390)
            .with_blurb("High energy density, but expensive and prone to thermal runaway.")
            .with_fact(
                "LCO is common in smartphones but uses cobalt, which is scarce and expensive. \
                 It can release oxygen when overheated, causing fires.",
            ),
        part("lfp", "LFP (Lithium Iron Phosphate)", CATHODE, 100, 5, 9, 320)
            .with_blurb("Very safe and cheap, but lower energy density.")
            .with_fact(
                "LFP uses abundant iron. It is extremely stable and won't catch fire easily, \
                 making it a good fit for EVs where safety is paramount.",
            ),
        part("nmc", "NMC (Nickel Manganese Cobalt)", CATHODE, 200, 8, 5, 370)
            .with_blurb("A balanced choice. Good energy, moderate safety.")
            .with_fact(
                "NMC blends nickel for energy with manganese for stability. \
                 It is the standard for modern long-range EVs.",
            ),
        part("liquid", "Liquid Organic", ELECTROLYTE, 50, 5, 4, 0)
            .with_blurb("Standard industry electrolyte. Flammable.")
            .with_fact(
                "Liquid electrolytes move ions fast but are made of organic solvents \
                 that burn easily if the cell is punctured.",
            ),
        part("solid", "Solid State (Ceramic)", ELECTROLYTE, 400, 7, 10, 20)
            .with_blurb("Non-flammable and dense.")
            .with_fact(
                "Solid-state cells replace the liquid with a ceramic or polymer. \
                 They are virtually fireproof and allow denser anodes.",
            ),
        part("graphite", "Graphite", ANODE, 50, 5, 7, 10)
            .with_blurb("Reliable, standard carbon anode.")
            .with_fact(
                "Graphite is layers of carbon that host lithium ions between its sheets \
                 (intercalation). It is stable and cheap.",
            ),
        part("silicon", "Silicon", ANODE, 250, 10, 2, 0)
            .with_blurb("Massive capacity, but swells and cracks.")
            .with_fact(
                "Silicon holds ten times more lithium than graphite but swells by 300% \
                 when charged, which can destroy the cell without special engineering.",
            ),
    ];

    let contract = |key: &str, title: &str, payout: i64| {
        TargetSpec::new(key, title)
            .with_payout(Payout::NetOfCost(payout))
            .with_penalty(Penalty::BuildCost)
    };

    let targets = [
        contract("phone", "Smartphone Battery", 800)
            .require(Requirement::min("energy", 18))
            .require(Requirement::min("safety", 10))
            .with_brief("A battery for a flagship phone. It must last all day.")
            .with_hint("Phones need high energy in a small space. Capacity is king."),
        contract("ev", "Budget EV Pack", 1200)
            .require(Requirement::min("safety", 20))
            .require(Requirement::max("cost", 300))
            .with_brief("An affordable city car. Needs to be cheap and very safe.")
            .with_hint("For budget EVs, cost and safety beat raw range. LFP is a strong candidate."),
        contract("grid", "Grid Storage", 1500)
            .require(Requirement::min("safety", 24))
            .with_brief("Stationary storage for a solar farm. Safety is the only priority.")
            .with_hint("Stationary packs don't move, so weight doesn't matter. They must never catch fire."),
        contract("drone", "Racing Drone", 2000)
            .require(Requirement::min("energy", 22))
            .with_brief("High performance needed. Cost is no object.")
            .with_hint("Racing drones need maximum power density. Push the chemistry to the limit."),
    ];

    GameDefinition::new(config, options, targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Build;
    use crate::rules::RuleEvaluator;

    fn cell(cathode: &str, electrolyte: &str, anode: &str) -> Build {
        Build::new()
            .with_pick(CATHODE, cathode)
            .with_pick(ELECTROLYTE, electrolyte)
            .with_pick(ANODE, anode)
    }

    #[test]
    fn test_every_contract_is_winnable() {
        let game = definition().unwrap();
        let eval = RuleEvaluator::new(&game);
        let winners = [
            ("phone", cell("nmc", "liquid", "silicon")),
            ("ev", cell("lfp", "liquid", "graphite")),
            ("grid", cell("lfp", "solid", "graphite")),
            ("drone", cell("lco", "solid", "silicon")),
        ];
        for (key, build) in winners {
            let (_, target) = game.targets.find(key).unwrap();
            let verdict = eval.evaluate(&build, target);
            assert!(verdict.is_success(), "{key}: {:?}", verdict.reason());
        }
    }

    #[test]
    fn test_net_payout() {
        let game = definition().unwrap();
        let (_, grid) = game.targets.find("grid").unwrap();
        // lfp 100 + solid 400 + graphite 50
        let verdict = RuleEvaluator::new(&game).evaluate(&cell("lfp", "solid", "graphite"), grid);
        assert_eq!(verdict.score, 1500 - 550);
    }
}
