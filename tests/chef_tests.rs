//! Cultured Chef end-to-end tests.
//!
//! Orders combine exact ingredient matches with a temperature band taken
//! from the chosen microbe.

use lab_rules::games::chef::{self, ADDITIVE, MICROBE, SUBSTRATE, TEMP};
use lab_rules::{Build, EndReason, FailureReason, RoundController, RuleEvaluator, SessionStatus};

fn jar(substrate: &str, microbe: &str, additive: &str, temp: i64) -> Build {
    Build::new()
        .with_pick(SUBSTRATE, substrate)
        .with_pick(MICROBE, microbe)
        .with_pick(ADDITIVE, additive)
        .with_dial(TEMP, temp)
}

#[test]
fn test_yogurt_with_yeast_reports_microbe() {
    let game = chef::definition().unwrap();
    let (_, yogurt) = game.targets.find("yogurt").unwrap();

    // 40°C is outside yeast's 15..=35 band too, but the microbe comes first
    let verdict = RuleEvaluator::new(&game).evaluate(&jar("milk", "yeast", "none", 40), yogurt);

    assert!(verdict.is_failure());
    assert_eq!(
        verdict.reasons,
        vec![FailureReason::Mismatch {
            slot: "microbe".into(),
            expected: "lacto".into(),
            found: "yeast".into(),
        }]
    );
    assert_eq!(verdict.reason().unwrap(), "wrong microbe: needs lacto, got yeast");
}

#[test]
fn test_yogurt_band_follows_microbe() {
    let game = chef::definition().unwrap();
    let (_, yogurt) = game.targets.find("yogurt").unwrap();
    let eval = RuleEvaluator::new(&game);

    // lacto: 40 ± 10
    for temp in [30, 40, 50] {
        assert!(eval.evaluate(&jar("milk", "lacto", "sugar", temp), yogurt).is_success());
    }
    let hot = eval.evaluate(&jar("milk", "lacto", "sugar", 51), yogurt);
    assert_eq!(
        hot.reasons,
        vec![FailureReason::OutOfRange {
            measure: "temp".into(),
            actual: 51,
            low: 30,
            high: 50,
        }]
    );
    assert_eq!(hot.reason().unwrap(), "temp too high (51 not in 30..=50)");
}

#[test]
fn test_kitchen_closes_on_lost_reputation() {
    let mut session = RoundController::new(chef::definition().unwrap(), 11).unwrap();

    // milk + aceto + sugar matches no order
    for id in ["milk", "aceto", "sugar"] {
        session.select(&id.into()).unwrap();
    }
    session.set_dial(TEMP, 100).unwrap();

    for expected in [40, 30, 20, 10] {
        assert!(session.submit().unwrap().is_failure());
        assert_eq!(session.ledger().reputation, Some(expected));
    }
    assert!(!session.is_over());

    session.submit().unwrap();
    assert_eq!(session.ledger().reputation, Some(0));
    assert_eq!(session.status(), SessionStatus::Ended(EndReason::ReputationLost));
    assert_eq!(session.round(), 1);
}
