//! Loading game definitions from JSON.

use lab_rules::games::{self, GAME_NAMES};
use lab_rules::{
    Build, GameDefinition, LabError, RoundController, RuleEvaluator, SlotId, TargetCatalog,
};

const KETTLE: &str = r#"{
    "config": {
        "name": "kettle",
        "slots": [{ "id": 0, "name": "leaf" }],
        "build": { "min_options": 1, "max_options": 1, "required_slots": [0] }
    },
    "options": [
        { "id": "green", "name": "Green Tea", "slot": 0, "cost": 5, "attributes": { "steep_temp": { "Int": 80 } } },
        { "id": "black", "name": "Black Tea", "slot": 0, "cost": 4, "attributes": { "steep_temp": { "Int": 95 } } }
    ],
    "targets": [
        {
            "key": "delicate",
            "title": "Delicate Cup",
            "requirements": [
                { "Max": { "measure": { "Attribute": "steep_temp" }, "max": 85 } }
            ],
            "payout": { "Fixed": 10 }
        }
    ]
}"#;

#[test]
fn test_builtin_games_round_trip() {
    for name in GAME_NAMES {
        let game = games::by_name(name).unwrap();
        let json = game.to_json().unwrap();
        assert_eq!(GameDefinition::from_json(&json).unwrap(), game, "{name}");
    }
}

#[test]
fn test_custom_game_from_json() {
    let game = GameDefinition::from_json(KETTLE).unwrap();
    assert_eq!(game.name(), "kettle");
    assert_eq!(game.options.len(), 2);

    let (_, delicate) = game.targets.find("delicate").unwrap();
    let eval = RuleEvaluator::new(&game);
    let leaf = SlotId::new(0);

    assert_eq!(eval.evaluate(&Build::new().with_pick(leaf, "green"), delicate).score, 10);
    let verdict = eval.evaluate(&Build::new().with_pick(leaf, "black"), delicate);
    assert_eq!(verdict.reason().unwrap(), "steep_temp too high (95/85): over by 10");

    let mut session = RoundController::new(game, 0).unwrap();
    session.select(&"green".into()).unwrap();
    assert!(session.submit().unwrap().is_success());
    assert_eq!(session.ledger().balance, 10);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        GameDefinition::from_json("{ not json"),
        Err(LabError::Json(_))
    ));
}

#[test]
fn test_inconsistent_json_rejected() {
    // requirement refers to a slot that was never declared
    let bad = KETTLE.replace(
        r#"{ "Max": { "measure": { "Attribute": "steep_temp" }, "max": 85 } }"#,
        r#"{ "ExactMatch": { "slot": 3, "expected": { "Option": "green" } } }"#,
    );
    assert!(matches!(
        GameDefinition::from_json(&bad),
        Err(LabError::UnknownSlot(slot)) if slot == SlotId::new(3)
    ));

    let mut empty = GameDefinition::from_json(KETTLE).unwrap();
    empty.targets = TargetCatalog::new();
    let json = serde_json::to_string(&empty).unwrap();
    assert!(matches!(
        GameDefinition::from_json(&json),
        Err(LabError::EmptyTargetCatalog(name)) if name == "kettle"
    ));
}

#[test]
fn test_unknown_game() {
    assert!(matches!(
        games::by_name("cold-fusion"),
        Err(LabError::UnknownGame(_))
    ));
}
