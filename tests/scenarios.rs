use tickrules::{Configuration, Item, Orchestrator, StepError};

const PHARMACY: &str = include_str!("fixtures/pharmacy.json");

const DECAY: &str = r#"{
    "Default": {
        "freshnessChange": -1,
        "rules": [
            { "when": "true", "change": -1 },
            { "when": "freshness < 0", "change": -1 }
        ]
    }
}"#;

fn step_one(config: &str, item: Item) -> Item {
    let config = Configuration::from_json(config).unwrap();
    let mut orchestrator = Orchestrator::new(vec![item], config);
    orchestrator.step().unwrap()[0].clone()
}

// -- Default decay ----------------------------------------------------------

#[test]
fn decays_value_and_freshness() {
    assert_eq!(step_one(DECAY, Item::new("X", 2, 3)), Item::new("X", 1, 2));
}

#[test]
fn decays_twice_as_fast_once_past_due() {
    assert_eq!(step_one(DECAY, Item::new("X", 0, 3)), Item::new("X", -1, 1));
}

#[test]
fn value_never_drops_below_zero() {
    assert_eq!(step_one(DECAY, Item::new("X", 2, 0)), Item::new("X", 1, 0));
}

#[test]
fn set_rule_ends_the_pass() {
    let config = r#"{
        "Default": {
            "freshnessChange": -1,
            "rules": [
                { "when": "freshness < 0", "set": 0 },
                { "when": "true", "change": 1 }
            ]
        }
    }"#;
    assert_eq!(step_one(config, Item::new("X", 0, 20)), Item::new("X", -1, 0));
}

#[test]
fn swapping_rule_order_changes_the_result() {
    let set_first = r#"{ "Default": { "freshnessChange": -1, "rules": [
        { "when": "freshness < 0", "set": 0 },
        { "when": "true", "change": 1 }
    ] } }"#;
    let set_last = r#"{ "Default": { "freshnessChange": -1, "rules": [
        { "when": "true", "change": 1 },
        { "when": "value > 20", "set": 0 }
    ] } }"#;
    let set_never_reached = r#"{ "Default": { "freshnessChange": -1, "rules": [
        { "when": "true", "change": 1 },
        { "when": "value == 20", "set": 0 }
    ] } }"#;

    assert_eq!(step_one(set_first, Item::new("X", 0, 20)).value, 0);
    // The running value is 21 by the time the set rule is checked.
    assert_eq!(step_one(set_last, Item::new("X", 0, 20)).value, 0);
    assert_eq!(step_one(set_never_reached, Item::new("X", 0, 20)).value, 21);
}

// -- Pharmacy catalogue (source configuration shape) ------------------------

#[test]
fn herbal_tea_gains_value() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Herbal Tea", 2, 3)),
        Item::new("Herbal Tea", 1, 4)
    );
}

#[test]
fn herbal_tea_gains_twice_as_fast_past_due() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Herbal Tea", 0, 3)),
        Item::new("Herbal Tea", -1, 5)
    );
}

#[test]
fn herbal_tea_caps_at_fifty() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Herbal Tea", 2, 50)),
        Item::new("Herbal Tea", 1, 50)
    );
}

#[test]
fn fervex_gains_by_distance_to_expiry() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Fervex", 15, 3)),
        Item::new("Fervex", 14, 4)
    );
    assert_eq!(
        step_one(PHARMACY, Item::new("Fervex", 10, 3)),
        Item::new("Fervex", 9, 5)
    );
    assert_eq!(
        step_one(PHARMACY, Item::new("Fervex", 5, 3)),
        Item::new("Fervex", 4, 6)
    );
}

#[test]
fn fervex_drops_to_zero_past_due() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Fervex", 0, 20)),
        Item::new("Fervex", -1, 0)
    );
}

#[test]
fn fervex_caps_at_fifty() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Fervex", 5, 49)),
        Item::new("Fervex", 4, 50)
    );
}

#[test]
fn magic_pill_never_changes() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Magic Pill", 10, 10)),
        Item::new("Magic Pill", 10, 10)
    );
}

#[test]
fn dafalgan_decays_twice_as_fast() {
    assert_eq!(
        step_one(PHARMACY, Item::new("Dafalgan", 3, 9)),
        Item::new("Dafalgan", 2, 7)
    );
    assert_eq!(
        step_one(PHARMACY, Item::new("Dafalgan", 5, 0)),
        Item::new("Dafalgan", 4, 0)
    );
    assert_eq!(
        step_one(PHARMACY, Item::new("Dafalgan", 0, 3)),
        Item::new("Dafalgan", -1, 0)
    );
}

#[test]
fn dafalgan_over_several_days() {
    let config = Configuration::from_json(PHARMACY).unwrap();
    let mut orchestrator = Orchestrator::new(vec![Item::new("Dafalgan", 2, 10)], config);

    let expected = [(1, 8), (0, 6), (-1, 2), (-2, 0)];
    for (day, (freshness, value)) in expected.into_iter().enumerate() {
        let items = orchestrator.step().unwrap();
        assert_eq!(
            items,
            &[Item::new("Dafalgan", freshness, value)],
            "day {}",
            day + 1
        );
    }
}

#[test]
fn mixed_batch() {
    let config = Configuration::from_json(PHARMACY).unwrap();
    let mut orchestrator = Orchestrator::new(
        vec![
            Item::new("test", 2, 3),
            Item::new("Herbal Tea", 2, 3),
            Item::new("Fervex", 10, 10),
            Item::new("Magic Pill", 10, 10),
        ],
        config,
    );

    assert_eq!(
        orchestrator.step().unwrap(),
        &[
            Item::new("test", 1, 2),
            Item::new("Herbal Tea", 1, 4),
            Item::new("Fervex", 9, 12),
            Item::new("Magic Pill", 10, 10),
        ]
    );
}

// -- Generated fragments ----------------------------------------------------

#[test]
fn generated_fragment_extends_the_catalogue() {
    let mut config = Configuration::from_json(PHARMACY).unwrap();
    let fragment = Configuration::fragment_from_json(
        r#"{
            "Vitamin C": {
                "expiresIn": { "change": -1 },
                "benefit": [
                    { "when": "benefit >= 40", "set": 40 },
                    { "when": "true", "change": 2 }
                ]
            }
        }"#,
    )
    .unwrap();
    config.merge(fragment);

    let mut orchestrator = Orchestrator::new(
        vec![Item::new("Vitamin C", 5, 30), Item::new("Vitamin C", 5, 45)],
        config,
    );
    assert_eq!(
        orchestrator.step().unwrap(),
        &[Item::new("Vitamin C", 4, 32), Item::new("Vitamin C", 4, 40)]
    );
}

#[test]
fn fragment_alone_cannot_step_unknown_items() {
    let fragment = Configuration::fragment_from_json(
        r#"{ "Vitamin C": { "freshnessChange": -1, "rules": [] } }"#,
    )
    .unwrap();
    let mut orchestrator = Orchestrator::new(
        vec![Item::new("Vitamin C", 5, 30), Item::new("Fervex", 5, 30)],
        fragment,
    );
    assert_eq!(
        orchestrator.step().unwrap_err(),
        StepError::MissingConfiguration {
            name: "Fervex".into(),
            index: 1,
        }
    );
}
