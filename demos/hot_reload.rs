use std::sync::Arc;

use tickrules::{Configuration, Item, Orchestrator};
use tracing_subscriber::EnvFilter;

const CATALOGUE: &str = include_str!("../tests/fixtures/pharmacy.json");

// What a config generator might return for "Vitamin C keeps gaining two
// points a day but never goes above 40".
const GENERATED: &str = r#"{
    "Vitamin C": {
        "freshnessChange": -1,
        "rules": [
            { "when": "value >= 40", "set": 40 },
            { "when": "true", "change": 2 }
        ]
    }
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = Configuration::from_json(CATALOGUE).expect("failed to load catalogue");
    let mut orchestrator = Orchestrator::new(
        vec![Item::new("Vitamin C", 10, 30), Item::new("Fervex", 8, 10)],
        base.clone(),
    );

    orchestrator.step().expect("step before reload");
    println!("before reload: {:?}", orchestrator.items());

    let mut reloaded = base;
    reloaded.merge(Configuration::fragment_from_json(GENERATED).expect("bad fragment"));
    let previous = orchestrator.set_configuration(Arc::new(reloaded));
    println!("replaced {previous}");

    for _ in 0..8 {
        orchestrator.step().expect("step after reload");
    }
    println!("after reload: {:?}", orchestrator.items());
}
