use tickrules::{Configuration, Item, Orchestrator};

const CATALOGUE: &str = include_str!("../tests/fixtures/pharmacy.json");

fn main() {
    let config = Configuration::from_json(CATALOGUE).expect("failed to load catalogue");
    println!("{config}");

    let mut orchestrator = Orchestrator::new(
        vec![
            Item::new("Doliprane", 20, 30),
            Item::new("Herbal Tea", 10, 5),
            Item::new("Fervex", 12, 35),
            Item::new("Magic Pill", 15, 40),
            Item::new("Dafalgan", 5, 20),
        ],
        config,
    );

    for day in 1..=14 {
        let items = orchestrator.step().expect("every item resolves");
        println!("day {day}:");
        for item in items {
            println!("  {item}");
        }
    }
}
