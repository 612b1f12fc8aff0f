use tickrules::{Item, ItemConfig, Rule};

fn main() {
    let fervex = ItemConfig::builder()
        .freshness_change(-1)
        .rule(Rule::when("freshness < 0").set(0))
        .rule(Rule::when("true").change(1))
        .rule(Rule::when("freshness < 10").change(1))
        .rule(Rule::when("freshness < 5").change(1))
        .build();

    for (idx, rule) in fervex.rules.iter().enumerate() {
        println!("rule {idx}: {rule}");
    }

    for item in [
        Item::new("Fervex", 12, 10),
        Item::new("Fervex", 4, 48),
        Item::new("Fervex", 0, 30),
    ] {
        let report = fervex.apply_detailed(&item);
        println!("{item} -> {report}");
    }
}
