use tracing::trace;

use crate::{clamp_value, Condition, Effect, Item, ItemConfig, StepReport};

/// Evaluate a condition string against an item. Strings that do not fit the
/// condition grammar evaluate to `false`.
#[must_use]
pub fn evaluate(expr: &str, item: &Item) -> bool {
    Condition::parse(expr).evaluate(item)
}

/// Advance `item` by one step under `config`.
#[must_use]
pub fn apply(config: &ItemConfig, item: &Item) -> Item {
    run(config, item, None).0
}

pub(crate) fn apply_detailed(config: &ItemConfig, item: &Item) -> StepReport {
    let mut fired = Vec::new();
    let (next, stopped_at, unclamped) = run(config, item, Some(&mut fired));
    StepReport::new(next, fired, stopped_at, unclamped)
}

/// One pass over the rule list. Conditions see the post-step freshness and
/// the running value; the first matching `set` ends the pass.
fn run(
    config: &ItemConfig,
    item: &Item,
    mut fired: Option<&mut Vec<usize>>,
) -> (Item, Option<usize>, i64) {
    let mut view = Item {
        name: item.name.clone(),
        freshness: item.freshness.saturating_add(config.freshness_change),
        value: item.value,
    };
    let mut stopped_at = None;

    for (idx, rule) in config.rules.iter().enumerate() {
        if !rule.condition.evaluate(&view) {
            continue;
        }
        trace!(item = %view.name, rule = idx, %rule, value = view.value, "rule fired");
        if let Some(fired) = fired.as_mut() {
            fired.push(idx);
        }
        match rule.effect {
            Effect::Change(amount) => view.value = view.value.saturating_add(amount),
            Effect::Set(value) => {
                view.value = value;
                stopped_at = Some(idx);
                break;
            }
            Effect::None => {}
        }
    }

    let unclamped = view.value;
    view.value = clamp_value(unclamped);
    (view, stopped_at, unclamped)
}
