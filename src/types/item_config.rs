use std::fmt;

use super::item::Item;
use super::report::StepReport;
use super::rule::Rule;

/// How one kind of item changes per step: a freshness delta plus an ordered
/// rule list for its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemConfig {
    pub freshness_change: i64,
    pub rules: Vec<Rule>,
}

/// Builder passed to the per-item closures of
/// [`ConfigurationBuilder`](super::ConfigurationBuilder).
#[derive(Debug, Default)]
pub struct ItemConfigBuilder {
    freshness_change: i64,
    rules: Vec<Rule>,
}

impl ItemConfig {
    #[must_use]
    pub fn new(freshness_change: i64, rules: Vec<Rule>) -> Self {
        Self {
            freshness_change,
            rules,
        }
    }

    /// A config that leaves both freshness and value untouched.
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> ItemConfigBuilder {
        ItemConfigBuilder::default()
    }

    /// Advance `item` by one step under this config.
    #[must_use]
    pub fn apply(&self, item: &Item) -> Item {
        crate::evaluate::apply(self, item)
    }

    /// Like [`apply()`](Self::apply), but also records which rules fired.
    pub fn apply_detailed(&self, item: &Item) -> StepReport {
        crate::evaluate::apply_detailed(self, item)
    }
}

impl ItemConfigBuilder {
    /// Amount added to freshness on every step.
    #[must_use]
    pub fn freshness_change(mut self, change: i64) -> Self {
        self.freshness_change = change;
        self
    }

    /// Append a rule. Rules run in the order they are added.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn build(self) -> ItemConfig {
        ItemConfig::new(self.freshness_change, self.rules)
    }
}

impl fmt::Display for ItemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ItemConfig(freshness {:+}, {} rules)",
            self.freshness_change,
            self.rules.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_rule_order() {
        let config = ItemConfig::builder()
            .freshness_change(-1)
            .rule(Rule::when("freshness < 0").set(0))
            .rule(Rule::when("true").change(1))
            .build();
        assert_eq!(config.freshness_change, -1);
        assert_eq!(config.rules.len(), 2);
        assert!(config.rules[0].is_terminal());
        assert!(!config.rules[1].is_terminal());
    }

    #[test]
    fn unchanged_is_identity() {
        let item = Item::new("Magic Pill", 10, 10);
        assert_eq!(ItemConfig::unchanged().apply(&item), item);
    }

    #[test]
    fn display() {
        let config = ItemConfig::new(-1, vec![Rule::when("true").change(-1)]);
        assert_eq!(config.to_string(), "ItemConfig(freshness -1, 1 rules)");
    }
}
