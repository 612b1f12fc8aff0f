use std::fmt;

use super::item::Item;

/// Detailed outcome of one step for one item, returned by
/// [`ItemConfig::apply_detailed()`](super::ItemConfig::apply_detailed).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct StepReport {
    item: Item,
    fired: Vec<usize>,
    stopped_at: Option<usize>,
    unclamped_value: i64,
}

impl StepReport {
    pub(crate) fn new(
        item: Item,
        fired: Vec<usize>,
        stopped_at: Option<usize>,
        unclamped_value: i64,
    ) -> Self {
        Self {
            item,
            fired,
            stopped_at,
            unclamped_value,
        }
    }

    /// The updated item, same as [`ItemConfig::apply()`](super::ItemConfig::apply).
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[must_use]
    pub fn into_item(self) -> Item {
        self.item
    }

    /// Indices of rules whose condition held, in evaluation order.
    #[must_use]
    pub fn fired(&self) -> &[usize] {
        &self.fired
    }

    /// Index of the `set` rule that ended the pass, if any.
    #[must_use]
    pub fn stopped_at(&self) -> Option<usize> {
        self.stopped_at
    }

    /// The running value after all rules, before clamping.
    #[must_use]
    pub fn unclamped_value(&self) -> i64 {
        self.unclamped_value
    }

    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.unclamped_value != self.item.value
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)?;
        let fired: Vec<String> = self.fired.iter().map(ToString::to_string).collect();
        write!(f, ", fired: [{}]", fired.join(", "))?;
        if let Some(idx) = self.stopped_at {
            write!(f, ", stopped at: {idx}")?;
        }
        if self.was_clamped() {
            write!(f, ", clamped from: {}", self.unclamped_value)?;
        }
        Ok(())
    }
}
