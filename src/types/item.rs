use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest value an item can hold after a step.
pub const MIN_VALUE: i64 = 0;

/// Highest value an item can hold after a step.
pub const MAX_VALUE: i64 = 50;

/// A unit of state advanced once per step.
///
/// `freshness` counts down toward (and past) zero; `value` is the score that
/// rules adjust. Construction does not clamp `value`, only a step does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub freshness: i64,
    pub value: i64,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, freshness: i64, value: i64) -> Self {
        Self {
            name: name.into(),
            freshness,
            value,
        }
    }

    /// Returns `true` once freshness has gone below zero.
    #[must_use]
    pub fn is_past_due(&self) -> bool {
        self.freshness < 0
    }
}

/// Clamp a running value into `[MIN_VALUE, MAX_VALUE]`.
#[must_use]
pub fn clamp_value(value: i64) -> i64 {
    value.clamp(MIN_VALUE, MAX_VALUE)
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (freshness: {}, value: {})",
            self.name, self.freshness, self.value
        )
    }
}
