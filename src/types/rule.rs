use std::fmt;

use super::condition::Condition;

/// What a rule does to the running value when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Add to the running value and keep going.
    Change(i64),
    /// Replace the running value and stop processing further rules.
    Set(i64),
    /// No recognizable effect. The condition is still evaluated.
    None,
}

/// A condition paired with an effect. Rules are applied in the order they
/// appear in their [`ItemConfig`](super::ItemConfig).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub condition: Condition,
    pub effect: Effect,
}

/// Intermediate builder returned by [`Rule::when()`]; pick an effect to
/// produce a [`Rule`].
#[derive(Debug, Clone)]
pub struct PendingRule {
    condition: Condition,
}

impl Rule {
    #[must_use]
    pub fn new(condition: impl Into<Condition>, effect: Effect) -> Self {
        Self {
            condition: condition.into(),
            effect,
        }
    }

    /// Start a rule from a condition string or a compiled [`Condition`].
    #[must_use]
    pub fn when(condition: impl Into<Condition>) -> PendingRule {
        PendingRule {
            condition: condition.into(),
        }
    }

    /// Whether a match on this rule ends the pass.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.effect, Effect::Set(_))
    }
}

impl PendingRule {
    #[must_use]
    pub fn change(self, amount: i64) -> Rule {
        Rule::new(self.condition, Effect::Change(amount))
    }

    #[must_use]
    pub fn set(self, value: i64) -> Rule {
        Rule::new(self.condition, Effect::Set(value))
    }

    #[must_use]
    pub fn no_effect(self) -> Rule {
        Rule::new(self.condition, Effect::None)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Change(amount) => write!(f, "change {amount:+}"),
            Effect::Set(value) => write!(f, "set {value}"),
            Effect::None => write!(f, "no effect"),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "when {}: {}", self.condition, self.effect)
    }
}
