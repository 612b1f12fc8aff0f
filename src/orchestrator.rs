use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::{Configuration, Item, StepError};

/// Advance every item in `items` by one step under `config`.
///
/// Output order matches input order, duplicates included. If any item has
/// neither its own entry nor a default to fall back on, nothing is produced
/// and the first such item is reported.
///
/// # Errors
///
/// Returns [`StepError::MissingConfiguration`] for the first unresolvable item.
pub fn step_batch(config: &Configuration, items: &[Item]) -> Result<Vec<Item>, StepError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            config
                .resolve(&item.name)
                .map(|item_config| item_config.apply(item))
                .ok_or_else(|| StepError::MissingConfiguration {
                    name: item.name.clone(),
                    index,
                })
        })
        .collect()
}

/// Owns a batch of items and the configuration that advances them.
///
/// The configuration sits behind an `Arc` so several orchestrators can share
/// one without copying it. A failed [`step()`](Self::step) leaves the batch as
/// it was.
///
/// # Example
///
/// ```
/// use tickrules::{Configuration, Item, Orchestrator};
///
/// let config = Configuration::from_json(r#"{
///     "Default": {
///         "freshnessChange": -1,
///         "rules": [
///             { "when": "true", "change": -1 },
///             { "when": "freshness < 0", "change": -1 }
///         ]
///     }
/// }"#).unwrap();
///
/// let mut orchestrator = Orchestrator::new(vec![Item::new("X", 0, 3)], config);
/// assert_eq!(orchestrator.step().unwrap(), &[Item::new("X", -1, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Orchestrator {
    items: Vec<Item>,
    config: Arc<Configuration>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(items: Vec<Item>, config: impl Into<Arc<Configuration>>) -> Self {
        Self {
            items,
            config: config.into(),
        }
    }

    /// Advance every item by one step and return the new batch.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::MissingConfiguration`] if an item resolves to no
    /// configuration. The batch is left unchanged in that case.
    pub fn step(&mut self) -> Result<&[Item], StepError> {
        let next = step_batch(&self.config, &self.items)?;
        debug!(items = next.len(), "advanced batch one step");
        self.items = next;
        Ok(&self.items)
    }

    /// Advance `steps` times. Stops at the first failing step, keeping the
    /// batch produced by the last successful one.
    ///
    /// # Errors
    ///
    /// Same as [`step()`](Self::step).
    pub fn step_n(&mut self, steps: usize) -> Result<&[Item], StepError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(&self.items)
    }

    /// Replace the configuration used by later steps, returning the old one.
    pub fn set_configuration(
        &mut self,
        config: impl Into<Arc<Configuration>>,
    ) -> Arc<Configuration> {
        let previous = std::mem::replace(&mut self.config, config.into());
        debug!(%previous, current = %self.config, "configuration replaced");
        previous
    }

    #[must_use]
    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Add an item to the end of the batch.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Orchestrator({} items, {})", self.items.len(), self.config)
    }
}
