use std::collections::HashMap;
use std::fmt;

use super::error::ConfigError;
use super::item_config::{ItemConfig, ItemConfigBuilder};

/// Name of the entry used for any item the configuration does not list.
pub const DEFAULT_ITEM: &str = "Default";

/// Mapping from item name to its [`ItemConfig`].
///
/// A full configuration carries a [`DEFAULT_ITEM`] entry; a fragment (for
/// example the output of a config generator for a single item) may not, and
/// is meant to be folded into a full one with [`merge()`](Self::merge).
/// Immutable once handed to an [`Orchestrator`](crate::Orchestrator), and
/// safe to share across threads behind `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    items: HashMap<String, ItemConfig>,
}

impl Configuration {
    /// An empty configuration with no entries, not even a default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the config for `name`, falling back to the default entry.
    ///
    /// Returns `None` only when neither exists.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&ItemConfig> {
        self.items
            .get(name)
            .or_else(|| self.items.get(DEFAULT_ITEM))
    }

    /// Exact lookup, without the default fallback.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ItemConfig> {
        self.items.get(name)
    }

    /// Insert or replace the entry for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, config: ItemConfig) -> Option<ItemConfig> {
        self.items.insert(name.into(), config)
    }

    /// Fold `fragment` into this configuration. Entries in `fragment`
    /// replace entries with the same name.
    pub fn merge(&mut self, fragment: Configuration) {
        self.items.extend(fragment.items);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    #[must_use]
    pub fn has_default(&self) -> bool {
        self.contains(DEFAULT_ITEM)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configured item names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parse a full configuration from JSON text. Requires a default entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, an invalid freshness
    /// change, a non-array rule list, or a missing default entry.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Self::fragment_from_json(input)?.require_default()
    }

    /// Build a full configuration from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`from_json()`](Self::from_json).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Self::fragment_from_value(value)?.require_default()
    }

    /// Parse a configuration fragment from JSON text. No default is required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, an invalid freshness
    /// change, or a non-array rule list.
    pub fn fragment_from_json(input: &str) -> Result<Self, ConfigError> {
        let raw = serde_json::from_str(input)?;
        crate::compile::compile(raw)
    }

    /// Build a configuration fragment from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`fragment_from_json()`](Self::fragment_from_json).
    pub fn fragment_from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw = serde_json::from_value(value)?;
        crate::compile::compile(raw)
    }

    fn require_default(self) -> Result<Self, ConfigError> {
        if self.has_default() {
            Ok(self)
        } else {
            Err(ConfigError::MissingDefault)
        }
    }
}

impl FromIterator<(String, ItemConfig)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, ItemConfig)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Configuration({} items, default: {})",
            self.items.len(),
            if self.has_default() { "yes" } else { "no" },
        )
    }
}

/// Builder for constructing a [`Configuration`] in code.
///
/// # Example
///
/// ```
/// use tickrules::{ConfigurationBuilder, Item, Rule};
///
/// let config = ConfigurationBuilder::new()
///     .item("Herbal Tea", |c| {
///         c.freshness_change(-1)
///             .rule(Rule::when("true").change(1))
///             .rule(Rule::when("freshness < 0").change(1))
///     })
///     .default_item(|c| {
///         c.freshness_change(-1)
///             .rule(Rule::when("true").change(-1))
///             .rule(Rule::when("freshness < 0").change(-1))
///     })
///     .build()
///     .unwrap();
///
/// let tea = config.resolve("Herbal Tea").unwrap().apply(&Item::new("Herbal Tea", 0, 3));
/// assert_eq!(tea, Item::new("Herbal Tea", -1, 5));
/// ```
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    items: Vec<(String, ItemConfig)>,
}

impl ConfigurationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the config for one item name. Defining a name twice keeps the
    /// later definition.
    #[must_use]
    pub fn item(
        mut self,
        name: &str,
        f: impl FnOnce(ItemConfigBuilder) -> ItemConfigBuilder,
    ) -> Self {
        let config = f(ItemConfigBuilder::default()).build();
        self.items.push((name.to_owned(), config));
        self
    }

    /// Define the fallback config used for unlisted names.
    #[must_use]
    pub fn default_item(self, f: impl FnOnce(ItemConfigBuilder) -> ItemConfigBuilder) -> Self {
        self.item(DEFAULT_ITEM, f)
    }

    /// Build a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDefault`] if no default entry was defined.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        self.build_fragment().require_default()
    }

    /// Build without requiring a default entry.
    #[must_use]
    pub fn build_fragment(self) -> Configuration {
        self.items.into_iter().collect()
    }
}
