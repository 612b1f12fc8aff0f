use std::collections::BTreeMap;

use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::{Map, Value as Json};
use tracing::{debug, warn};

use crate::{Condition, ConfigError, Configuration, Effect, ItemConfig, Rule};

/// Configuration as it arrives over JSON, keyed in name order so load
/// diagnostics are stable.
pub(crate) type RawConfiguration = BTreeMap<String, Json>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItemConfig {
    #[serde(default)]
    freshness_change: Option<Json>,
    /// Source shape: `"expiresIn": { "change": n }`.
    #[serde(default)]
    expires_in: Option<Json>,
    /// Source shape names the rule array `"benefit"`.
    #[serde(default, alias = "benefit")]
    rules: Option<Json>,
}

pub(crate) fn compile(raw: RawConfiguration) -> Result<Configuration, ConfigError> {
    let mut items = Vec::with_capacity(raw.len());
    for (name, entry) in raw {
        let config = compile_item(&name, entry)?;
        debug!(
            item = %name,
            freshness_change = config.freshness_change,
            rules = config.rules.len(),
            "compiled item config"
        );
        items.push((name, config));
    }
    Ok(items.into_iter().collect())
}

/// Serde would also accept a positional array for a struct; only objects are
/// item entries.
fn expect_object(entry: &Json, expected: &'static str) -> Result<(), serde_json::Error> {
    match entry {
        Json::Object(_) => Ok(()),
        other => Err(serde_json::Error::invalid_type(unexpected(other), &expected)),
    }
}

fn unexpected(value: &Json) -> Unexpected<'_> {
    match value {
        Json::Null => Unexpected::Unit,
        Json::Bool(b) => Unexpected::Bool(*b),
        Json::Number(_) => Unexpected::Other("number"),
        Json::String(s) => Unexpected::Str(s),
        Json::Array(_) => Unexpected::Seq,
        Json::Object(_) => Unexpected::Map,
    }
}

fn compile_item(name: &str, entry: Json) -> Result<ItemConfig, ConfigError> {
    expect_object(&entry, "an item configuration object")?;
    let raw: RawItemConfig = serde_json::from_value(entry)?;
    let freshness_change = freshness_change(name, &raw)?;

    let rules = match raw.rules {
        None | Some(Json::Null) => Vec::new(),
        Some(Json::Array(entries)) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| compile_rule(name, index, &entry))
            .collect(),
        Some(other) => {
            return Err(ConfigError::InvalidRules {
                item: name.to_owned(),
                found: other.to_string(),
            });
        }
    };

    Ok(ItemConfig::new(freshness_change, rules))
}

/// `freshnessChange` wins over the source `expiresIn.change`; absence means 0.
fn freshness_change(name: &str, raw: &RawItemConfig) -> Result<i64, ConfigError> {
    let value = raw
        .freshness_change
        .as_ref()
        .filter(|v| !v.is_null())
        .or_else(|| {
            raw.expires_in
                .as_ref()
                .and_then(Json::as_object)
                .and_then(|e| e.get("change"))
        })
        .filter(|v| !v.is_null());

    match value {
        None => Ok(0),
        Some(v) => coerce_int(v).ok_or_else(|| ConfigError::InvalidFreshnessChange {
            item: name.to_owned(),
            found: v.to_string(),
        }),
    }
}

fn compile_rule(name: &str, index: usize, entry: &Json) -> Rule {
    let Some(fields) = entry.as_object() else {
        warn!(item = %name, index, rule = %entry, "rule is not an object; treating as no-op");
        return Rule::new(Condition::Malformed(entry.to_string()), Effect::None);
    };

    let condition = match fields.get("when") {
        Some(Json::String(s)) => Condition::parse(s),
        Some(other) => Condition::Malformed(other.to_string()),
        None => Condition::Malformed(String::new()),
    };
    if condition.is_malformed() {
        warn!(item = %name, index, when = %condition, "malformed rule condition never matches");
    }

    let effect = effect(fields);
    if effect == Effect::None {
        warn!(item = %name, index, "rule has no usable change or set; treating as no-op");
    }

    Rule::new(condition, effect)
}

/// A `set` key decides the effect whenever it is present, even as `null` or
/// alongside `change`.
fn effect(fields: &Map<String, Json>) -> Effect {
    match (fields.get("set"), fields.get("change")) {
        (Some(set), _) => coerce_int(set).map_or(Effect::None, Effect::Set),
        (None, Some(change)) => coerce_int(change).map_or(Effect::None, Effect::Change),
        (None, None) => Effect::None,
    }
}

/// Integers, integral floats, and strings holding an integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_int(value: &Json) -> Option<i64> {
    match value {
        Json::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Json::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
