//! A data-driven item update engine.
//!
//! Each [`Item`] carries a `freshness` counter and a `value` score. Once per
//! step, the item's [`ItemConfig`] (looked up by name in a [`Configuration`],
//! falling back to the `"Default"` entry) moves freshness by a fixed amount
//! and runs an ordered list of [`Rule`]s over the value. Conditions are tiny
//! strings such as `"freshness < 0"` or `"true"`; a matching `change` rule
//! adds to the value and continues, a matching `set` rule replaces it and
//! stops. The value is clamped to `[0, 50]` at the end of every step.
//!
//! ```
//! use tickrules::{Configuration, Item, Orchestrator};
//!
//! let config = Configuration::from_json(r#"{
//!     "Fervex": {
//!         "freshnessChange": -1,
//!         "rules": [
//!             { "when": "freshness < 0", "set": 0 },
//!             { "when": "true", "change": 1 },
//!             { "when": "freshness < 10", "change": 1 },
//!             { "when": "freshness < 5", "change": 1 }
//!         ]
//!     },
//!     "Default": {
//!         "freshnessChange": -1,
//!         "rules": [
//!             { "when": "true", "change": -1 },
//!             { "when": "freshness < 0", "change": -1 }
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let mut orchestrator = Orchestrator::new(
//!     vec![Item::new("Fervex", 10, 10), Item::new("Doliprane", 2, 3)],
//!     config,
//! );
//! assert_eq!(
//!     orchestrator.step().unwrap(),
//!     &[Item::new("Fervex", 9, 12), Item::new("Doliprane", 1, 2)],
//! );
//! ```

mod compile;
mod error;
mod evaluate;
mod orchestrator;
pub mod parse;
mod types;

pub use error::TickError;
pub use evaluate::{apply, evaluate};
pub use orchestrator::{step_batch, Orchestrator};
pub use parse::{parse_condition, ParseError};
pub use types::{
    clamp_value, CompareOp, Condition, ConfigError, Configuration, ConfigurationBuilder, Effect,
    Field, Item, ItemConfig, ItemConfigBuilder, PendingRule, Rule, StepError, StepReport,
    DEFAULT_ITEM, MAX_VALUE, MIN_VALUE,
};
