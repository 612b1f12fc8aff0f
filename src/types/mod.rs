mod condition;
mod configuration;
mod error;
mod item;
mod item_config;
mod report;
mod rule;

pub use condition::{CompareOp, Condition, Field};
pub use configuration::{Configuration, ConfigurationBuilder, DEFAULT_ITEM};
pub use error::{ConfigError, StepError};
pub use item::{clamp_value, Item, MAX_VALUE, MIN_VALUE};
pub use item_config::{ItemConfig, ItemConfigBuilder};
pub use report::StepReport;
pub use rule::{Effect, PendingRule, Rule};
