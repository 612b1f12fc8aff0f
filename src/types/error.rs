use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid freshness change for '{item}': expected an integer, found {found}")]
    InvalidFreshnessChange { item: String, found: String },

    #[error("invalid rules for '{item}': expected an array, found {found}")]
    InvalidRules { item: String, found: String },

    #[error("configuration has no 'Default' entry")]
    MissingDefault,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("no configuration for item '{name}' at position {index} and no 'Default' entry")]
    MissingConfiguration { name: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_freshness_change_message() {
        let err = ConfigError::InvalidFreshnessChange {
            item: "Fervex".into(),
            found: "\"soon\"".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid freshness change for 'Fervex': expected an integer, found \"soon\""
        );
    }

    #[test]
    fn invalid_rules_message() {
        let err = ConfigError::InvalidRules {
            item: "Fervex".into(),
            found: "{}".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rules for 'Fervex': expected an array, found {}"
        );
    }

    #[test]
    fn missing_default_message() {
        assert_eq!(
            ConfigError::MissingDefault.to_string(),
            "configuration has no 'Default' entry"
        );
    }

    #[test]
    fn missing_configuration_message() {
        let err = StepError::MissingConfiguration {
            name: "Fervex".into(),
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "no configuration for item 'Fervex' at position 2 and no 'Default' entry"
        );
    }
}
