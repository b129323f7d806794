use thiserror::Error;

/// Errors raised while loading or validating a game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::Invalid(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_convert() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("config is not valid JSON"));
    }

    #[test]
    fn invalid_message_is_kept() {
        let err = ConfigError::invalid("zoom range is empty");
        assert_eq!(err.to_string(), "invalid config: zoom range is empty");
    }
}
