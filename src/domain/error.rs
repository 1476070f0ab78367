//! Engine error types.

/// Top-level error type for quantback.
#[derive(Debug, thiserror::Error)]
pub enum QuantbackError {
    #[error("invalid strategy: {name}")]
    InvalidStrategy { name: String },

    #[error("invalid price series: {reason}")]
    InvalidSeries { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&QuantbackError> for std::process::ExitCode {
    fn from(err: &QuantbackError) -> Self {
        let code: u8 = match err {
            QuantbackError::Io(_) => 1,
            QuantbackError::ConfigParse { .. }
            | QuantbackError::ConfigMissing { .. }
            | QuantbackError::ConfigInvalid { .. } => 2,
            QuantbackError::Data { .. } => 3,
            QuantbackError::InvalidSeries { .. } => 4,
            QuantbackError::InvalidStrategy { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitCode;

    #[test]
    fn invalid_strategy_message() {
        let err = QuantbackError::InvalidStrategy { name: "foo".into() };
        assert_eq!(err.to_string(), "invalid strategy: foo");
    }

    #[test]
    fn config_missing_message() {
        let err = QuantbackError::ConfigMissing {
            section: "strategy".into(),
            key: "name".into(),
        };
        assert_eq!(err.to_string(), "missing config key [strategy] name");
    }

    #[test]
    fn exit_code_mapping() {
        let err = QuantbackError::InvalidStrategy { name: "foo".into() };
        let code: ExitCode = (&err).into();
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::from(5)));
    }
}
