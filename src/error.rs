use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("queue error: {0}")]
    Queue(String),

    #[error("timed out: {0}")]
    Timeout(String),
}

impl Error {
    /// Short type name reported as the exception type in telemetry.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "ConfigError",
            Error::Domain(_) => "DomainError",
            Error::Json(_) => "JsonError",
            Error::Http(_) => "HttpError",
            Error::Io(_) => "IoError",
            Error::Url(_) => "UrlError",
            Error::Connection(_) => "ConnectionError",
            Error::Database(_) => "DatabaseError",
            Error::Queue(_) => "QueueError",
            Error::Timeout(_) => "TimeoutError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_transparent() {
        let err: Error = ConfigError::MissingField { field: "MONGOURL" }.into();
        assert_eq!(err.to_string(), "missing required field: MONGOURL");
        assert_eq!(err.kind(), "ConfigError");
    }

    #[test]
    fn string_variants_carry_context() {
        let err = Error::Queue("channel closed".into());
        assert_eq!(err.to_string(), "queue error: channel closed");
        assert_eq!(err.kind(), "QueueError");
    }
}
