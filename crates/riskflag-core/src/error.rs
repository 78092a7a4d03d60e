//! Error types for the riskflag core model.

use thiserror::Error;

/// A specialized Result type for core model operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core model values.
///
/// Rule evaluation itself never fails; these only surface at the edges,
/// when a caller hands over raw JSON or a raw flag code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Integer code does not name a flag.
    #[error("Invalid flag code: {code}")]
    InvalidFlagCode {
        /// The offending code.
        code: u8,
    },

    /// Record could not be deserialized.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidFlagCode { code: 9 };
        assert_eq!(err.to_string(), "Invalid flag code: 9");

        let err = CoreError::deserialization("expected object");
        assert!(err.to_string().contains("expected object"));
    }

    #[test]
    fn test_from_serde_json() {
        let err: CoreError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
