use std::fmt;

/// Result type for qrl-navigation operations
pub type Result<T> = std::result::Result<T, QrlError>;

/// Main error type for the crate
#[derive(Debug, Clone, PartialEq)]
pub enum QrlError {
    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid configuration value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Sampling requested more experiences than are stored
    InsufficientExperiences {
        requested: usize,
        available: usize,
    },

    /// Numerical computation errors
    NumericalError(String),

    /// IO errors (config files)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for QrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrlError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            QrlError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            QrlError::InsufficientExperiences { requested, available } => {
                write!(
                    f,
                    "Insufficient experiences: requested {}, only {} stored",
                    requested, available
                )
            }
            QrlError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            QrlError::IoError(msg) => write!(f, "IO error: {}", msg),
            QrlError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for QrlError {}

impl From<std::io::Error> for QrlError {
    fn from(err: std::io::Error) -> Self {
        QrlError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for QrlError {
    fn from(err: serde_json::Error) -> Self {
        QrlError::SerializationError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for QrlError {
    fn from(err: ndarray::ShapeError) -> Self {
        QrlError::DimensionMismatch {
            expected: "consistent array shapes".to_string(),
            actual: err.to_string(),
        }
    }
}

// Helper functions for common error patterns
impl QrlError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        QrlError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        QrlError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
