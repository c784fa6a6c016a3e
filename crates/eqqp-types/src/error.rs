use thiserror::Error;

#[derive(Debug, Error)]
pub enum EqQpError {
    /// A binding kind outside {quadratic cost, linear equality} is registered.
    #[error("Unsupported binding kind: {kind}")]
    UnsupportedBinding { kind: String },

    #[error("Dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: String,
        expected: String,
        got: String,
    },

    #[error("Decision variable not found: {0}")]
    VariableNotFound(String),

    #[error("Equality constraint bounds differ: lower={lower:?}, upper={upper:?}")]
    NonEqualityBounds { lower: Vec<f64>, upper: Vec<f64> },

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EqQpError {
    pub fn dimension(what: impl Into<String>, expected: impl ToString, got: impl ToString) -> Self {
        EqQpError::DimensionMismatch {
            what: what.into(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EqQpError>;
