use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ObAppsError {
    /// The document is not well-formed XML. Nothing is loaded.
    #[error("malformed document at byte {position}: {message}")]
    Format { position: usize, message: String },

    /// A recognized element carried a value outside its declared domain.
    /// Surfaced per node at load time; the node is kept as foreign content.
    #[error("schema violation at byte {position}: {field}={value:?}: {reason}")]
    Schema {
        field: String,
        value: String,
        reason: String,
        position: usize,
    },

    /// An edit supplied a value outside the field's declared domain.
    #[error("invalid value for {field}: {value:?}: {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// A structural rule-ordering violation (catch-all placement).
    #[error("rule ordering constraint: {0}")]
    Constraint(String),

    #[error("rule not found: {0}")]
    RuleNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}

impl ObAppsError {
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ObAppsError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ObAppsError>;
