//! Error types for the Thinker application.

use thiserror::Error;

/// A shared error type for every Thinker operation.
///
/// Each variant corresponds to one failure class a caller may want to react
/// to differently: bad input, a missing entity, a missing selection, or a
/// failure while reading or writing the data file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThinkerError {
    /// A required field was empty or an input value was malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A thought operation was attempted with no session selected
    #[error("No active session. Create or select a session first.")]
    NoActiveSession,

    /// Reading or writing persisted data failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl ThinkerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_no_active_session(&self) -> bool {
        matches!(self, Self::NoActiveSession)
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ThinkerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ThinkerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence {
            message: format!("JSON - {}", err),
        }
    }
}

impl From<toml::de::Error> for ThinkerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Persistence {
            message: format!("TOML - {}", err),
        }
    }
}

/// A type alias for `Result<T, ThinkerError>`.
pub type Result<T> = std::result::Result<T, ThinkerError>;
