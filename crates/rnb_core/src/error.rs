//! Error types for the production engine.
//!
//! Every fallible engine operation returns [`Result`]. Each [`GameError`]
//! variant belongs to one [`ErrorKind`], which tells the caller whether the
//! failure is retryable (`Fail`), a caller bug (`Invalid`), a missing
//! collaborator (`Missing`) or an engine bug (`Unknown`).

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Coarse classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition was not met. Nothing was mutated; the caller may retry
    /// after changing game state.
    Fail,
    /// Malformed input: bad enum value, unusable player, broken invariant in
    /// a constructed object.
    Invalid,
    /// A referenced entity does not exist.
    Missing,
    /// An invariant the engine relies on was violated.
    Unknown,
}

/// Top-level error type for all engine errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Not enough units of a resource to satisfy a request.
    #[error("Insufficient resources: need {required} {resource}, have {available}")]
    InsufficientResources {
        /// Resource name.
        resource: &'static str,
        /// Amount required.
        required: usize,
        /// Amount available.
        available: usize,
    },

    /// The building has already produced its limit this round.
    #[error("{building} has no production capacity left this round")]
    ProductionLimitReached {
        /// Building name.
        building: &'static str,
    },

    /// The building cannot produce with the inputs at hand.
    #[error("{building} cannot produce: {reason}")]
    CannotProduce {
        /// Building name.
        building: &'static str,
        /// Why production was refused.
        reason: String,
    },

    /// A boost could not be added or removed.
    #[error("Boost change refused for {building}: {reason}")]
    BoostRefused {
        /// Building name.
        building: &'static str,
        /// Why the change was refused.
        reason: &'static str,
    },

    /// Some other precondition was not met.
    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    /// The `invalid` resource sentinel was used where a real type is needed.
    #[error("Invalid resource type")]
    InvalidResourceType,

    /// The player colour cannot carry or move resources.
    #[error("Invalid player colour: {0}")]
    InvalidPlayer(&'static str),

    /// The `invalid` building sentinel was used where a real type is needed.
    #[error("Invalid building type")]
    InvalidBuildingType,

    /// Unknown mine shaft variant name.
    #[error("Unknown mine variant: {0}")]
    InvalidMineVariant(String),

    /// Operation not supported by this building type.
    #[error("{operation} is not supported by {building}")]
    Unsupported {
        /// Attempted operation.
        operation: &'static str,
        /// Building name.
        building: &'static str,
    },

    /// Invalid configuration data.
    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// Referenced entity not found.
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// Internal invariant violated.
    #[error("Internal invariant violated: {0}")]
    InvariantViolated(String),

    /// Failed to decode persisted state.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientResources { .. }
            | Self::ProductionLimitReached { .. }
            | Self::CannotProduce { .. }
            | Self::BoostRefused { .. }
            | Self::PreconditionNotMet(_) => ErrorKind::Fail,
            Self::InvalidResourceType
            | Self::InvalidPlayer(_)
            | Self::InvalidBuildingType
            | Self::InvalidMineVariant(_)
            | Self::Unsupported { .. }
            | Self::ConfigParseError(_)
            | Self::Decode(_) => ErrorKind::Invalid,
            Self::EntityNotFound(_) => ErrorKind::Missing,
            Self::InvariantViolated(_) => ErrorKind::Unknown,
        }
    }

    /// Whether the caller may retry after changing game state.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Fail)
    }

    /// Build an [`GameError::InvariantViolated`] and log it.
    ///
    /// These always indicate an engine bug, so they are reported at error
    /// level before being handed back.
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(%message, "engine invariant violated");
        Self::InvariantViolated(message)
    }
}

/// Structured error raised while decoding persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (in {fragment})")]
pub struct DecodeError {
    /// Human-readable description of the problem.
    pub message: String,
    /// The JSON fragment that failed to decode.
    pub fragment: String,
}

impl DecodeError {
    /// Create a decode error for `value`.
    pub fn new(message: impl Into<String>, value: &serde_json::Value) -> Self {
        Self {
            message: message.into(),
            fragment: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let fail = GameError::InsufficientResources {
            resource: "boards",
            required: 5,
            available: 3,
        };
        assert_eq!(fail.kind(), ErrorKind::Fail);
        assert!(fail.is_retryable());

        assert_eq!(GameError::InvalidResourceType.kind(), ErrorKind::Invalid);
        assert_eq!(
            GameError::EntityNotFound("area 7".into()).kind(),
            ErrorKind::Missing
        );
        assert_eq!(
            GameError::InvariantViolated("remove after count".into()).kind(),
            ErrorKind::Unknown
        );
        assert!(!GameError::InvalidBuildingType.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = GameError::InsufficientResources {
            resource: "boards",
            required: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient resources: need 5 boards, have 3"
        );
    }

    #[test]
    fn test_decode_error_carries_fragment() {
        let value = serde_json::json!({ "type": "sawmill" });
        let err = DecodeError::new("missing field", &value);
        assert_eq!(err.fragment, r#"{"type":"sawmill"}"#);
        let game: GameError = err.into();
        assert_eq!(game.kind(), ErrorKind::Invalid);
        assert!(game.to_string().starts_with("missing field"));
    }
}
