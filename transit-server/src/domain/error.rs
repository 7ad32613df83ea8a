//! Domain error types.
//!
//! These errors represent validation failures on values entering the
//! domain layer. Lookup misses inside the planner are not errors and are
//! reported as `Option::None` instead.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate pair could not be parsed or was not finite
    #[error("invalid coordinates {input:?}: {reason}")]
    InvalidCoordinates { input: String, reason: &'static str },

    /// An identifier was empty
    #[error("invalid {kind}: must not be empty")]
    EmptyIdentifier { kind: &'static str },
}
