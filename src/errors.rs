// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound {
        /// Type of entity that wasn't found
        entity_type: String,
        /// ID that was searched for
        id: String,
    },

    /// A query carried an operator the processor does not understand.
    ///
    /// This is a configuration error in query construction; it is never
    /// retried and never degrades into an empty result.
    #[error("Invalid operator '{operator}'")]
    InvalidOperator {
        /// The operator as it was written in the query
        operator: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Undo was requested with an empty command history
    #[error("No command to revert.")]
    NothingToRevert,

    /// Event handler subscription could not be found
    #[error("Handler not found: {0}")]
    HandlerNotFound(u64),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Create a not-found error for an entity type and identity value
    pub fn not_found(entity_type: impl Into<String>, id: impl ToString) -> Self {
        DomainError::EntityNotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Create an invalid-operator error
    pub fn invalid_operator(operator: impl Into<String>) -> Self {
        DomainError::InvalidOperator {
            operator: operator.into(),
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::EntityNotFound { .. } | DomainError::HandlerNotFound(_)
        )
    }

    /// Check if this error comes from a malformed query
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, DomainError::InvalidOperator { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, DomainError::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error creation and display messages
    ///
    /// ```mermaid
    /// graph TD
    ///     A[DomainError] -->|Display| B[Error Message]
    ///     A -->|Clone| C[Cloned Error]
    ///     A -->|Debug| D[Debug Format]
    /// ```
    #[test]
    fn test_error_display_messages() {
        let err = DomainError::EntityNotFound {
            entity_type: "Order".to_string(),
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Entity not found: Order with id 123");

        let err = DomainError::invalid_operator("wrong");
        assert_eq!(err.to_string(), "Invalid operator 'wrong'");

        let err = DomainError::ValidationError("abc is not valid UUID".to_string());
        assert_eq!(err.to_string(), "Validation error: abc is not valid UUID");

        assert_eq!(
            DomainError::NothingToRevert.to_string(),
            "No command to revert."
        );

        let err = DomainError::HandlerNotFound(7);
        assert_eq!(err.to_string(), "Handler not found: 7");

        let err = DomainError::SerializationError("Invalid JSON".to_string());
        assert_eq!(err.to_string(), "Serialization error: Invalid JSON");
    }

    #[test]
    fn test_not_found_constructor() {
        let err = DomainError::not_found("Order", 404);
        assert_eq!(
            err,
            DomainError::EntityNotFound {
                entity_type: "Order".to_string(),
                id: "404".to_string(),
            }
        );
        assert!(err.is_not_found());
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_error_classification() {
        assert!(DomainError::invalid_operator("xor").is_configuration_error());
        assert!(DomainError::HandlerNotFound(1).is_not_found());
        assert!(DomainError::ValidationError("bad".into()).is_validation_error());
        assert!(!DomainError::NothingToRevert.is_not_found());
        assert!(!DomainError::NothingToRevert.is_validation_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json")
            .map_err(DomainError::from)
            .unwrap_err();
        assert!(matches!(err, DomainError::SerializationError(_)));
    }
}
