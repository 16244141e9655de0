//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// A required field is missing or empty
    Validation(String),
    /// The relationship already exists
    Conflict(String),
    /// Database/persistence error
    Database(String),
    /// Removing the links of an entity failed; the entity row was left untouched
    RelationCleanup(Box<DomainError>),
    /// The entity row could not be removed after its links were already gone
    Delete(Box<DomainError>),
    /// Generic internal error
    Internal(String),
}

impl DomainError {
    /// Prefix the error message with the operation that produced it.
    ///
    /// The variant is preserved so callers can still match on the kind.
    pub fn context(self, op: &str) -> Self {
        match self {
            DomainError::NotFound => DomainError::NotFound,
            DomainError::Validation(msg) => DomainError::Validation(format!("{}: {}", op, msg)),
            DomainError::Conflict(msg) => DomainError::Conflict(format!("{}: {}", op, msg)),
            DomainError::Database(msg) => DomainError::Database(format!("{}: {}", op, msg)),
            DomainError::RelationCleanup(inner) => {
                DomainError::RelationCleanup(Box::new(inner.context(op)))
            }
            DomainError::Delete(inner) => DomainError::Delete(Box::new(inner.context(op))),
            DomainError::Internal(msg) => DomainError::Internal(format!("{}: {}", op, msg)),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::RelationCleanup(inner) => {
                write!(f, "Failed to remove relationships: {}", inner)
            }
            DomainError::Delete(inner) => write!(f, "Failed to delete: {}", inner),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomainError::RelationCleanup(inner) | DomainError::Delete(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
            _ => DomainError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_keeps_the_variant() {
        let err = DomainError::Database("connection refused".to_string()).context("failed to create");
        assert!(matches!(err, DomainError::Database(_)));
        assert_eq!(
            err.to_string(),
            "Database error: failed to create: connection refused"
        );
    }

    #[test]
    fn context_reaches_wrapped_errors() {
        let err = DomainError::RelationCleanup(Box::new(DomainError::Database(
            "locked".to_string(),
        )))
        .context("failed to hard delete driver");

        match err {
            DomainError::RelationCleanup(inner) => {
                assert_eq!(
                    inner.to_string(),
                    "Database error: failed to hard delete driver: locked"
                );
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn not_found_has_no_message_to_prefix() {
        let err = DomainError::NotFound.context("failed to update driver");
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn wrapped_errors_expose_their_source() {
        use std::error::Error;

        let err = DomainError::Delete(Box::new(DomainError::Internal("boom".to_string())));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Internal error: boom".to_string())
        );
    }
}
