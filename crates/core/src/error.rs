use crate::types::DbId;

/// Caller-visible failure kinds shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Stable tag rendered as the `code` field of error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Unauthenticated(_) => "UNAUTHENTICATED",
            CoreError::PermissionDenied(_) => "PERMISSION_DENIED",
            CoreError::InvalidRequest(_) => "INVALID_REQUEST",
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::AlreadyExists(_) => "ALREADY_EXISTS",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(CoreError::Unauthenticated("x".into()).kind(), "UNAUTHENTICATED");
        assert_eq!(CoreError::PermissionDenied("x".into()).kind(), "PERMISSION_DENIED");
        assert_eq!(CoreError::InvalidRequest("x".into()).kind(), "INVALID_REQUEST");
        assert_eq!(
            CoreError::NotFound { entity: "Project", id: 1 }.kind(),
            "NOT_FOUND"
        );
        assert_eq!(CoreError::AlreadyExists("x".into()).kind(), "ALREADY_EXISTS");
        assert_eq!(CoreError::Internal("x".into()).kind(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_display() {
        let err = CoreError::NotFound {
            entity: "Submission",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Submission with id 7");
    }
}
