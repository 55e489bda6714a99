use thiserror::Error;

/// Failures surfaced to the user.
///
/// None of them is fatal: each is recoverable by retrying the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Reading a collection failed (network, server or decode error).
    #[error("{0}")]
    Fetch(String),

    /// Create, update or delete was rejected.
    #[error("{0}")]
    Mutation(String),

    /// Client-side required-field check failed; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or a failed login request.
    #[error("{0}")]
    Auth(String),

    /// Browser storage refused a write.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn message(&self) -> &str {
        match self {
            AppError::Fetch(m)
            | AppError::Mutation(m)
            | AppError::Validation(m)
            | AppError::Auth(m)
            | AppError::Storage(m) => m,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::Mutation("Sale record with ID 7 not found".into());
        assert_eq!(err.to_string(), "Sale record with ID 7 not found");
        assert_eq!(err.message(), "Sale record with ID 7 not found");
    }

    #[test]
    fn storage_errors_are_prefixed() {
        let err = AppError::Storage("quota exceeded".into());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
        assert!(!err.is_validation());
    }
}
