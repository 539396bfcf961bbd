use thiserror::Error;

/// Caller-facing text for failures whose detail must stay server-side
pub const GENERIC_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please try again or contact support.";

pub const NO_MATCH_MESSAGE: &str = "No matching fit or sister size found for these measurements";

/// Errors produced by the recommendation pipeline
#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    /// Malformed caller input, shown to the caller verbatim
    #[error("{0}")]
    Validation(String),

    #[error("no relevant or sister-size match")]
    NoMatch,

    #[error("internal error: {0}")]
    Internal(String),
}

impl FitError {
    pub fn validation(message: impl Into<String>) -> Self {
        FitError::Validation(message.into())
    }

    /// Message that may be returned to the caller
    pub fn public_message(&self) -> String {
        match self {
            FitError::Validation(message) => message.clone(),
            FitError::NoMatch => NO_MATCH_MESSAGE.to_string(),
            FitError::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            FitError::Validation(_) => 422,
            FitError::NoMatch => 404,
            FitError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = FitError::Internal("entry 3 has no measurements".to_string());
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
        assert!(err.to_string().contains("entry 3"));
    }

    #[test]
    fn test_validation_message_verbatim() {
        let err = FitError::validation("query too short");
        assert_eq!(err.public_message(), "query too short");
        assert_eq!(err.status_code(), 422);
    }
}
