use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Longest accepted query, counted on the trimmed text
pub const MAX_QUERY_CHARS: usize = 2000;

/// Request for a fit recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(custom(function = "validate_query_length"))]
    #[serde(alias = "query")]
    pub text: String,
}

/// Surrounding whitespace does not count, so blank bodies reach the empty-query check
fn validate_query_length(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() > MAX_QUERY_CHARS {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed("query too long")));
    }
    Ok(())
}
