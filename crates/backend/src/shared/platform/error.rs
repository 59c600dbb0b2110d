use thiserror::Error;

use super::graphql::UserError;

/// Failure modes of an Admin API call, split the way the pages report
/// them: everything transport- or GraphQL-level surfaces as a server
/// failure, remote user errors surface as a validation failure.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("admin api returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("graphql errors: {0:?}")]
    GraphQl(Vec<String>),

    #[error("user errors: {}", format_user_errors(.0))]
    UserErrors(Vec<UserError>),

    #[error("response missing expected node: {0}")]
    MissingNode(&'static str),

    #[error("failed to decode admin api response: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlatformError {
    /// True for the validation tier, which maps to a 400 at the HTTP
    /// surface instead of a 500.
    pub fn is_user_error(&self) -> bool {
        matches!(self, PlatformError::UserErrors(_))
    }
}

fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_the_validation_tier() {
        let err = PlatformError::UserErrors(vec![UserError {
            field: None,
            message: "Title can't be blank".to_string(),
        }]);
        assert!(err.is_user_error());
        assert!(err.to_string().contains("Title can't be blank"));

        let err = PlatformError::GraphQl(vec!["Throttled".to_string()]);
        assert!(!err.is_user_error());
    }
}
