use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no usable API credentials - set LOYALICOS_API_KEY or a LOYALICOS_API_CLIENT/LOYALICOS_API_SECRET pair")]
    NoCredentials,

    #[error("no API host configured - set LOYALICOS_API_HOST or pass a host explicitly")]
    MissingHost,

    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl Error {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        Error::RequestFailed {
            status,
            body: Self::truncate_body(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept_verbatim() {
        let err = Error::from_response(StatusCode::FORBIDDEN, "denied");
        match err {
            Error::RequestFailed { status, body } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "denied");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(2 * MAX_ERROR_BODY_LENGTH);
        let err = Error::from_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            Error::RequestFailed { body, .. } => {
                assert!(body.len() < 2 * MAX_ERROR_BODY_LENGTH);
                assert!(body.ends_with("(truncated, 1000 total bytes)"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
