use poem::error::ResponseError;
use poem::http::StatusCode;
use poem::Response;
use thiserror::Error;

use crate::errors::InternalError;
use crate::views;

/// Web-facing error for request handlers
///
/// Stores raise `InternalError`; handlers surface `WebError`, which renders
/// an HTML error page. Only two conditions ever reach the client as errors:
/// a missing/unaddressable record (404) and a store-layer failure (500).
/// Validation failures and blocked deletes are normal pages, not errors.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(InternalError),
}

impl WebError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<InternalError> for WebError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::NotFound { entity, .. } => {
                WebError::NotFound(format!("{entity} not found"))
            }
            // A malformed id in the URL addresses nothing, so it gets the
            // same page as a well-formed id with no record behind it.
            InternalError::InvalidIdentifier { .. } => {
                WebError::NotFound("The requested resource does not exist".to_string())
            }
            err @ InternalError::Database { .. } => WebError::Internal(err),
        }
    }
}

impl ResponseError for WebError {
    fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        let (title, message) = match self {
            WebError::NotFound(message) => ("Not Found", message.clone()),
            WebError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    "Something went wrong",
                    "An internal error occurred while handling the request.".to_string(),
                )
            }
        };

        Response::builder()
            .status(self.status())
            .content_type("text/html; charset=utf-8")
            .body(views::error_page(title, &message))
    }
}
