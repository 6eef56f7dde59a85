// errors.rs
use thiserror::Error;

/// Errors a route handler can end in. Each one becomes an HTML error page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}
