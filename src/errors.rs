use thiserror::Error;

/// Errors surfaced by the Bookboon client
#[derive(Error, Debug)]
pub enum BookboonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("API error {status} ({code}): {message}")]
    Api {
        /// Human-readable message from the error envelope.
        message: String,
        /// System name of the error from the error envelope.
        code: String,
        /// HTTP status code of the rejected request.
        status: u16,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field `{0}` in response")]
    MissingField(String),

    #[error("Field `{field}` is not a {expected}")]
    WrongType { field: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, BookboonError>;
