use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::{BookboonError, Result};

/// Maximum length of an end-user handle accepted by the API.
pub const MAX_HANDLE_LENGTH: usize = 64;

/// Credential pair for authenticated requests: the secret application API
/// key and a unique string identifying the current end user.
#[derive(Debug, Clone)]
pub struct AuthenticationHandle {
    api_key: String,
    handle: String,
}

impl AuthenticationHandle {
    /// Create an authentication handle from an API key and a user handle
    /// (max 64 characters).
    pub fn new(api_key: impl Into<String>, handle: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let handle = handle.into();

        if api_key.is_empty() {
            return Err(BookboonError::InvalidArgument(
                "api_key must not be empty".to_string(),
            ));
        }
        if handle.is_empty() {
            return Err(BookboonError::InvalidArgument(
                "handle must not be empty".to_string(),
            ));
        }
        if handle.chars().count() > MAX_HANDLE_LENGTH {
            return Err(BookboonError::InvalidArgument(format!(
                "handle exceeds {} characters",
                MAX_HANDLE_LENGTH
            )));
        }

        Ok(Self { api_key, handle })
    }

    /// Authorization header value: `Basic base64(handle:api_key)`.
    pub(crate) fn authorization_header(&self) -> String {
        let auth_info = format!("{}:{}", self.handle, self.api_key);
        format!("Basic {}", STANDARD.encode(auth_info.as_bytes()))
    }
}
