use crate::auth::AuthenticationHandle;
use crate::errors::{BookboonError, Result};
use crate::params::Params;

pub(crate) const API_HOST: &str = "api.bookboon.com";
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully formed request. Built fresh per call, never reused.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub authorization: Option<String>,
}

impl ApiRequest {
    /// Assemble the URL, query/body encoding and Authorization header for a
    /// single call.
    ///
    /// Without a base override the scheme is https exactly when the request
    /// is authenticated. `base` replaces scheme and host verbatim, for
    /// pointing the client at a local server.
    pub fn build(
        base: Option<&str>,
        path: &str,
        method: Method,
        handle: Option<&AuthenticationHandle>,
        params: Option<&Params>,
    ) -> Result<Self> {
        if path.is_empty() {
            return Err(BookboonError::InvalidArgument(
                "path must not be empty".to_string(),
            ));
        }

        let mut url = match base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_matches('/')),
            None => {
                let scheme = if handle.is_some() { "https" } else { "http" };
                format!("{}://{}/{}", scheme, API_HOST, path.trim_matches('/'))
            }
        };

        let mut body = None;
        if let Some(params) = params {
            match method {
                Method::Get => {
                    url.push('?');
                    url.push_str(&params.encode());
                }
                Method::Post => body = Some(params.encode()),
            }
        }

        Ok(Self {
            method,
            url,
            body,
            authorization: handle.map(AuthenticationHandle::authorization_header),
        })
    }
}
