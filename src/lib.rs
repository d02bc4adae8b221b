//! # Bookboon
//!
//! Asynchronous HTTP client for the Bookboon API.
//! This crate provides a simple interface for issuing optionally
//! authenticated and parameterized GET/POST requests and decoding the
//! JSON responses. For more information about the API itself, please
//! refer to <https://github.com/bookboon/api>
//!
//! ```no_run
//! use bookboon::{BookboonClient, Params};
//!
//! # async fn run() -> bookboon::Result<()> {
//! let client = BookboonClient::new();
//! let categories = client.get("/categories", None, None).await?;
//! println!("first category: {}", categories.index(0)?["name"]);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod json;
pub mod params;
mod request;

// Re-export main public types
pub use auth::AuthenticationHandle;
pub use client::BookboonClient;
pub use errors::{BookboonError, Result};
pub use json::ApiValue;
pub use params::Params;
