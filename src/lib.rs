// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Evaste - Synchronous HTTP client with string-level cookie merging
//!
//! A blocking request/response façade for scripted HTTP flows. Cookies are
//! a single flattened `name=value; name=value` string per request, merged
//! with the server's `Set-Cookie` headers after every send - no jar, no
//! domain/path/expiry scoping, no async surface.
//!
//! ## Features
//!
//! - Blocking sends: transport failures are captured into the response, so
//!   every send against a configured client returns a value
//! - Cookie merging: ordered, deduplicated, with the `deleted` sentinel
//!   honored and malformed pairs silently dropped
//! - Auto-cookies: opt-in write-back of the merged string into the request
//!   for session continuity, or the safer [`Session`] wrapper
//! - Redirect, proxy and timeout configuration fixed at configure time
//!
//! ## Example
//!
//! ```rust,no_run
//! use evaste::{ClientConfig, Request, RestClient};
//!
//! fn main() -> evaste::Result<()> {
//!     let client = RestClient::new(ClientConfig::default().timeout_millis(5_000))
//!         .configure()?;
//!
//!     let mut request = Request::new("https://example.com/login").auto_cookies(true);
//!     let response = client.send(&mut request)?;
//!
//!     if response.is_success() {
//!         // request.cookies now carries the merged cookie string.
//!         println!("logged in: {}", response.cookies);
//!     } else if let Some(error) = &response.error {
//!         eprintln!("send failed: {}", error);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod util;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP client
pub use http::{ClientConfig, Request, Response, RestClient, Session};

// Cookie merging
pub use http::cookie::{cookie_value, merge as merge_cookies, parse_cookie_string, CookieParse};

/// Evaste version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
