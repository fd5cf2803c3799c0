// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Synchronous HTTP layer
//!
//! A blocking request/response façade with string-level cookie merging.
//! Cookies are a single flattened `name=value; ...` string per request - no
//! jar, no domain/path/expiry scoping.

pub mod cookie;

mod client;
mod request;
mod response;
mod session;

pub use client::{ClientConfig, RestClient, DEFAULT_MAX_REDIRECTS};
pub use cookie::CookieParse;
pub use request::Request;
pub use response::Response;
pub use session::Session;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept header value
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Default content type for request bodies
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const COOKIE: &str = "cookie";
    pub const SET_COOKIE: &str = "set-cookie";
    pub const USER_AGENT: &str = "user-agent";
    pub const REFERER: &str = "referer";
    pub const LOCATION: &str = "location";
}
