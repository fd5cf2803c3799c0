// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request descriptor

use std::collections::HashMap;

use bytes::Bytes;

use super::{DEFAULT_ACCEPT, DEFAULT_CONTENT_TYPE, DEFAULT_USER_AGENT};

/// Description of one HTTP request.
///
/// Created by the caller, handed to [`RestClient::send`](crate::RestClient::send).
/// With `auto_cookies` enabled the client writes the merged cookie string
/// back into [`cookies`](Self::cookies) after a successful exchange, so the
/// same descriptor can be reused for session continuity. Reusing one
/// auto-cookie descriptor across threads needs external synchronization;
/// `send` takes `&mut` so the borrow checker enforces single ownership.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method, default `GET`. Compared case-insensitively against
    /// GET to decide whether a body may be attached.
    pub method: String,
    /// Absolute request URL
    pub url: String,
    /// Caller headers, upsert-by-name (duplicate insertion overwrites)
    pub headers: HashMap<String, String>,
    /// Flattened cookie string `name1=v1; name2=v2`, may be empty.
    /// Sent verbatim - no domain restriction applies.
    pub cookies: String,
    /// Write the merged cookie string back into this request after each
    /// successful send. Default false.
    pub auto_cookies: bool,
    /// String body. Takes precedence over `body_bytes` when both are set.
    pub body_text: Option<String>,
    /// Raw byte body
    pub body_bytes: Option<Bytes>,
    /// Content type forced onto any attached body
    pub content_type: String,
    /// Accept header value
    pub accept: String,
    /// User agent header value
    pub user_agent: String,
    /// Referer header value, omitted when `None`
    pub referer: Option<String>,
}

impl Request {
    /// Create a GET request for a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            headers: HashMap::new(),
            cookies: String::new(),
            auto_cookies: false,
            body_text: None,
            body_bytes: None,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: None,
        }
    }

    /// Create a request with an explicit method
    pub fn with_method(method: impl Into<String>, url: impl Into<String>) -> Self {
        let mut request = Self::new(url);
        request.method = method.into();
        request
    }

    /// Set the method
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Upsert a header (overwrites an existing value for the same name)
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Upsert multiple headers
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the cookie string
    pub fn cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = cookies.into();
        self
    }

    /// Enable or disable automatic cookie write-back
    pub fn auto_cookies(mut self, auto: bool) -> Self {
        self.auto_cookies = auto;
        self
    }

    /// Set a string body
    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.body_text = Some(body.into());
        self
    }

    /// Set a raw byte body
    pub fn byte_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body_bytes = Some(body.into());
        self
    }

    /// Set the content type used when a body is attached
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the Accept header value
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the referer
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// True when the method is GET, compared case-insensitively
    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }

    /// Body to attach, if any: string body wins over byte body, and GET
    /// requests never carry one.
    pub(crate) fn body_payload(&self) -> Option<Bytes> {
        if self.is_get() {
            return None;
        }
        if let Some(ref text) = self.body_text {
            return Some(Bytes::from(text.clone()));
        }
        self.body_bytes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = Request::new("https://example.com/");
        assert_eq!(req.method, "GET");
        assert_eq!(req.content_type, DEFAULT_CONTENT_TYPE);
        assert_eq!(req.accept, DEFAULT_ACCEPT);
        assert_eq!(req.user_agent, DEFAULT_USER_AGENT);
        assert!(req.cookies.is_empty());
        assert!(!req.auto_cookies);
    }

    #[test]
    fn test_header_upsert_overwrites() {
        let req = Request::new("https://example.com/")
            .header("x-token", "one")
            .header("x-token", "two");
        assert_eq!(req.headers.get("x-token").map(String::as_str), Some("two"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_get_never_carries_body() {
        let req = Request::new("https://example.com/").text_body("payload");
        assert!(req.body_payload().is_none());

        let req = Request::with_method("get", "https://example.com/").text_body("payload");
        assert!(req.is_get());
        assert!(req.body_payload().is_none());
    }

    #[test]
    fn test_text_body_takes_precedence() {
        let req = Request::with_method("POST", "https://example.com/")
            .text_body("text")
            .byte_body(vec![1u8, 2, 3]);
        assert_eq!(req.body_payload(), Some(Bytes::from("text")));
    }

    #[test]
    fn test_byte_body_used_when_no_text() {
        let req = Request::with_method("PUT", "https://example.com/").byte_body(vec![1u8, 2, 3]);
        assert_eq!(req.body_payload(), Some(Bytes::from(vec![1u8, 2, 3])));
    }
}
