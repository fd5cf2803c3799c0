// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use encoding_rs::Encoding;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use super::headers::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use crate::error::{Error, Result};

/// Normalized result of one send.
///
/// A failed exchange has the same shape as a successful one: `error` is set,
/// everything else stays at its default. Callers check `error` /
/// [`is_success`](Self::is_success) instead of handling exceptions.
/// Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code, 0 when the exchange failed
    pub status: u16,
    /// Response header multimap (a name may repeat, notably `Set-Cookie`)
    pub headers: HeaderMap,
    /// Raw response payload, `None` when the exchange failed
    pub bytes: Option<Bytes>,
    /// Merged cookie string: `Set-Cookie` values folded into the request's
    /// prior cookies, flattened and deduplicated
    pub cookies: String,
    /// Failure description captured from the transport, `None` on success
    pub error: Option<String>,
}

impl Response {
    /// Build a response for a captured transport failure
    pub(crate) fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Check if status is success (200-299)
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Get body as UTF-8 text
    pub fn text(&self) -> Result<String> {
        let bytes = self.bytes.as_deref().unwrap_or_default();
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::Other(e.to_string()))
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(self.bytes.as_deref().unwrap_or_default()).into_owned()
    }

    /// Get body as text in a caller-specified encoding
    pub fn text_with_encoding(&self, encoding: &'static Encoding) -> String {
        let bytes = self.bytes.as_deref().unwrap_or_default();
        let (text, _, _) = encoding.decode(bytes);
        text.into_owned()
    }

    /// Parse body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(self.bytes.as_deref().unwrap_or_default()).map_err(Error::from)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Get Set-Cookie headers
    pub fn set_cookies(&self) -> Vec<&str> {
        self.header_all(SET_COOKIE)
    }

    /// Get the redirect target, if the server sent one
    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION)
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    /// Get body length, 0 when there is no body
    pub fn body_len(&self) -> usize {
        self.bytes.as_ref().map(Bytes::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            bytes: Some(Bytes::from(body.to_string())),
            ..Response::default()
        }
    }

    #[test]
    fn test_success_bounds() {
        assert!(!response(199, "").is_success());
        assert!(response(200, "").is_success());
        assert!(response(299, "").is_success());
        assert!(!response(300, "").is_success());
        assert!(!Response::default().is_success());
    }

    #[test]
    fn test_default_is_zeroed() {
        let resp = Response::default();
        assert_eq!(resp.status, 0);
        assert!(resp.bytes.is_none());
        assert!(resp.cookies.is_empty());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let resp = Response::from_error("connection refused");
        assert_eq!(resp.error.as_deref(), Some("connection refused"));
        assert_eq!(resp.status, 0);
        assert!(resp.bytes.is_none());
        assert!(!resp.is_success());
    }

    #[test]
    fn test_text_decoding() {
        let resp = response(200, "Hei maailma");
        assert_eq!(resp.text().unwrap(), "Hei maailma");
        assert_eq!(resp.text_lossy(), "Hei maailma");
    }

    #[test]
    fn test_text_with_encoding() {
        // "你好" in GBK
        let resp = Response {
            status: 200,
            bytes: Some(Bytes::from_static(&[0xC4, 0xE3, 0xBA, 0xC3])),
            ..Response::default()
        };
        assert_eq!(resp.text_with_encoding(encoding_rs::GBK), "你好");
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_set_cookie_multimap() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1; Path=/"));
        headers.append("set-cookie", HeaderValue::from_static("b=2; Path=/"));
        let resp = Response {
            status: 200,
            headers,
            ..Response::default()
        };
        assert_eq!(resp.set_cookies(), vec!["a=1; Path=/", "b=2; Path=/"]);
    }

    #[test]
    fn test_location_header() {
        let mut headers = HeaderMap::new();
        headers.insert("location", HeaderValue::from_static("https://example.com/next"));
        let resp = Response {
            status: 302,
            headers,
            ..Response::default()
        };
        assert_eq!(resp.location(), Some("https://example.com/next"));
    }

    #[test]
    fn test_json_body() {
        let resp = response(200, r#"{"ok":true}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["ok"], serde_json::Value::Bool(true));
    }
}
