// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Blocking HTTP client with per-request cookie merging

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use super::cookie;
use super::headers::{ACCEPT, CONTENT_TYPE, COOKIE, REFERER, SET_COOKIE, USER_AGENT};
use super::request::Request;
use super::response::Response;
use crate::error::{Error, Result};

/// Redirect cap applied when redirects are enabled with no explicit limit
pub const DEFAULT_MAX_REDIRECTS: usize = 7;

/// Client configuration, fixed at configure time
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Follow redirects. Default false.
    pub allow_redirects: bool,
    /// Maximum redirects to follow; 0 means [`DEFAULT_MAX_REDIRECTS`].
    /// Only meaningful when `allow_redirects` is set.
    pub max_redirects: usize,
    /// Proxy URL routing all requests
    pub proxy: Option<String>,
    /// Request timeout in milliseconds; 0 keeps the transport default
    pub timeout_millis: u64,
}

impl ClientConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable redirect following
    pub fn allow_redirects(mut self, allow: bool) -> Self {
        self.allow_redirects = allow;
        self
    }

    /// Set the redirect cap
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the request timeout in milliseconds
    pub fn timeout_millis(mut self, millis: u64) -> Self {
        self.timeout_millis = millis;
        self
    }
}

/// Synchronous request/response client.
///
/// Two states: unconfigured after [`new`](Self::new), configured after
/// [`configure`](Self::configure). `send` fails fast on an unconfigured
/// client; once configured, the configuration never changes and the client
/// can be shared across threads issuing different requests.
///
/// Transport failures are captured into [`Response::error`] rather than
/// returned as `Err` - every send against a configured client is total.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: ClientConfig,
    inner: Option<Client>,
}

impl RestClient {
    /// Create an unconfigured client
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            inner: None,
        }
    }

    /// Build the transport connection pool. One-way transition: the
    /// configuration is fixed from here on.
    pub fn configure(mut self) -> Result<Self> {
        let policy = if self.config.allow_redirects {
            let max = if self.config.max_redirects > 0 {
                self.config.max_redirects
            } else {
                DEFAULT_MAX_REDIRECTS
            };
            Policy::limited(max)
        } else {
            Policy::none()
        };

        let mut builder = Client::builder().redirect(policy);

        if let Some(ref proxy_url) = self.config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("invalid proxy URL: {}", e)))?,
            );
        }

        if self.config.timeout_millis > 0 {
            builder = builder.timeout(Duration::from_millis(self.config.timeout_millis));
        }

        self.inner = Some(builder.build()?);
        Ok(self)
    }

    /// Check whether `configure` has run
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and block until completion or timeout.
    ///
    /// Returns `Err` only for the programming mistake of sending before
    /// [`configure`](Self::configure). Every transport-level failure
    /// (timeout, DNS, TLS, reset) is captured into [`Response::error`] with
    /// the other fields left at their defaults.
    ///
    /// On success the response carries the merged cookie string, and when
    /// `request.auto_cookies` is set the merged string is also written back
    /// into `request.cookies` for the next call.
    pub fn send(&self, request: &mut Request) -> Result<Response> {
        let Some(ref client) = self.inner else {
            return Err(Error::config(
                "client not configured: call configure() before send()",
            ));
        };

        let url = match Url::parse(&request.url) {
            Ok(url) => url,
            Err(e) => return Ok(Response::from_error(Error::from(e).to_string())),
        };
        let method = match Method::from_bytes(request.method.as_bytes()) {
            Ok(method) => method,
            Err(e) => {
                return Ok(Response::from_error(format!(
                    "invalid method '{}': {}",
                    request.method, e
                )))
            }
        };

        let mut builder = client
            .request(method, url)
            .header(ACCEPT, request.accept.as_str())
            .header(USER_AGENT, request.user_agent.as_str());

        if let Some(ref referer) = request.referer {
            builder = builder.header(REFERER, referer.as_str());
        }

        // String body wins over byte body; GET never carries one. The
        // content type is forced to request.content_type either way.
        if let Some(body) = request.body_payload() {
            builder = builder
                .header(CONTENT_TYPE, request.content_type.as_str())
                .body(body);
        }

        for (name, value) in &request.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => builder = builder.header(name, value),
                _ => warn!(header = %name, "skipping header the transport cannot represent"),
            }
        }

        if !request.cookies.is_empty() {
            builder = builder.header(COOKIE, request.cookies.as_str());
        }

        debug!(method = %request.method, url = %request.url, "sending request");

        let response = match builder.send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %request.url, error = %e, "transport failure captured");
                return Ok(Response::from_error(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = match response.bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %request.url, error = %e, "body read failure captured");
                return Ok(Response::from_error(e.to_string()));
            }
        };

        let set_cookies: Vec<&str> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        let cookies = cookie::merge(&set_cookies, &request.cookies, request.auto_cookies);
        if request.auto_cookies {
            request.cookies = cookies.clone();
        }

        debug!(status, body_len = bytes.len(), "response received");

        Ok(Response {
            status,
            headers,
            bytes: Some(bytes),
            cookies,
            error: None,
        })
    }
}
