// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie-carrying session on top of [`RestClient`]
//!
//! The auto-cookie write-back mutates a shared request descriptor, which is
//! only safe under single-owner discipline. `Session` packages that
//! discipline: it owns the evolving cookie string and stamps it onto a fresh
//! copy of each request, so the caller's descriptor is never touched.

use super::client::RestClient;
use super::request::Request;
use super::response::Response;
use crate::error::Result;

/// Sequential request session with cookie continuity
#[derive(Debug, Clone)]
pub struct Session {
    client: RestClient,
    cookies: String,
}

impl Session {
    /// Create a session with an empty cookie string
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            cookies: String::new(),
        }
    }

    /// Current flattened cookie string
    pub fn cookies(&self) -> &str {
        &self.cookies
    }

    /// Replace the session cookie string
    pub fn set_cookies(&mut self, cookies: impl Into<String>) {
        self.cookies = cookies.into();
    }

    /// Drop all session cookies
    pub fn clear_cookies(&mut self) {
        self.cookies.clear();
    }

    /// Send a request with the session's cookies, then absorb the server's
    /// `Set-Cookie` headers into the session. The caller's request is
    /// cloned, never mutated.
    pub fn send(&mut self, request: &Request) -> Result<Response> {
        let mut request = request
            .clone()
            .cookies(self.cookies.clone())
            .auto_cookies(true);
        let response = self.client.send(&mut request)?;
        // Unchanged on a captured failure, merged on success.
        self.cookies = request.cookies;
        Ok(response)
    }
}
