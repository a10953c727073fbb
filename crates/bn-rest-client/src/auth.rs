// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Authentication configuration
//!
//! A bearer-token slot applied to every outgoing request when set. Nothing
//! in the client populates it today: sign-in happens against the external
//! identity provider and the backend does not verify tokens, so requests go
//! out unauthenticated. The slot is kept so that wiring a token source in
//! later stays a construction-time change rather than a transport rewrite.

/// Authentication configuration for outgoing requests
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    token: Option<String>,
}

impl AuthConfig {
    /// Unauthenticated configuration (the only kind currently constructed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration carrying a bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// The bearer token to attach, if any
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
