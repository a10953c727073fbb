// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Backend health probe
//!
//! The production backend sleeps on its free tier; the first request after
//! a quiet period can take tens of seconds. Screens fire `ping` at startup
//! to start the wake-up early, with a short timeout so a cold backend does
//! not stall the launch.

use std::time::Duration;

use reqwest::Method;

use crate::client::RestClient;
use crate::error::RestClientResult;

/// Timeout for the health probe, much shorter than the default
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

impl RestClient {
    /// Check backend health; only the status code matters
    pub async fn health(&self) -> RestClientResult<()> {
        let request = self.request_builder(Method::GET, "/health").timeout(HEALTH_TIMEOUT);
        self.send_no_content(request).await
    }

    /// Fire-and-forget wake-up probe; never fails
    pub async fn ping(&self) -> bool {
        tracing::debug!("pinging backend to wake it up");
        match self.health().await {
            Ok(()) => {
                tracing::debug!("backend is awake");
                true
            }
            Err(err) => {
                tracing::debug!(%err, "backend is cold (will wake up on first request)");
                false
            }
        }
    }
}
