// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Backend health check command

use bn_rest_client::{AuthConfig, NetworkConfig, RestClient};
use clap::Args;

/// Arguments for the health command
#[derive(Args)]
#[command(about = "Check whether the backend is awake")]
pub struct HealthArgs {}

impl HealthArgs {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        let client = RestClient::from_config(network, AuthConfig::new())?;
        println!("🏓 Pinging {}", client.base_url());

        if client.ping().await {
            println!("✅ Backend is awake");
            Ok(())
        } else {
            println!("⚠️  Backend is cold (it will wake up on the first real request)");
            anyhow::bail!("backend did not respond in time")
        }
    }
}
