// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Job listing commands

use std::sync::Arc;

use bn_client_api::JobFilters;
use bn_domain_types::JobType;
use bn_rest_client::{AuthConfig, NetworkConfig, RestClient};
use bn_stores::JobsStore;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum JobsCommands {
    List(ListArgs),
}

impl JobsCommands {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        match self {
            JobsCommands::List(args) => args.run(network).await,
        }
    }
}

/// Arguments for `bn jobs list`
#[derive(Args)]
#[command(about = "List job openings, with optional filters")]
pub struct ListArgs {
    /// Substring match on the job location
    #[arg(long)]
    location: Option<String>,
    /// Exact job type, e.g. "Full-time" or "Rent a Chair"
    #[arg(long = "type")]
    job_type: Option<JobType>,
}

impl ListArgs {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        let client = RestClient::from_config(network, AuthConfig::new())?;
        let store = JobsStore::new(Arc::new(client));
        store.fetch_all().await?;

        let locations = store.unique_locations();
        if !locations.is_empty() {
            println!("📍 Locations: {}", locations.join(", "));
        }

        // Filtering happens locally on the loaded snapshot, like the screens do
        let filters = JobFilters {
            location: self.location,
            job_type: self.job_type,
        };
        let jobs = store.filter(&filters);

        if jobs.is_empty() {
            println!("No jobs match");
            return Ok(());
        }
        for job in &jobs {
            println!(
                "{}  {} — {} — {} — {}",
                job.id, job.shop_name, job.location, job.job_type, job.salary_text
            );
        }
        Ok(())
    }
}
