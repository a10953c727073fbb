// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shop sale listing commands

use std::sync::Arc;

use bn_client_api::ShopFilters;
use bn_rest_client::{AuthConfig, NetworkConfig, RestClient};
use bn_stores::ShopsStore;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ShopsCommands {
    List(ListArgs),
}

impl ShopsCommands {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        match self {
            ShopsCommands::List(args) => args.run(network).await,
        }
    }
}

/// Arguments for `bn shops list`
#[derive(Args)]
#[command(about = "List shops for sale, with an optional location filter")]
pub struct ListArgs {
    /// Substring match on the shop location
    #[arg(long)]
    location: Option<String>,
}

impl ListArgs {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        let client = RestClient::from_config(network, AuthConfig::new())?;
        let store = ShopsStore::new(Arc::new(client));
        store.fetch_all().await?;

        let filters = ShopFilters {
            location: self.location,
        };
        let shops = store.filter(&filters);

        if shops.is_empty() {
            println!("No shops match");
            return Ok(());
        }
        for shop in &shops {
            println!(
                "{}  {} — {} — {} — {}",
                shop.id, shop.shop_name, shop.location, shop.sale_price, shop.phone_number
            );
        }
        Ok(())
    }
}
