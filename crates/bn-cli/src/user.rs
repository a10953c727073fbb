// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! User profile commands

use bn_local_db::SessionDb;
use bn_rest_client::{AuthConfig, NetworkConfig, RestClient};
use bn_stores::{UserPatch, UserStore};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum UserCommands {
    Show(ShowArgs),
}

impl UserCommands {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        match self {
            UserCommands::Show(args) => args.run(network).await,
        }
    }
}

/// Arguments for `bn user show`
#[derive(Args)]
#[command(about = "Fetch and show a user profile")]
pub struct ShowArgs {
    /// User id (defaults to the one recorded on this device)
    id: Option<String>,
    /// Record this user as the device session, like completing the welcome
    /// flow does
    #[arg(long)]
    remember: bool,
}

impl ShowArgs {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        let id = match self.id {
            Some(id) => id,
            None => SessionDb::open_default()?
                .last_user_id()?
                .ok_or_else(|| anyhow::anyhow!("no user id given and none remembered"))?,
        };

        let client = RestClient::from_config(network, AuthConfig::new())?;
        let fetched = client.get_user(&id).await?;

        // Merge into the single-record store the way the launch flow does
        let store = UserStore::new();
        store.update(UserPatch {
            id: Some(fetched.id),
            name: Some(fetched.name),
            phone: Some(fetched.phone),
            email: Some(fetched.email),
            photo: Some(fetched.photo),
        });

        let user = store.get();
        println!("👤 {} ({})", user.name, user.id);
        println!("   Email: {}", user.email);
        println!("   Phone: {}", user.phone);
        if let Some(photo) = &user.photo {
            println!("   Photo: {}", photo);
        }

        if self.remember {
            SessionDb::open_default()?.mark_entered(&user.id)?;
            println!("   Session recorded for this device");
        }
        Ok(())
    }
}
