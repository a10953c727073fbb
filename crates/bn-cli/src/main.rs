// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use bn_cli::{Cli, Commands, Parser};
use bn_rest_client::NetworkConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.clone().init("bn-cli")?;

    let network = if cli.production {
        NetworkConfig::production()
    } else {
        NetworkConfig::from_env()
    };

    match cli.command {
        Commands::Health(args) => args.run(&network).await,
        Commands::Barbers { subcommand } => subcommand.run(&network).await,
        Commands::Jobs { subcommand } => subcommand.run(&network).await,
        Commands::Shops { subcommand } => subcommand.run(&network).await,
        Commands::User { subcommand } => subcommand.run(&network).await,
        Commands::Session { subcommand } => subcommand.run().await,
    }
}
