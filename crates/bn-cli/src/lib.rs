// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bn_logging::CliLoggingArgs;
use clap::Subcommand;

pub use clap::Parser;

pub mod barbers;
pub mod health;
pub mod jobs;
pub mod session;
pub mod shops;
pub mod user;

#[derive(clap::Parser)]
#[command(
    name = "bn",
    about = "BarberNet marketplace CLI",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Talk to the production backend instead of the development one
    #[arg(long, global = true, env = "BN_PRODUCTION")]
    pub production: bool,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Health(health::HealthArgs),
    Barbers {
        #[command(subcommand)]
        subcommand: barbers::BarbersCommands,
    },
    Jobs {
        #[command(subcommand)]
        subcommand: jobs::JobsCommands,
    },
    Shops {
        #[command(subcommand)]
        subcommand: shops::ShopsCommands,
    },
    User {
        #[command(subcommand)]
        subcommand: user::UserCommands,
    },
    Session {
        #[command(subcommand)]
        subcommand: session::SessionCommands,
    },
}
