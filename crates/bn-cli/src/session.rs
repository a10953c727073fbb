// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Session flag commands

use bn_local_db::SessionDb;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum SessionCommands {
    Show(ShowArgs),
    Clear(ClearArgs),
}

impl SessionCommands {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            SessionCommands::Show(args) => args.run(),
            SessionCommands::Clear(args) => args.run(),
        }
    }
}

/// Arguments for `bn session show`
#[derive(Args)]
#[command(about = "Show the on-device session flags")]
pub struct ShowArgs {}

impl ShowArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let db = SessionDb::open_default()?;
        if db.has_entered()? {
            println!("✅ Welcome flow completed");
            if let Some(user_id) = db.last_user_id()? {
                println!("   Last user: {}", user_id);
            }
            if let Some(entered_at) = db.entered_at()? {
                println!("   Entered at: {}", entered_at.to_rfc3339());
            }
        } else {
            println!("No session on this device; launch would show the welcome flow");
        }
        Ok(())
    }
}

/// Arguments for `bn session clear`
#[derive(Args)]
#[command(about = "Forget the on-device session flags")]
pub struct ClearArgs {}

impl ClearArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let db = SessionDb::open_default()?;
        db.clear_entered()?;
        println!("Session cleared");
        Ok(())
    }
}
