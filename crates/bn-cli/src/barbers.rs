// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Barber listing commands

use std::sync::Arc;

use bn_api_contract::images;
use bn_api_contract::BarberProfile;
use bn_domain_types::City;
use bn_rest_client::{AuthConfig, NetworkConfig, RestClient};
use bn_stores::BarbersStore;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum BarbersCommands {
    List(ListArgs),
    Show(ShowArgs),
}

impl BarbersCommands {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        match self {
            BarbersCommands::List(args) => args.run(network).await,
            BarbersCommands::Show(args) => args.run(network).await,
        }
    }
}

/// Arguments for `bn barbers list`
#[derive(Args)]
#[command(about = "List barbers, optionally one city only")]
pub struct ListArgs {
    /// Only barbers registered in this city
    #[arg(long)]
    city: Option<City>,
}

impl ListArgs {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        let client = RestClient::from_config(network, AuthConfig::new())?;

        let barbers = match self.city {
            Some(city) => client.list_barbers_by_city(city).await?,
            None => {
                let store = BarbersStore::new(Arc::new(client));
                store.fetch_all().await?;

                let cities = store.unique_cities();
                let barbers = store.get();
                if !cities.is_empty() {
                    let names: Vec<&str> = cities.iter().map(|c| c.as_str()).collect();
                    println!("📍 Cities: {}", names.join(", "));
                }
                barbers
            }
        };

        if barbers.is_empty() {
            println!("No barbers found");
            return Ok(());
        }
        for barber in &barbers {
            println!(
                "{}  {} ({}) — {} — {}",
                barber.id, barber.full_name, barber.city, barber.experience, barber.phone_number
            );
        }
        Ok(())
    }
}

/// Arguments for `bn barbers show`
#[derive(Args)]
#[command(about = "Show one barber profile in full")]
pub struct ShowArgs {
    /// Barber id
    id: String,
}

impl ShowArgs {
    pub async fn run(self, network: &NetworkConfig) -> anyhow::Result<()> {
        let client = RestClient::from_config(network, AuthConfig::new())?;
        let barber = client.get_barber(&self.id).await?;
        print_barber(&barber);
        Ok(())
    }
}

fn print_barber(barber: &BarberProfile) {
    println!("💈 {} — {}", barber.full_name, barber.city);
    println!("   Experience: {}", barber.experience);
    println!("   Phone: {}", barber.phone_number);
    if let Some(email) = &barber.email {
        println!("   Email: {}", email);
    }
    if let Some(bio) = &barber.bio {
        println!("   Bio: {}", bio);
    }
    if !barber.skills.is_empty() {
        println!("   Skills: {}", barber.skills.join(", "));
    }
    if !barber.specialities.is_empty() {
        println!("   Specialities: {}", barber.specialities.join(", "));
    }
    for image in &barber.images {
        if images::is_data_uri(image) {
            match images::decode_data_uri(image) {
                Ok((mime, bytes)) => println!("   Image: inline {} ({} bytes)", mime, bytes.len()),
                Err(_) => println!("   Image: inline (unreadable)"),
            }
        } else {
            println!("   Image: {}", image);
        }
    }
}
