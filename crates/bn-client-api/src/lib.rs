// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Client API abstraction for the BarberNet backend
//!
//! The stores program against this trait rather than a concrete transport,
//! so tests can substitute a mock and the REST client stays swappable. The
//! `mocks` feature generates `MockClientApi` via mockall.

use async_trait::async_trait;
use bn_api_contract::*;
use bn_domain_types::{City, JobType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat failure type for every backend operation
///
/// The client layer does not distinguish not-found from validation or
/// authorization failures; whatever detail exists lives in the message
/// text, as it does on the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientApiError {
    #[error("{0}")]
    Server(String),
}

pub type ClientApiResult<T> = Result<T, ClientApiError>;

/// Server-side filters for the job list endpoint, also reused for local
/// filtering of a loaded snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
}

/// Server-side filters for the shop list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One method per backend operation; every method maps to exactly one
/// HTTP call with no retry or caching.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait ClientApi: Send + Sync {
    // Health
    async fn health(&self) -> ClientApiResult<()>;

    // Barbers
    async fn list_barbers(&self) -> ClientApiResult<Vec<BarberProfile>>;
    async fn list_barbers_by_city(&self, city: City) -> ClientApiResult<Vec<BarberProfile>>;
    async fn get_barber(&self, id: &str) -> ClientApiResult<BarberProfile>;
    async fn create_barber(&self, request: &NewBarber) -> ClientApiResult<BarberProfile>;
    async fn update_barber(&self, id: &str, patch: &BarberPatch) -> ClientApiResult<BarberProfile>;
    async fn delete_barber(&self, id: &str, owner_id: &str)
        -> ClientApiResult<DeleteBarberResponse>;

    // Jobs
    async fn list_jobs(&self) -> ClientApiResult<Vec<JobListing>>;
    async fn list_jobs_filtered(&self, filters: &JobFilters) -> ClientApiResult<Vec<JobListing>>;
    async fn get_job(&self, id: &str) -> ClientApiResult<JobListing>;
    async fn create_job(&self, request: &NewJob) -> ClientApiResult<JobListing>;
    async fn update_job(&self, id: &str, patch: &JobPatch) -> ClientApiResult<JobListing>;
    async fn delete_job(&self, id: &str, owner_id: &str) -> ClientApiResult<DeleteJobResponse>;

    // Shops
    async fn list_shops(&self) -> ClientApiResult<Vec<ShopListing>>;
    async fn list_shops_filtered(&self, filters: &ShopFilters)
        -> ClientApiResult<Vec<ShopListing>>;
    async fn get_shop(&self, id: &str) -> ClientApiResult<ShopListing>;
    async fn create_shop(&self, request: &NewShop) -> ClientApiResult<ShopListing>;
    async fn update_shop(&self, id: &str, patch: &ShopPatch) -> ClientApiResult<ShopListing>;
    async fn delete_shop(&self, id: &str, owner_id: &str) -> ClientApiResult<DeleteShopResponse>;

    // User and auth
    async fn get_user(&self, id: &str) -> ClientApiResult<UserProfile>;
    async fn register_user(&self, request: &RegisterUserRequest)
        -> ClientApiResult<serde_json::Value>;
    async fn login(&self, email: &str, password: &str) -> ClientApiResult<serde_json::Value>;
    async fn update_user(&self, request: &UpdateUserRequest)
        -> ClientApiResult<UpdateUserResponse>;
    async fn delete_user(&self, id: &str) -> ClientApiResult<()>;
}
