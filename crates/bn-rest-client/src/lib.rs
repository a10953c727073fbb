// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the BarberNet backend
//!
//! This crate provides the HTTP client for the BarberNet REST API: base-URL
//! selection, the shared request/response plumbing, and one module of typed
//! endpoint methods per resource. It implements the `ClientApi` trait so the
//! stores (and anything else) can stay transport-agnostic.
//!
//! There is deliberately no retry, caching, or request de-duplication here;
//! each method issues exactly one HTTP call and propagates failure as-is.

pub mod auth;
pub mod barbers;
pub mod client;
pub mod error;
pub mod health;
pub mod jobs;
pub mod network_config;
pub mod shops;
pub mod user;

pub use auth::*;
pub use client::*;
pub use error::*;
pub use network_config::*;

use async_trait::async_trait;
use bn_api_contract::*;
use bn_client_api::{ClientApi, ClientApiError, ClientApiResult, JobFilters, ShopFilters};
use bn_domain_types::City;

#[async_trait]
impl ClientApi for client::RestClient {
    async fn health(&self) -> ClientApiResult<()> {
        self.health().await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn list_barbers(&self) -> ClientApiResult<Vec<BarberProfile>> {
        self.list_barbers().await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn list_barbers_by_city(&self, city: City) -> ClientApiResult<Vec<BarberProfile>> {
        self.list_barbers_by_city(city)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn get_barber(&self, id: &str) -> ClientApiResult<BarberProfile> {
        self.get_barber(id).await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn create_barber(&self, request: &NewBarber) -> ClientApiResult<BarberProfile> {
        self.create_barber(request)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn update_barber(&self, id: &str, patch: &BarberPatch) -> ClientApiResult<BarberProfile> {
        self.update_barber(id, patch)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn delete_barber(
        &self,
        id: &str,
        owner_id: &str,
    ) -> ClientApiResult<DeleteBarberResponse> {
        self.delete_barber(id, owner_id)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn list_jobs(&self) -> ClientApiResult<Vec<JobListing>> {
        self.list_jobs().await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn list_jobs_filtered(&self, filters: &JobFilters) -> ClientApiResult<Vec<JobListing>> {
        self.list_jobs_filtered(filters)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn get_job(&self, id: &str) -> ClientApiResult<JobListing> {
        self.get_job(id).await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn create_job(&self, request: &NewJob) -> ClientApiResult<JobListing> {
        self.create_job(request).await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn update_job(&self, id: &str, patch: &JobPatch) -> ClientApiResult<JobListing> {
        self.update_job(id, patch)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn delete_job(&self, id: &str, owner_id: &str) -> ClientApiResult<DeleteJobResponse> {
        self.delete_job(id, owner_id)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn list_shops(&self) -> ClientApiResult<Vec<ShopListing>> {
        self.list_shops().await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn list_shops_filtered(
        &self,
        filters: &ShopFilters,
    ) -> ClientApiResult<Vec<ShopListing>> {
        self.list_shops_filtered(filters)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn get_shop(&self, id: &str) -> ClientApiResult<ShopListing> {
        self.get_shop(id).await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn create_shop(&self, request: &NewShop) -> ClientApiResult<ShopListing> {
        self.create_shop(request)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn update_shop(&self, id: &str, patch: &ShopPatch) -> ClientApiResult<ShopListing> {
        self.update_shop(id, patch)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn delete_shop(&self, id: &str, owner_id: &str) -> ClientApiResult<DeleteShopResponse> {
        self.delete_shop(id, owner_id)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn get_user(&self, id: &str) -> ClientApiResult<UserProfile> {
        self.get_user(id).await.map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn register_user(
        &self,
        request: &RegisterUserRequest,
    ) -> ClientApiResult<serde_json::Value> {
        self.register_user(request)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn login(&self, email: &str, password: &str) -> ClientApiResult<serde_json::Value> {
        self.login(email, password)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn update_user(&self, request: &UpdateUserRequest) -> ClientApiResult<UpdateUserResponse> {
        self.update_user(request)
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn delete_user(&self, id: &str) -> ClientApiResult<()> {
        self.delete_user(id).await.map_err(|e| ClientApiError::Server(e.to_string()))
    }
}
