// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Shop sale listing endpoints

use bn_api_contract::{DeleteRequest, DeleteShopResponse, NewShop, ShopListing, ShopPatch};
use bn_client_api::ShopFilters;

use crate::client::RestClient;
use crate::error::RestClientResult;

impl RestClient {
    /// List all shops for sale
    pub async fn list_shops(&self) -> RestClientResult<Vec<ShopListing>> {
        self.get("/shops").await
    }

    /// List shops with optional server-side filters
    pub async fn list_shops_filtered(
        &self,
        filters: &ShopFilters,
    ) -> RestClientResult<Vec<ShopListing>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(location) = &filters.location {
            query.push(("location", location.clone()));
        }
        self.get_with_query("/shops/list", &query).await
    }

    /// Get a single shop by id
    pub async fn get_shop(&self, id: &str) -> RestClientResult<ShopListing> {
        let path = format!("/shops/{}", id);
        self.get(&path).await
    }

    /// Create a shop sale listing
    pub async fn create_shop(&self, request: &NewShop) -> RestClientResult<ShopListing> {
        self.post("/shops/new-shop", request).await
    }

    /// Update a shop listing (owner only)
    pub async fn update_shop(&self, id: &str, patch: &ShopPatch) -> RestClientResult<ShopListing> {
        let path = format!("/shops/update/{}", id);
        self.put(&path, patch).await
    }

    /// Delete a shop listing (owner only); the response echoes the removed
    /// listing
    pub async fn delete_shop(
        &self,
        id: &str,
        owner_id: &str,
    ) -> RestClientResult<DeleteShopResponse> {
        let path = format!("/shops/delete/{}", id);
        let body = DeleteRequest {
            owner_id: owner_id.to_string(),
        };
        self.delete_with_body(&path, &body).await
    }
}
