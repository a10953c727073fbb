// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Observable cache of shop sale listings

use std::sync::{Arc, Mutex, PoisonError};

use bn_api_contract::{NewShop, ShopListing, ShopPatch};
use bn_client_api::{ClientApi, ClientApiResult, ShopFilters};

use crate::subscription::{Subscribers, Subscription};

/// In-process cache of the shops collection
pub struct ShopsStore {
    api: Arc<dyn ClientApi>,
    shops: Mutex<Vec<ShopListing>>,
    subscribers: Subscribers,
}

impl ShopsStore {
    pub fn new(api: Arc<dyn ClientApi>) -> Self {
        Self {
            api,
            shops: Mutex::new(Vec::new()),
            subscribers: Subscribers::new(),
        }
    }

    /// Snapshot of the cached collection; never blocks on the network
    pub fn get(&self) -> Vec<ShopListing> {
        self.lock().clone()
    }

    /// Register a callback fired once per successful mutation
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Distinct locations present in the current snapshot, alphabetical
    pub fn unique_locations(&self) -> Vec<String> {
        Self::unique_locations_of(&self.get())
    }

    /// Distinct locations present in a supplied snapshot, alphabetical
    pub fn unique_locations_of(shops: &[ShopListing]) -> Vec<String> {
        let mut locations: Vec<String> = shops
            .iter()
            .map(|s| s.location.clone())
            .filter(|l| !l.is_empty())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }

    /// Filter the current snapshot locally: case-insensitive substring match
    /// on location
    pub fn filter(&self, filters: &ShopFilters) -> Vec<ShopListing> {
        let location = filters.location.as_deref().map(str::to_lowercase);
        self.get()
            .into_iter()
            .filter(|shop| {
                location
                    .as_deref()
                    .map(|needle| shop.location.to_lowercase().contains(needle))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Load the full collection, replacing the cache wholesale in server
    /// order and notifying subscribers once.
    ///
    /// Concurrent calls are not coordinated: whichever response arrives last
    /// determines the final snapshot. On failure the cache is left unchanged
    /// and nothing fires.
    pub async fn fetch_all(&self) -> ClientApiResult<Vec<ShopListing>> {
        let data = self.api.list_shops().await?;
        tracing::debug!(count = data.len(), "loaded shops");
        *self.lock() = data.clone();
        self.subscribers.notify();
        Ok(data)
    }

    /// Fetch one shop; an already cached record is replaced in place,
    /// otherwise the record is prepended
    pub async fn fetch_by_id(&self, id: &str) -> ClientApiResult<ShopListing> {
        let shop = self.api.get_shop(id).await?;
        {
            let mut shops = self.lock();
            if let Some(slot) = shops.iter_mut().find(|s| s.id == shop.id) {
                *slot = shop.clone();
            } else {
                shops.insert(0, shop.clone());
            }
        }
        self.subscribers.notify();
        Ok(shop)
    }

    /// Create a shop listing and prepend the server-returned record
    pub async fn add(&self, input: &NewShop) -> ClientApiResult<ShopListing> {
        let created = self.api.create_shop(input).await?;
        self.lock().insert(0, created.clone());
        self.subscribers.notify();
        Ok(created)
    }

    /// Update a shop listing; the server-returned record replaces the
    /// cached one in place
    pub async fn update(&self, id: &str, patch: &ShopPatch) -> ClientApiResult<ShopListing> {
        let updated = self.api.update_shop(id, patch).await?;
        {
            let mut shops = self.lock();
            if let Some(slot) = shops.iter_mut().find(|s| s.id == id) {
                *slot = updated.clone();
            }
        }
        self.subscribers.notify();
        Ok(updated)
    }

    /// Delete a shop listing and drop it from the cache
    pub async fn remove(&self, id: &str, owner_id: &str) -> ClientApiResult<()> {
        self.api.delete_shop(id, owner_id).await?;
        self.lock().retain(|s| s.id != id);
        self.subscribers.notify();
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ShopListing>> {
        self.shops.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
