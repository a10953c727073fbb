// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Observable cache of barber profiles

use std::sync::{Arc, Mutex, PoisonError};

use bn_api_contract::{BarberPatch, BarberProfile, NewBarber};
use bn_client_api::{ClientApi, ClientApiResult};
use bn_domain_types::City;

use crate::subscription::{Subscribers, Subscription};

/// In-process cache of the barbers collection
pub struct BarbersStore {
    api: Arc<dyn ClientApi>,
    barbers: Mutex<Vec<BarberProfile>>,
    subscribers: Subscribers,
}

impl BarbersStore {
    pub fn new(api: Arc<dyn ClientApi>) -> Self {
        Self {
            api,
            barbers: Mutex::new(Vec::new()),
            subscribers: Subscribers::new(),
        }
    }

    /// Snapshot of the cached collection; never blocks on the network
    pub fn get(&self) -> Vec<BarberProfile> {
        self.lock().clone()
    }

    /// Register a callback fired once per successful mutation
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Distinct cities present in the current snapshot, alphabetical
    pub fn unique_cities(&self) -> Vec<City> {
        Self::unique_cities_of(&self.get())
    }

    /// Distinct cities present in a supplied snapshot, alphabetical
    pub fn unique_cities_of(barbers: &[BarberProfile]) -> Vec<City> {
        let mut cities: Vec<City> = barbers.iter().map(|b| b.city).collect();
        cities.sort();
        cities.dedup();
        cities
    }

    /// Load the full collection, replacing the cache wholesale in server
    /// order and notifying subscribers once.
    ///
    /// Concurrent calls are not coordinated: whichever response arrives last
    /// determines the final snapshot. On failure the cache is left unchanged
    /// and nothing fires.
    pub async fn fetch_all(&self) -> ClientApiResult<Vec<BarberProfile>> {
        let data = self.api.list_barbers().await?;
        tracing::debug!(count = data.len(), "loaded barbers");
        *self.lock() = data.clone();
        self.subscribers.notify();
        Ok(data)
    }

    /// Fetch one barber; an already cached record is replaced in place,
    /// otherwise the record is prepended
    pub async fn fetch_by_id(&self, id: &str) -> ClientApiResult<BarberProfile> {
        let barber = self.api.get_barber(id).await?;
        {
            let mut barbers = self.lock();
            if let Some(slot) = barbers.iter_mut().find(|b| b.id == barber.id) {
                *slot = barber.clone();
            } else {
                barbers.insert(0, barber.clone());
            }
        }
        self.subscribers.notify();
        Ok(barber)
    }

    /// Create a barber profile and prepend the server-returned record
    pub async fn add(&self, input: &NewBarber) -> ClientApiResult<BarberProfile> {
        let created = self.api.create_barber(input).await?;
        self.lock().insert(0, created.clone());
        self.subscribers.notify();
        Ok(created)
    }

    /// Update a barber profile; the server-returned record replaces the
    /// cached one in place. Ownership is asserted via the patch's
    /// `owner_id` and checked server-side only.
    pub async fn update(&self, id: &str, patch: &BarberPatch) -> ClientApiResult<BarberProfile> {
        let updated = self.api.update_barber(id, patch).await?;
        {
            let mut barbers = self.lock();
            if let Some(slot) = barbers.iter_mut().find(|b| b.id == id) {
                *slot = updated.clone();
            }
        }
        self.subscribers.notify();
        Ok(updated)
    }

    /// Delete a barber profile and drop it from the cache
    pub async fn remove(&self, id: &str, owner_id: &str) -> ClientApiResult<()> {
        self.api.delete_barber(id, owner_id).await?;
        self.lock().retain(|b| b.id != id);
        self.subscribers.notify();
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<BarberProfile>> {
        self.barbers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bn_client_api::{ClientApiError, MockClientApi};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn barber(id: &str, city: City) -> BarberProfile {
        BarberProfile {
            id: id.to_string(),
            full_name: "Sam Barber".to_string(),
            city,
            bio: None,
            phone_number: "+447700900123".to_string(),
            email: None,
            experience: "0-1 years".to_string(),
            skills: vec![],
            specialities: vec![],
            images: vec![],
            owner_id: "user-1".to_string(),
            created_at: "2025-06-01T10:00:00.000Z".to_string(),
            updated_at: "2025-06-01T10:00:00.000Z".to_string(),
        }
    }

    fn counter(store: &BarbersStore) -> Arc<AtomicUsize> {
        let hits = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&hits);
        store.subscribe(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });
        hits
    }

    #[tokio::test]
    async fn fetch_all_replaces_wholesale_in_server_order() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers()
            .times(1)
            .returning(|| Ok(vec![barber("a", City::London), barber("b", City::Leeds)]));

        let store = BarbersStore::new(Arc::new(api));
        assert!(store.get().is_empty());

        let fetched = store.fetch_all().await.unwrap();

        let snapshot = store.get();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, "a");
        assert_eq!(snapshot[1].id, "b");
        assert_eq!(fetched, snapshot);
    }

    #[tokio::test]
    async fn fetch_all_failure_keeps_snapshot_and_fires_nothing() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers()
            .times(1)
            .returning(|| Ok(vec![barber("a", City::London)]));
        api.expect_list_barbers()
            .times(1)
            .returning(|| Err(ClientApiError::Server("backend unreachable".to_string())));

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();
        let hits = counter(&store);

        let err = store.fetch_all().await.unwrap_err();

        assert_eq!(err, ClientApiError::Server("backend unreachable".to_string()));
        assert_eq!(store.get().len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn add_prepends_and_notifies_each_subscriber_once() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers()
            .returning(|| Ok(vec![barber("a", City::London)]));
        api.expect_create_barber()
            .times(1)
            .returning(|_| Ok(barber("fresh", City::York)));

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();

        let first = counter(&store);
        let second = counter(&store);

        let input = NewBarber {
            full_name: "Sam Barber".to_string(),
            city: City::York,
            bio: None,
            phone_number: "+447700900123".to_string(),
            email: None,
            experience: "0-1 years".to_string(),
            skills: vec![],
            specialities: vec![],
            images: vec![],
            owner_id: "user-1".to_string(),
        };
        let created = store.add(&input).await.unwrap();

        let snapshot = store.get();
        assert_eq!(created.id, "fresh");
        assert_eq!(snapshot[0].id, "fresh");
        assert_eq!(snapshot.iter().filter(|b| b.id == "fresh").count(), 1);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_replaces_matching_record_in_place() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers().returning(|| {
            Ok(vec![
                barber("a", City::London),
                barber("b", City::Leeds),
                barber("c", City::York),
            ])
        });
        api.expect_update_barber().times(1).returning(|_, _| {
            let mut updated = barber("b", City::Bristol);
            updated.full_name = "Renamed".to_string();
            Ok(updated)
        });

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();

        let patch = BarberPatch {
            full_name: Some("Renamed".to_string()),
            city: Some(City::Bristol),
            owner_id: "user-1".to_string(),
            ..Default::default()
        };
        store.update("b", &patch).await.unwrap();

        let snapshot = store.get();
        assert_eq!(snapshot.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(snapshot[1].full_name, "Renamed");
        assert_eq!(snapshot[1].city, City::Bristol);
        assert_eq!(snapshot.iter().filter(|b| b.id == "b").count(), 1);
    }

    #[tokio::test]
    async fn update_missing_id_propagates_error_without_corrupting_list() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers()
            .returning(|| Ok(vec![barber("a", City::London)]));
        api.expect_update_barber()
            .times(1)
            .returning(|_, _| Err(ClientApiError::Server("Barber not found".to_string())));

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();
        let hits = counter(&store);
        let before = store.get();

        let patch = BarberPatch {
            full_name: Some("X".to_string()),
            owner_id: "u1".to_string(),
            ..Default::default()
        };
        let err = store.update("nope", &patch).await.unwrap_err();

        assert_eq!(err, ClientApiError::Server("Barber not found".to_string()));
        assert_eq!(store.get(), before);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remove_drops_the_record() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers()
            .returning(|| Ok(vec![barber("a", City::London), barber("b", City::Leeds)]));
        api.expect_delete_barber().times(1).returning(|_, _| {
            Ok(bn_api_contract::DeleteBarberResponse {
                message: "Barber deleted".to_string(),
            })
        });

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();

        store.remove("a", "user-1").await.unwrap();

        assert!(store.get().iter().all(|b| b.id != "a"));
        assert_eq!(store.get().len(), 1);
    }

    #[tokio::test]
    async fn fetch_by_id_prepends_unknown_and_replaces_known() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers()
            .returning(|| Ok(vec![barber("a", City::London)]));
        api.expect_get_barber().times(1).returning(|_| Ok(barber("b", City::Leeds)));
        api.expect_get_barber().times(1).returning(|_| {
            let mut refreshed = barber("a", City::London);
            refreshed.bio = Some("refreshed".to_string());
            Ok(refreshed)
        });

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();

        // Unknown record lands at the head
        store.fetch_by_id("b").await.unwrap();
        assert_eq!(
            store.get().iter().map(|b| b.id.clone()).collect::<Vec<_>>(),
            ["b", "a"]
        );

        // Known record is replaced without moving
        store.fetch_by_id("a").await.unwrap();
        let snapshot = store.get();
        assert_eq!(snapshot.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(snapshot[1].bio.as_deref(), Some("refreshed"));
    }

    #[tokio::test]
    async fn unique_cities_are_sorted_and_deduped() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers().returning(|| {
            Ok(vec![
                barber("a", City::London),
                barber("b", City::Leeds),
                barber("c", City::London),
            ])
        });

        let store = BarbersStore::new(Arc::new(api));
        store.fetch_all().await.unwrap();

        assert_eq!(store.unique_cities(), vec![City::Leeds, City::London]);
        // Deterministic across repeated calls
        assert_eq!(store.unique_cities(), store.unique_cities());
    }

    #[tokio::test]
    async fn unsubscribed_listener_does_not_fire() {
        let mut api = MockClientApi::new();
        api.expect_list_barbers().returning(|| Ok(vec![]));

        let store = BarbersStore::new(Arc::new(api));

        let silent = Arc::new(AtomicUsize::new(0));
        let silent_handle = Arc::clone(&silent);
        let subscription = store.subscribe(move || {
            silent_handle.fetch_add(1, Ordering::SeqCst);
        });
        let live = counter(&store);

        subscription.unsubscribe();
        store.fetch_all().await.unwrap();

        assert_eq!(silent.load(Ordering::SeqCst), 0);
        assert_eq!(live.load(Ordering::SeqCst), 1);
    }
}
