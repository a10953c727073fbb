// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Observable cache of job listings

use std::sync::{Arc, Mutex, PoisonError};

use bn_api_contract::{DeleteJobResponse, JobListing, JobPatch, NewJob};
use bn_client_api::{ClientApi, ClientApiResult, JobFilters};
use bn_domain_types::JobType;

use crate::subscription::{Subscribers, Subscription};

/// In-process cache of the jobs collection
pub struct JobsStore {
    api: Arc<dyn ClientApi>,
    jobs: Mutex<Vec<JobListing>>,
    subscribers: Subscribers,
}

impl JobsStore {
    pub fn new(api: Arc<dyn ClientApi>) -> Self {
        Self {
            api,
            jobs: Mutex::new(Vec::new()),
            subscribers: Subscribers::new(),
        }
    }

    /// Snapshot of the cached collection; never blocks on the network
    pub fn get(&self) -> Vec<JobListing> {
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
    pub fn unique_locations_of(jobs: &[JobListing]) -> Vec<String> {
        let mut locations: Vec<String> = jobs
            .iter()
            .map(|j| j.location.clone())
            .filter(|l| !l.is_empty())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }

    /// Distinct job types present in the current snapshot, alphabetical
    pub fn unique_types(&self) -> Vec<JobType> {
        Self::unique_types_of(&self.get())
    }

    /// Distinct job types present in a supplied snapshot, alphabetical
    pub fn unique_types_of(jobs: &[JobListing]) -> Vec<JobType> {
        let mut types: Vec<JobType> = jobs.iter().map(|j| j.job_type).collect();
        types.sort();
        types.dedup();
        types
    }

    /// Filter the current snapshot locally: case-insensitive substring match
    /// on location, exact match on job type
    pub fn filter(&self, filters: &JobFilters) -> Vec<JobListing> {
        let location = filters.location.as_deref().map(str::to_lowercase);
        self.get()
            .into_iter()
            .filter(|job| {
                let match_location = location
                    .as_deref()
                    .map(|needle| job.location.to_lowercase().contains(needle))
                    .unwrap_or(true);
                let match_type =
                    filters.job_type.map(|wanted| job.job_type == wanted).unwrap_or(true);
                match_location && match_type
            })
            .collect()
    }

    /// Load the full collection, replacing the cache wholesale in server
    /// order and notifying subscribers once.
    ///
    /// Concurrent calls are not coordinated: whichever response arrives last
    /// determines the final snapshot. On failure the cache is left unchanged
    /// and nothing fires.
    pub async fn fetch_all(&self) -> ClientApiResult<Vec<JobListing>> {
        let data = self.api.list_jobs().await?;
        tracing::debug!(count = data.len(), "loaded jobs");
        *self.lock() = data.clone();
        self.subscribers.notify();
        Ok(data)
    }

    /// Fetch one job; an already cached record is replaced in place,
    /// otherwise the record is prepended
    pub async fn fetch_by_id(&self, id: &str) -> ClientApiResult<JobListing> {
        let job = self.api.get_job(id).await?;
        {
            let mut jobs = self.lock();
            if let Some(slot) = jobs.iter_mut().find(|j| j.id == job.id) {
                *slot = job.clone();
            } else {
                jobs.insert(0, job.clone());
            }
        }
        self.subscribers.notify();
        Ok(job)
    }

    /// Create a job listing and prepend the server-returned record
    pub async fn add(&self, input: &NewJob) -> ClientApiResult<JobListing> {
        let created = self.api.create_job(input).await?;
        self.lock().insert(0, created.clone());
        self.subscribers.notify();
        Ok(created)
    }

    /// Update a job listing; the server-returned record replaces the cached
    /// one in place
    pub async fn update(&self, id: &str, patch: &JobPatch) -> ClientApiResult<JobListing> {
        let updated = self.api.update_job(id, patch).await?;
        {
            let mut jobs = self.lock();
            if let Some(slot) = jobs.iter_mut().find(|j| j.id == id) {
                *slot = updated.clone();
            }
        }
        self.subscribers.notify();
        Ok(updated)
    }

    /// Delete a job listing and drop it from the cache; the backend echoes
    /// the removed listing in its response
    pub async fn remove(&self, id: &str, owner_id: &str) -> ClientApiResult<DeleteJobResponse> {
        let response = self.api.delete_job(id, owner_id).await?;
        self.lock().retain(|j| j.id != id);
        self.subscribers.notify();
        Ok(response)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<JobListing>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
