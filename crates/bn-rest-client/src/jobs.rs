// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Job listing endpoints

use bn_api_contract::{DeleteJobResponse, DeleteRequest, JobListing, JobPatch, NewJob};
use bn_client_api::JobFilters;

use crate::client::RestClient;
use crate::error::RestClientResult;

impl RestClient {
    /// List all jobs
    pub async fn list_jobs(&self) -> RestClientResult<Vec<JobListing>> {
        self.get("/jobs").await
    }

    /// List jobs with optional server-side filters
    pub async fn list_jobs_filtered(
        &self,
        filters: &JobFilters,
    ) -> RestClientResult<Vec<JobListing>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(location) = &filters.location {
            query.push(("location", location.clone()));
        }
        if let Some(job_type) = filters.job_type {
            query.push(("type", job_type.as_str().to_string()));
        }
        self.get_with_query("/jobs/list", &query).await
    }

    /// Get a single job by id
    pub async fn get_job(&self, id: &str) -> RestClientResult<JobListing> {
        let path = format!("/jobs/{}", id);
        self.get(&path).await
    }

    /// Create a job listing
    pub async fn create_job(&self, request: &NewJob) -> RestClientResult<JobListing> {
        self.post("/jobs/new-job", request).await
    }

    /// Update a job listing (owner only)
    pub async fn update_job(&self, id: &str, patch: &JobPatch) -> RestClientResult<JobListing> {
        let path = format!("/jobs/update/{}", id);
        self.put(&path, patch).await
    }

    /// Delete a job listing (owner only); the response echoes the removed
    /// listing
    pub async fn delete_job(
        &self,
        id: &str,
        owner_id: &str,
    ) -> RestClientResult<DeleteJobResponse> {
        let path = format!("/jobs/delete/{}", id);
        let body = DeleteRequest {
            owner_id: owner_id.to_string(),
        };
        self.delete_with_body(&path, &body).await
    }
}
