// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Barber profile endpoints

use bn_api_contract::{BarberPatch, BarberProfile, DeleteBarberResponse, DeleteRequest, NewBarber};
use bn_domain_types::City;

use crate::client::RestClient;
use crate::error::RestClientResult;

impl RestClient {
    /// List all barbers
    pub async fn list_barbers(&self) -> RestClientResult<Vec<BarberProfile>> {
        self.get("/barbers").await
    }

    /// List barbers registered in one city
    pub async fn list_barbers_by_city(&self, city: City) -> RestClientResult<Vec<BarberProfile>> {
        self.get_with_query("/barbers/list", &[("city", city.as_str())]).await
    }

    /// Get a single barber by id
    pub async fn get_barber(&self, id: &str) -> RestClientResult<BarberProfile> {
        let path = format!("/barbers/{}", id);
        self.get(&path).await
    }

    /// Create a barber profile; the response carries the server-assigned id
    pub async fn create_barber(&self, request: &NewBarber) -> RestClientResult<BarberProfile> {
        self.post("/barbers/new-barber", request).await
    }

    /// Update a barber profile (owner only; the server authorizes against
    /// the `owner_id` in the patch)
    pub async fn update_barber(
        &self,
        id: &str,
        patch: &BarberPatch,
    ) -> RestClientResult<BarberProfile> {
        let path = format!("/barbers/update/{}", id);
        self.put(&path, patch).await
    }

    /// Delete a barber profile (owner only)
    pub async fn delete_barber(
        &self,
        id: &str,
        owner_id: &str,
    ) -> RestClientResult<DeleteBarberResponse> {
        let path = format!("/barbers/delete/{}", id);
        let body = DeleteRequest {
            owner_id: owner_id.to_string(),
        };
        self.delete_with_body(&path, &body).await
    }
}
