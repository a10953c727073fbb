// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! User profile and auth endpoints
//!
//! User ids originate in the identity provider, so there is no list
//! endpoint and no server-assigned id anywhere on this resource.

use bn_api_contract::{
    LoginRequest, RegisterUserRequest, UpdateUserRequest, UpdateUserResponse, UserProfile,
};

use crate::client::RestClient;
use crate::error::RestClientResult;

impl RestClient {
    /// Get a user profile by id
    pub async fn get_user(&self, id: &str) -> RestClientResult<UserProfile> {
        let path = format!("/user/{}", id);
        self.get(&path).await
    }

    /// Register a user record for an identity-provider account
    pub async fn register_user(
        &self,
        request: &RegisterUserRequest,
    ) -> RestClientResult<serde_json::Value> {
        self.post("/auth/register", request).await
    }

    /// Credential login; part of the backend surface but not wired into any
    /// client flow (sign-in happens at the identity provider)
    pub async fn login(&self, email: &str, password: &str) -> RestClientResult<serde_json::Value> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &body).await
    }

    /// Update the signed-in user's profile
    pub async fn update_user(
        &self,
        request: &UpdateUserRequest,
    ) -> RestClientResult<UpdateUserResponse> {
        self.put("/user/update", request).await
    }

    /// Delete a user record; authorization is the id in the URL
    pub async fn delete_user(&self, id: &str) -> RestClientResult<()> {
        let path = format!("/user/delete/{}", id);
        self.delete_no_content(&path).await
    }
}
