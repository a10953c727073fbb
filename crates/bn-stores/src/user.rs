// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The signed-in user's profile — the single-record store
//!
//! Unlike the collection stores this one performs no network calls of its
//! own: callers fetch or save through the user endpoints and then merge the
//! result in here, which is exactly how the screens compose it.

use std::sync::{Mutex, PoisonError};

use bn_api_contract::UserProfile;

use crate::subscription::{Subscribers, Subscription};

/// Partial update applied to the cached profile
///
/// `photo` is doubly optional: `None` leaves the photo untouched,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub photo: Option<Option<String>>,
}

/// In-process holder of the signed-in user's profile
pub struct UserStore {
    user: Mutex<UserProfile>,
    subscribers: Subscribers,
}

impl UserStore {
    /// Empty profile until a sign-in flow populates it
    pub fn new() -> Self {
        Self {
            user: Mutex::new(UserProfile::default()),
            subscribers: Subscribers::new(),
        }
    }

    /// Snapshot of the cached profile
    pub fn get(&self) -> UserProfile {
        self.lock().clone()
    }

    /// Register a callback fired once per update
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Merge a patch into the cached profile and notify subscribers
    pub fn update(&self, patch: UserPatch) {
        {
            let mut user = self.lock();
            if let Some(id) = patch.id {
                user.id = id;
            }
            if let Some(name) = patch.name {
                user.name = name;
            }
            if let Some(phone) = patch.phone {
                user.phone = phone;
            }
            if let Some(email) = patch.email {
                user.email = email;
            }
            if let Some(photo) = patch.photo {
                user.photo = photo;
            }
        }
        self.subscribers.notify();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UserProfile> {
        self.user.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
