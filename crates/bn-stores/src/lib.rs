// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Observable in-process caches for BarberNet collections
//!
//! Each store holds the last-fetched copy of one backend collection, gives
//! synchronous read access to that snapshot, and notifies subscribers after
//! every successful mutation. Mutating operations call the backend first and
//! only touch local state when the call succeeds, so a failure always leaves
//! the previous snapshot intact (stale but consistent).
//!
//! Stores are explicit instances constructed over an injected [`ClientApi`]
//! implementation — there are no module-level singletons — so views share a
//! store by sharing the instance, and tests construct stores around mocks.
//!
//! [`ClientApi`]: bn_client_api::ClientApi

pub mod barbers;
pub mod jobs;
pub mod shops;
pub mod subscription;
pub mod user;

pub use barbers::BarbersStore;
pub use jobs::JobsStore;
pub use shops::ShopsStore;
pub use subscription::{Subscribers, Subscription};
pub use user::{UserPatch, UserStore};
