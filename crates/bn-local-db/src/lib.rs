// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! On-device session persistence
//!
//! The only client-side state that survives a restart: whether the user has
//! completed the welcome flow, and which user id they last signed in with.
//! Both live in a small key-value table so launch can decide between the
//! welcome flow and the main view without a network round-trip.

pub mod session;

pub use session::{SessionDb, SessionDbError};
