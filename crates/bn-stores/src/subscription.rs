// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Subscriber fan-out shared by every store
//!
//! A store notifies its subscribers exactly once per successful mutation.
//! Registrations are independent: the same callback registered twice fires
//! twice and each registration has its own disposer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

type Callback = Arc<dyn Fn() + Send + Sync>;

struct Entry {
    id: u64,
    callback: Callback,
}

/// The set of listeners attached to one store
pub struct Subscribers {
    entries: Arc<Mutex<Vec<Entry>>>,
    next_id: AtomicU64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a callback, returning its disposer
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Entry {
                id,
                callback: Arc::new(callback),
            });
        Subscription {
            id,
            entries: Arc::clone(&self.entries),
        }
    }

    /// Invoke every currently registered callback once, in registration
    /// order. Callbacks run outside the list lock so they may subscribe or
    /// unsubscribe reentrantly.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live registrations
    pub fn count(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for Subscribers {
    fn default() -> Self {
        Self::new()
    }
}

/// Disposer for one registration
///
/// Dropping a `Subscription` does NOT unsubscribe; disposal is explicit,
/// and calling [`Subscription::unsubscribe`] more than once is a no-op.
pub struct Subscription {
    id: u64,
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl Subscription {
    /// Remove this registration from the store's listener set
    pub fn unsubscribe(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|entry| entry.id != self.id);
    }
}
