//! Cache-aside access to preference records.
//!
//! Every key gets a slot holding a `watch` channel. Reading a slot never
//! waits: it yields the defaults until the store has been consulted and the
//! stored record afterwards. `resolve` and `revalidate` consult the store and
//! publish the result to every subscriber of that key. Reads are ticketed per
//! slot, so a read that finishes late never replaces a record published by a
//! read that started after it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::watch;

use super::{PreferenceRecord, PreferenceStore};
use crate::context::ContextKey;
use crate::error::Result;

struct Slot {
    tx: watch::Sender<PreferenceRecord>,
    resolved: AtomicBool,
    /// Last ticket handed to a store read
    issued: AtomicU64,
    /// Ticket of the read whose record is currently published
    published: AtomicU64,
}

impl Slot {
    fn new(initial: PreferenceRecord) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            resolved: AtomicBool::new(false),
            issued: AtomicU64::new(0),
            published: AtomicU64::new(0),
        }
    }

    fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Publish `record` read under `ticket` unless a later read already
    /// published. Returns the record subscribers now see.
    fn publish(&self, ticket: u64, record: PreferenceRecord) -> PreferenceRecord {
        let mut stale = false;
        // The check runs under the channel's write lock.
        self.tx.send_if_modified(|current| {
            if ticket <= self.published.load(Ordering::Acquire) {
                stale = true;
                return false;
            }
            self.published.store(ticket, Ordering::Release);
            *current = record;
            true
        });
        if stale {
            tracing::debug!(ticket, "dropping stale preference read");
        } else {
            self.resolved.store(true, Ordering::Release);
        }
        self.tx.borrow().clone()
    }
}

pub struct PreferenceAccessor {
    store: Arc<dyn PreferenceStore>,
    defaults: PreferenceRecord,
    slots: DashMap<ContextKey, Arc<Slot>>,
}

impl PreferenceAccessor {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_defaults(store, PreferenceRecord::default())
    }

    pub fn with_defaults(store: Arc<dyn PreferenceStore>, defaults: PreferenceRecord) -> Self {
        Self {
            store,
            defaults,
            slots: DashMap::new(),
        }
    }

    pub fn defaults(&self) -> &PreferenceRecord {
        &self.defaults
    }

    // The map guard is released before returning so callers can await freely.
    fn slot(&self, key: &ContextKey) -> Arc<Slot> {
        if let Some(slot) = self.slots.get(key) {
            return Arc::clone(slot.value());
        }
        let entry = self
            .slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Slot::new(self.defaults.clone())));
        Arc::clone(entry.value())
    }

    /// The value to render right now: defaults until resolved.
    pub fn current(&self, key: &ContextKey) -> PreferenceRecord {
        self.slot(key).tx.borrow().clone()
    }

    /// Receiver that observes every record published for `key`.
    pub fn subscribe(&self, key: &ContextKey) -> watch::Receiver<PreferenceRecord> {
        self.slot(key).tx.subscribe()
    }

    pub fn is_resolved(&self, key: &ContextKey) -> bool {
        self.slot(key).resolved.load(Ordering::Acquire)
    }

    /// Resolve the record for `key`, reading the store only on first use.
    ///
    /// Never fails: a key with no stored record resolves to the defaults.
    pub async fn resolve(&self, key: &ContextKey) -> PreferenceRecord {
        if self.is_resolved(key) {
            return self.current(key);
        }
        self.refresh(key).await
    }

    /// Re-read the store for `key` and publish the result.
    pub async fn revalidate(&self, key: &ContextKey) -> PreferenceRecord {
        self.refresh(key).await
    }

    /// Persist `record` for `key`, then revalidate so subscribers see it.
    pub async fn save(
        &self,
        key: &ContextKey,
        record: &PreferenceRecord,
    ) -> Result<PreferenceRecord> {
        self.store.save(key, record).await?;
        Ok(self.revalidate(key).await)
    }

    async fn refresh(&self, key: &ContextKey) -> PreferenceRecord {
        let slot = self.slot(key);
        let ticket = slot.ticket();

        let record = match self.store.load(key).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!(%key, "no stored preferences, using defaults");
                self.defaults.clone()
            }
            Err(e) => {
                // Keep whatever is published; a later resolve retries.
                tracing::warn!(%key, "Failed to load preferences: {e}");
                return slot.tx.borrow().clone();
            }
        };

        slot.publish(ticket, record)
    }
}
