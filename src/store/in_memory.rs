//! InMemoryTimerStore - HashMap-backed timer store for development and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::{StoreError, TimerStore};
use crate::timer::TimerRecord;

/// In-memory timer store backed by a HashMap.
///
/// Keys are timer ids, assigned from an atomic counter starting at 1.
/// Clone-friendly via Arc — clones share the same collection.
#[derive(Clone)]
pub struct InMemoryTimerStore {
    timers: Arc<RwLock<HashMap<u64, TimerRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryTimerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTimerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            timers: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl TimerStore for InMemoryTimerStore {
    fn list(&self) -> Result<Vec<TimerRecord>, StoreError> {
        let timers = self
            .timers
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(timers.values().cloned().collect())
    }

    fn get(&self, id: u64) -> Result<TimerRecord, StoreError> {
        let timers = self
            .timers
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        timers.get(&id).cloned().ok_or(StoreError::NotFound { id })
    }

    fn create(&self, mut record: TimerRecord) -> Result<TimerRecord, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        record.id = Some(id);

        let mut timers = self
            .timers
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;
        timers.insert(id, record.clone());
        Ok(record)
    }

    fn update(&self, record: TimerRecord) -> Result<TimerRecord, StoreError> {
        // Assigned ids start at 1, so a record without one can never match.
        let id = record.id.unwrap_or(0);

        let mut timers = self
            .timers
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;
        if !timers.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        timers.insert(id, record.clone());
        Ok(record)
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut timers = self
            .timers
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;
        timers
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    fn reset(&self) -> Result<(), StoreError> {
        let mut timers = self
            .timers
            .write()
            .map_err(|_| StoreError::LockPoisoned("reset"))?;
        timers.clear();
        self.next_id.store(1, Ordering::Relaxed);
        Ok(())
    }
}
