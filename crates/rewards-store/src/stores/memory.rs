//! In-memory implementation of PointStore

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use rewards_core::{DomainError, PointStore, PointTotals, StoreResult};

/// Process-local point store
///
/// Holds the last saved snapshot. Writes can be switched to fail, which lets
/// callers exercise their persistence-failure paths without a real disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<PointTotals>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `totals`
    pub fn with_totals(totals: PointTotals) -> Self {
        Self {
            snapshot: Mutex::new(Some(totals)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Last saved snapshot
    pub fn snapshot(&self) -> Option<PointTotals> {
        self.snapshot.lock().clone()
    }
}

impl PointStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<PointTotals>> {
        Ok(self.snapshot.lock().clone())
    }

    fn save(&self, totals: &PointTotals) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::store_write(self.describe(), "writes disabled"));
        }
        *self.snapshot.lock() = Some(totals.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
