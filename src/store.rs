use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::models::shift::Shift;

struct Batch {
    shifts: Vec<Shift>,
    fetched_at: DateTime<Utc>,
}

/// Process-wide holder of the most recently fetched batch. Single writer,
/// many readers; content is replaced wholesale, never merged, and there is
/// no deletion API.
#[derive(Default)]
pub struct ShiftStore {
    inner: RwLock<Option<Batch>>,
}

impl ShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held sequence entirely.
    pub fn set_shifts(&self, shifts: Vec<Shift>) {
        *self.inner.write() = Some(Batch {
            shifts,
            fetched_at: Utc::now(),
        });
    }

    /// First shift whose id matches. Linear scan; batches are one screen's
    /// worth of nearby shifts.
    pub fn get_shift(&self, id: &str) -> Option<Shift> {
        self.inner
            .read()
            .as_ref()
            .and_then(|batch| batch.shifts.iter().find(|shift| shift.id == id).cloned())
    }

    /// Snapshot of the current batch, `None` until the first successful
    /// fetch.
    pub fn shifts(&self) -> Option<Vec<Shift>> {
        self.inner.read().as_ref().map(|batch| batch.shifts.clone())
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().as_ref().map(|batch| batch.fetched_at)
    }
}
