//! Per-category memory of the last correct item served.
//!
//! Backs the "no immediate repetition" rule: the generator avoids picking the
//! item it picked last time for the same category. Entries live as long as the
//! process and are never persisted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Store mapping a category to the last correct lexical item served for it.
pub trait RepetitionMemory: Send + Sync {
    /// Last correct item served for the category, if any.
    fn get_last(&self, category_id: i64) -> Option<i64>;

    /// Overwrite the last correct item for the category.
    fn set_last(&self, category_id: i64, lexical_item_id: i64);

    /// Read the last item, let `choose` pick the next one and store it.
    ///
    /// Implementations that can serialize access should override this so the
    /// read and the write happen under one lock.
    fn select_next(&self, category_id: i64, choose: &mut dyn FnMut(Option<i64>) -> i64) -> i64 {
        let next = choose(self.get_last(category_id));
        self.set_last(category_id, next);
        next
    }
}

/// Process-local memory guarded by a single mutex.
#[derive(Debug, Default)]
pub struct InMemoryRepetitionMemory {
    last_items: Mutex<HashMap<i64, i64>>,
}

impl InMemoryRepetitionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories with a remembered item.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Forget every category.
    pub fn clear(&self) {
        self.entries().clear();
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn entries(&self) -> MutexGuard<'_, HashMap<i64, i64>> {
        self.last_items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RepetitionMemory for InMemoryRepetitionMemory {
    fn get_last(&self, category_id: i64) -> Option<i64> {
        self.entries().get(&category_id).copied()
    }

    fn set_last(&self, category_id: i64, lexical_item_id: i64) {
        self.entries().insert(category_id, lexical_item_id);
    }

    fn select_next(&self, category_id: i64, choose: &mut dyn FnMut(Option<i64>) -> i64) -> i64 {
        let mut entries = self.entries();
        let next = choose(entries.get(&category_id).copied());
        entries.insert(category_id, next);
        next
    }
}
