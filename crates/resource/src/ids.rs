use folio_types::ObjectId;
use std::sync::atomic::{AtomicU32, Ordering};

/// Hands out document-unique object ids, shared between the resource manager and page
/// assembly.
#[derive(Debug, Default)]
pub struct IdAllocator {
    max: AtomicU32,
}

impl IdAllocator {
    /// An allocator whose first id will be `current + 1`.
    pub fn new(current: u32) -> Self {
        Self {
            max: AtomicU32::new(current),
        }
    }

    pub fn next(&self) -> ObjectId {
        ObjectId::new(self.max.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Makes sure ids handed out later never collide with `id`.
    pub fn observe(&self, id: ObjectId) {
        self.max.fetch_max(id.get(), Ordering::SeqCst);
    }

    /// The largest id handed out or observed so far.
    pub fn current(&self) -> u32 {
        self.max.load(Ordering::SeqCst)
    }
}
