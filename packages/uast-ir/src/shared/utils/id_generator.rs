//! Node ID generation
//!
//! IDs are decimal strings of a counter starting at 1. The counter is an
//! atomic so conversion tasks running on different threads never receive
//! the same value.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues unique, increasing node IDs
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    counter: AtomicU64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Next ID ("1", "2", ...)
    pub fn next_id(&self) -> String {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        id.to_string()
    }

    /// Number of IDs handed out so far
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}
