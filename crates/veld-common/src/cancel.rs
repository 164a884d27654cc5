//! Cooperative cancellation.
//!
//! Long traversals poll the token between calls and abort with partial
//! results discarded. Cloning is cheap; all clones observe the same flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A poll-able cancellation flag shared between the pass driver and its host.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
