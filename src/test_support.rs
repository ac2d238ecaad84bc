// ============================================================================
// Test Support
// Serializes tests that touch the process-wide configuration store
// ============================================================================

use crate::domain::config::reset;
use parking_lot::{const_mutex, Mutex, MutexGuard};

static CONFIG_LOCK: Mutex<()> = const_mutex(());

/// Holds the store lock for one test, starting and ending on defaults.
pub(crate) struct ConfigGuard {
    _lock: MutexGuard<'static, ()>,
}

impl ConfigGuard {
    pub(crate) fn acquire() -> Self {
        let lock = CONFIG_LOCK.lock();
        reset();
        Self { _lock: lock }
    }
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        reset();
    }
}
