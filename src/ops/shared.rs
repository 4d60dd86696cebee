use std::sync::{Arc, Mutex, PoisonError};

use crate::ops::ledger::TaskLedger;

/// A ledger handle that can be cloned across threads.
///
/// The whole ledger sits behind one lock. Operations such as `complete`
/// touch two containers and must not interleave, so callers only ever get
/// the ledger as a whole, for the duration of one closure.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<TaskLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: TaskLedger) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Run `f` with exclusive access to the ledger.
    ///
    /// A lock poisoned by a panicking caller is recovered: no ledger method
    /// panics partway through a mutation.
    pub fn with<R>(&self, f: impl FnOnce(&mut TaskLedger) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of the current ledger state
    pub fn snapshot(&self) -> TaskLedger {
        self.with(|ledger| ledger.clone())
    }
}
