use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::ValidationError;
use crate::models::snapshot::LedgerSnapshot;
use crate::models::trade::Trade;
use crate::TradeLedger;

/// Cloneable handle to one ledger that can be shared between threads,
/// e.g. request handlers serving several browser tabs.
///
/// Each call holds the lock for the whole validate, update, append and
/// persist sequence, so two trades can never interleave.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<TradeLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: TradeLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn reset(&self) -> LedgerSnapshot {
        self.lock().reset()
    }

    pub fn record(&self, trade: Trade) -> Result<LedgerSnapshot, ValidationError> {
        self.lock().record(trade)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.lock().snapshot()
    }

    /// Run a read-only closure against the ledger under the lock.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&TradeLedger) -> T) -> T {
        f(&self.lock())
    }

    // Poisoning is ignored: record never panics with a half-applied trade.
    fn lock(&self) -> MutexGuard<'_, TradeLedger> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
