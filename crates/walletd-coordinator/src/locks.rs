use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use walletd_types::WalletId;

/// Lazily populated table of per-wallet exclusive sections.
///
/// A section is created on first acquisition and removed again once the
/// last holder releases it, so the table only holds entries for wallets
/// with in-flight operations. Acquisitions for distinct wallets contend
/// only on the brief table lookup, never on each other's sections.
pub struct LockTable {
    inner: Mutex<HashMap<WalletId, Arc<Mutex<()>>>>,
}

impl LockTable {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Run `f` inside the wallet's exclusive section.
    ///
    /// The section is released on every exit path; if `f` panics the poison
    /// is cleared on the next acquisition since the section guards no data
    /// of its own.
    pub fn with_section<T>(&self, wallet: WalletId, f: impl FnOnce() -> T) -> T {
        let section = {
            let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(table.entry(wallet).or_default())
        };

        let result = {
            let _guard = section.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };

        // Reclaim the entry when we are the last holder. strong_count == 2
        // means the table's entry plus our clone; the check runs under the
        // table lock, so no one can fetch the entry while we remove it.
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if Arc::strong_count(&section) == 2 {
            table.remove(&wallet);
        }

        result
    }

    /// Number of wallets with a live section.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LockTable {
    fn default() -> Self {
        Self::new()
    }
}
