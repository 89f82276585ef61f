use std::sync::Arc;

use walletd_coordinator::WalletCoordinator;
use walletd_ledger::InMemoryLedger;

/// Shared handler state. The coordinator is the only mutation path; the
/// store is never touched by handlers directly.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<WalletCoordinator>,
}

impl AppState {
    pub fn new(coordinator: Arc<WalletCoordinator>) -> Self {
        Self { coordinator }
    }

    /// State backed by a fresh in-memory ledger.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(WalletCoordinator::new(Arc::new(
            InMemoryLedger::new(),
        ))))
    }
}
