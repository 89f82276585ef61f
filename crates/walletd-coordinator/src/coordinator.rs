use std::sync::Arc;

use walletd_ledger::{Applied, Ledger, LedgerError};
use walletd_types::{OperationRecord, OperationRequest, Wallet, WalletId};

use crate::locks::LockTable;

/// Serializes mutations per wallet and drives them through the ledger.
///
/// Every mutating call acquires the wallet's exclusive section, reads the
/// committed version, and hands the expected version to `apply`. Within one
/// process this makes a stale-version `apply` impossible; a `VersionConflict`
/// can still surface when several service instances share a store, and is
/// passed through to the caller as a retryable conflict.
///
/// Balance reads bypass the sections entirely and observe the latest
/// committed state.
pub struct WalletCoordinator {
    ledger: Arc<dyn Ledger>,
    locks: LockTable,
}

impl WalletCoordinator {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self {
            ledger,
            locks: LockTable::new(),
        }
    }

    /// Apply a validated mutation. Exactly one outcome per request: the new
    /// committed state on success, a typed rejection otherwise.
    pub fn execute(&self, request: &OperationRequest) -> Result<Applied, LedgerError> {
        let result = self.locks.with_section(request.wallet, || {
            let version = match self.ledger.get(request.wallet) {
                Ok(wallet) => wallet.version,
                Err(LedgerError::WalletNotFound) => 0,
                Err(other) => return Err(other),
            };
            self.ledger
                .apply(request.wallet, request.signed_delta(), version)
        });

        if let Err(LedgerError::VersionConflict { expected, actual }) = &result {
            // Cannot happen with a single instance; another writer reached
            // the shared store outside our serialization.
            tracing::warn!(
                wallet = %request.wallet,
                expected,
                actual,
                "version conflict under exclusive section"
            );
        }

        result
    }

    /// Latest committed snapshot of a wallet.
    pub fn balance(&self, wallet: WalletId) -> Result<Wallet, LedgerError> {
        self.ledger.get(wallet)
    }

    /// Journal of applied operations for a wallet, oldest first.
    pub fn history(&self, wallet: WalletId) -> Result<Vec<OperationRecord>, LedgerError> {
        self.ledger.operations(wallet)
    }

    /// Number of wallets with an in-flight mutation. Test and metrics hook.
    pub fn active_sections(&self) -> usize {
        self.locks.len()
    }
}
