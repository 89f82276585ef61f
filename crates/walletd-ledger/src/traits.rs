use walletd_types::{OperationRecord, Wallet, WalletId};

use crate::error::LedgerError;

/// Result of a successfully applied mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub balance: i64,
    pub version: u64,
}

/// Read boundary for committed wallet state.
///
/// Reads observe the latest committed state at call time; they never require
/// the caller to hold a wallet's exclusive section.
pub trait LedgerReader: Send + Sync {
    /// Current snapshot of a wallet, or `WalletNotFound`.
    fn get(&self, wallet: WalletId) -> Result<Wallet, LedgerError>;

    /// Journal of applied operations for a wallet, oldest first,
    /// or `WalletNotFound`.
    fn operations(&self, wallet: WalletId) -> Result<Vec<OperationRecord>, LedgerError>;

    /// All provisioned wallet identifiers.
    fn wallets(&self) -> Result<Vec<WalletId>, LedgerError>;
}

/// Write boundary for balance mutations.
pub trait LedgerWriter: Send + Sync {
    /// Atomically apply `delta` to the wallet's balance.
    ///
    /// The stored version must equal `expected_version` and the projected
    /// balance must stay non-negative; only then do the balance, the version
    /// bump, and the journal entry commit as one indivisible step. On any
    /// failure no mutation occurs.
    ///
    /// An unknown wallet is treated as `(balance 0, version 0)` and is
    /// provisioned only when the apply succeeds, so failed withdrawals never
    /// leave an empty wallet behind.
    fn apply(
        &self,
        wallet: WalletId,
        delta: i64,
        expected_version: u64,
    ) -> Result<Applied, LedgerError>;
}

/// Combined store boundary used by the coordinator.
pub trait Ledger: LedgerReader + LedgerWriter {}

impl<T: LedgerReader + LedgerWriter> Ledger for T {}
