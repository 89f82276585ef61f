use std::collections::HashMap;
use std::sync::RwLock;

use walletd_types::{OperationKind, OperationRecord, Wallet, WalletId};

use crate::error::LedgerError;
use crate::traits::{Applied, LedgerReader, LedgerWriter};

/// In-memory ledger implementation.
///
/// Backs the service in tests and single-instance deployments; a durable
/// store would implement the same `LedgerReader` / `LedgerWriter` traits.
/// All mutation checks and commits happen under one write lock, so `apply`
/// is a single indivisible step.
pub struct InMemoryLedger {
    inner: RwLock<HashMap<WalletId, Account>>,
}

#[derive(Default)]
struct Account {
    balance: i64,
    version: u64,
    journal: Vec<OperationRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Provision a wallet with an initial balance. Test and bootstrap helper;
    /// production wallets are provisioned implicitly by the first deposit.
    pub fn provision(&self, wallet: WalletId, balance: i64) -> Result<(), LedgerError> {
        if balance < 0 {
            return Err(LedgerError::InsufficientFunds {
                balance,
                requested: 0,
            });
        }
        let mut state = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        state.entry(wallet).or_default().balance = balance;
        Ok(())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerReader for InMemoryLedger {
    fn get(&self, wallet: WalletId) -> Result<Wallet, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        state
            .get(&wallet)
            .map(|account| Wallet {
                id: wallet,
                balance: account.balance,
                version: account.version,
            })
            .ok_or(LedgerError::WalletNotFound)
    }

    fn operations(&self, wallet: WalletId) -> Result<Vec<OperationRecord>, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        state
            .get(&wallet)
            .map(|account| account.journal.clone())
            .ok_or(LedgerError::WalletNotFound)
    }

    fn wallets(&self) -> Result<Vec<WalletId>, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        let mut ids: Vec<_> = state.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}

impl LedgerWriter for InMemoryLedger {
    fn apply(
        &self,
        wallet: WalletId,
        delta: i64,
        expected_version: u64,
    ) -> Result<Applied, LedgerError> {
        let mut state = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;

        // Unknown wallets are read as (0, 0) but only materialize on commit.
        let (balance, version) = state
            .get(&wallet)
            .map(|account| (account.balance, account.version))
            .unwrap_or((0, 0));

        if version != expected_version {
            return Err(LedgerError::VersionConflict {
                expected: expected_version,
                actual: version,
            });
        }

        let new_balance = balance
            .checked_add(delta)
            .ok_or(LedgerError::BalanceOverflow)?;
        if new_balance < 0 {
            return Err(LedgerError::InsufficientFunds {
                balance,
                requested: -delta,
            });
        }

        let kind = if delta >= 0 {
            OperationKind::Deposit
        } else {
            OperationKind::Withdraw
        };

        let account = state.entry(wallet).or_default();
        account.balance = new_balance;
        account.version += 1;
        account
            .journal
            .push(OperationRecord::new(wallet, kind, delta.abs()));

        tracing::debug!(
            wallet = %wallet,
            balance = new_balance,
            version = account.version,
            "mutation applied"
        );

        Ok(Applied {
            balance: new_balance,
            version: account.version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_then_withdraw_then_overdraft() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        let applied = ledger.apply(wallet, 10, 0).unwrap();
        assert_eq!(applied, Applied { balance: 10, version: 1 });

        let applied = ledger.apply(wallet, -1, 1).unwrap();
        assert_eq!(applied, Applied { balance: 9, version: 2 });

        let err = ledger.apply(wallet, -100, 2).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFunds { balance: 9, requested: 100 });

        // Rejection must not mutate anything.
        let wallet_state = ledger.get(wallet).unwrap();
        assert_eq!(wallet_state.balance, 9);
        assert_eq!(wallet_state.version, 2);
    }

    #[test]
    fn unknown_wallet_reads_as_not_found() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.get(WalletId::random()).unwrap_err(), LedgerError::WalletNotFound);
    }

    #[test]
    fn failed_apply_does_not_provision() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        let err = ledger.apply(wallet, -5, 0).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(ledger.get(wallet).unwrap_err(), LedgerError::WalletNotFound);
    }

    #[test]
    fn successful_apply_provisions_at_version_zero() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        ledger.apply(wallet, 5, 0).unwrap();
        let state = ledger.get(wallet).unwrap();
        assert_eq!(state.balance, 5);
        assert_eq!(state.version, 1);
    }

    #[test]
    fn stale_version_is_a_conflict() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        ledger.apply(wallet, 10, 0).unwrap();
        let err = ledger.apply(wallet, 10, 0).unwrap_err();
        assert_eq!(err, LedgerError::VersionConflict { expected: 0, actual: 1 });

        // The conflicting call contributed nothing.
        assert_eq!(ledger.get(wallet).unwrap().balance, 10);
    }

    #[test]
    fn deposit_overflow_is_rejected_without_mutation() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        ledger.apply(wallet, i64::MAX, 0).unwrap();
        let err = ledger.apply(wallet, 1, 1).unwrap_err();
        assert_eq!(err, LedgerError::BalanceOverflow);
        assert_eq!(ledger.get(wallet).unwrap().version, 1);
    }

    #[test]
    fn reads_are_idempotent() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();
        ledger.apply(wallet, 3, 0).unwrap();

        let first = ledger.get(wallet).unwrap();
        let second = ledger.get(wallet).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn journal_records_every_applied_operation() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        ledger.apply(wallet, 10, 0).unwrap();
        ledger.apply(wallet, -4, 1).unwrap();
        let _ = ledger.apply(wallet, -100, 2).unwrap_err();

        let journal = ledger.operations(wallet).unwrap();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].kind, OperationKind::Deposit);
        assert_eq!(journal[0].amount, 10);
        assert_eq!(journal[1].kind, OperationKind::Withdraw);
        assert_eq!(journal[1].amount, 4);
    }

    #[test]
    fn journal_of_unknown_wallet_is_not_found() {
        let ledger = InMemoryLedger::new();
        assert_eq!(
            ledger.operations(WalletId::random()).unwrap_err(),
            LedgerError::WalletNotFound
        );
    }

    #[test]
    fn wallets_lists_provisioned_ids() {
        let ledger = InMemoryLedger::new();
        let a = WalletId::random();
        let b = WalletId::random();

        ledger.apply(a, 1, 0).unwrap();
        ledger.apply(b, 1, 0).unwrap();

        let ids = ledger.wallets().unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a) && ids.contains(&b));
    }

    #[test]
    fn provision_seeds_an_initial_balance() {
        let ledger = InMemoryLedger::new();
        let wallet = WalletId::random();

        ledger.provision(wallet, 50).unwrap();
        let state = ledger.get(wallet).unwrap();
        assert_eq!(state.balance, 50);
        assert_eq!(state.version, 0);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Final balance equals the sum of applied deltas, rejected
            /// calls contribute zero, and the balance never goes negative.
            #[test]
            fn balance_is_conserved(deltas in proptest::collection::vec(-50i64..50, 1..64)) {
                let ledger = InMemoryLedger::new();
                let wallet = WalletId::random();
                let mut applied_sum: i64 = 0;
                let mut applied_count: u64 = 0;

                for delta in deltas {
                    let version = ledger
                        .get(wallet)
                        .map(|w| w.version)
                        .unwrap_or(0);
                    match ledger.apply(wallet, delta, version) {
                        Ok(applied) => {
                            applied_sum += delta;
                            applied_count += 1;
                            prop_assert!(applied.balance >= 0);
                            prop_assert_eq!(applied.version, applied_count);
                        }
                        Err(LedgerError::InsufficientFunds { .. }) => {}
                        Err(other) => prop_assert!(false, "unexpected error: {}", other),
                    }
                }

                if applied_count > 0 {
                    let state = ledger.get(wallet).unwrap();
                    prop_assert_eq!(state.balance, applied_sum);
                    prop_assert_eq!(state.version, applied_count);
                }
            }
        }
    }
}
