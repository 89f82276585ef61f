//! Concurrency coordination for walletd.
//!
//! Serializes mutating operations per wallet so that no two mutations
//! interleave their read-modify-write of balance and version, while
//! operations on different wallets proceed fully in parallel.
//!
//! - [`LockTable`] — lazily created per-wallet exclusive sections, reclaimed
//!   when the last holder releases (no pinned memory for idle wallets)
//! - [`WalletCoordinator`] — drives the read/apply cycle against the ledger
//!   under the wallet's section

pub mod coordinator;
pub mod locks;

pub use coordinator::WalletCoordinator;
pub use locks::LockTable;
