//! Versioned balance ledger for walletd.
//!
//! This crate is the heart of the service. It provides:
//! - `LedgerReader` / `LedgerWriter` trait boundaries
//! - `InMemoryLedger` implementation with atomic compare-and-apply
//! - Operation validation (shape checks before any mutation)
//! - A per-wallet operation journal, committed atomically with the balance
//!
//! Every applied mutation bumps the wallet's version by exactly 1, and the
//! balance never goes negative. Both invariants are enforced inside a single
//! indivisible `apply` step.

pub mod error;
pub mod memory;
pub mod traits;
pub mod validation;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use traits::{Applied, Ledger, LedgerReader, LedgerWriter};
pub use validation::{validate, ValidationError};
