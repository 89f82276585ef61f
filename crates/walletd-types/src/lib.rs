//! Foundation types for walletd.
//!
//! This crate provides the identifier, operation, and snapshot types shared
//! by every other walletd crate.
//!
//! # Key Types
//!
//! - [`WalletId`] — UUID-shaped wallet identifier (the nil UUID is rejected)
//! - [`Wallet`] — committed balance snapshot with its concurrency version
//! - [`OperationKind`] — `DEPOSIT` / `WITHDRAW`
//! - [`OperationDraft`] — raw wire shape of a mutation request
//! - [`OperationRequest`] — validated, normalized mutation request
//! - [`OperationRecord`] — journal entry for an applied mutation

pub mod error;
pub mod operation;
pub mod wallet;

pub use error::TypeError;
pub use operation::{OperationDraft, OperationKind, OperationRecord, OperationRequest};
pub use wallet::{Wallet, WalletId};
