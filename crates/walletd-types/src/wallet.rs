use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Unique identifier of a wallet.
///
/// A `WalletId` wraps a UUID. The nil UUID is never a valid identifier and
/// is rejected at every construction path, so a `WalletId` held anywhere in
/// the system is known to be well formed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct WalletId(Uuid);

impl WalletId {
    /// Create a fresh random identifier for tests and demos.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from a canonical UUID string.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let uuid = Uuid::parse_str(s.trim())
            .map_err(|_| TypeError::InvalidWalletId(s.to_string()))?;
        Self::try_from(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl TryFrom<Uuid> for WalletId {
    type Error = TypeError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        if uuid.is_nil() {
            return Err(TypeError::NilWalletId);
        }
        Ok(Self(uuid))
    }
}

impl From<WalletId> for Uuid {
    fn from(id: WalletId) -> Self {
        id.0
    }
}

impl FromStr for WalletId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletId({})", self.0)
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed wallet state: balance plus its optimistic-concurrency version.
///
/// Invariants maintained by the ledger: `balance >= 0`, and `version`
/// increases by exactly 1 for every applied mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: WalletId,
    pub balance: i64,
    pub version: u64,
}
