use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;
use crate::wallet::WalletId;

/// The two mutation kinds a wallet accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl OperationKind {
    /// Parse the wire representation. Surrounding whitespace is ignored;
    /// an empty value is reported separately from an unrecognized one.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        match s.trim() {
            "" => Err(TypeError::OperationTypeNotSpecified),
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAW" => Ok(Self::Withdraw),
            other => Err(TypeError::UnknownOperationType(other.to_string())),
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw mutation request as it arrives on the wire, before validation.
///
/// Field names follow the JSON contract of the service
/// (`walletId`, `operationType`, `amount`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDraft {
    pub wallet_id: String,
    pub operation_type: String,
    pub amount: i64,
}

/// A validated, normalized mutation request.
///
/// Construction goes through the operation validator, so `amount > 0`
/// holds for every value of this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationRequest {
    pub wallet: WalletId,
    pub kind: OperationKind,
    pub amount: i64,
}

impl OperationRequest {
    /// The signed balance delta this request asks for.
    pub fn signed_delta(&self) -> i64 {
        match self.kind {
            OperationKind::Deposit => self.amount,
            OperationKind::Withdraw => -self.amount,
        }
    }
}

/// Journal entry for an applied mutation, recorded atomically with the
/// balance update that it describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub id: Uuid,
    pub wallet: WalletId,
    pub kind: OperationKind,
    pub amount: i64,
}

impl OperationRecord {
    pub fn new(wallet: WalletId, kind: OperationKind, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet,
            kind,
            amount,
        }
    }
}
