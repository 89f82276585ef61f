use walletd_types::{OperationDraft, OperationKind, OperationRequest, TypeError, WalletId};

/// Validation failures for incoming operation requests.
///
/// Always the client's fault; these are never retried and map to a 400 at
/// the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid wallet id: {0}")]
    InvalidWalletId(String),

    #[error("operation type not specified")]
    OperationTypeNotSpecified,

    #[error("invalid operation type: {0}")]
    InvalidOperationType(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
}

/// Check the shape of a raw operation request and normalize it.
///
/// No side effects; the returned `OperationRequest` carries the invariant
/// `amount > 0`.
pub fn validate(draft: &OperationDraft) -> Result<OperationRequest, ValidationError> {
    let kind = OperationKind::parse(&draft.operation_type).map_err(|err| match err {
        TypeError::OperationTypeNotSpecified => ValidationError::OperationTypeNotSpecified,
        _ => ValidationError::InvalidOperationType(draft.operation_type.trim().to_string()),
    })?;

    if draft.amount <= 0 {
        return Err(ValidationError::InvalidAmount(draft.amount));
    }

    let wallet = WalletId::parse(&draft.wallet_id)
        .map_err(|_| ValidationError::InvalidWalletId(draft.wallet_id.clone()))?;

    Ok(OperationRequest {
        wallet,
        kind,
        amount: draft.amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(wallet_id: &str, operation_type: &str, amount: i64) -> OperationDraft {
        OperationDraft {
            wallet_id: wallet_id.into(),
            operation_type: operation_type.into(),
            amount,
        }
    }

    const WALLET: &str = "11111111-1111-1111-1111-111111111111";

    #[test]
    fn valid_deposit_normalizes() {
        let request = validate(&draft(WALLET, " DEPOSIT ", 10)).unwrap();
        assert_eq!(request.kind, OperationKind::Deposit);
        assert_eq!(request.amount, 10);
        assert_eq!(request.wallet.to_string(), WALLET);
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert_eq!(
            validate(&draft(WALLET, "DEPOSIT", 0)).unwrap_err(),
            ValidationError::InvalidAmount(0)
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert_eq!(
            validate(&draft(WALLET, "WITHDRAW", -5)).unwrap_err(),
            ValidationError::InvalidAmount(-5)
        );
    }

    #[test]
    fn missing_type_is_rejected() {
        assert_eq!(
            validate(&draft(WALLET, "", 1)).unwrap_err(),
            ValidationError::OperationTypeNotSpecified
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            validate(&draft(WALLET, "TRANSFER", 1)).unwrap_err(),
            ValidationError::InvalidOperationType("TRANSFER".into())
        );
    }

    #[test]
    fn malformed_wallet_id_is_rejected() {
        assert_eq!(
            validate(&draft("oops", "DEPOSIT", 1)).unwrap_err(),
            ValidationError::InvalidWalletId("oops".into())
        );
    }

    #[test]
    fn nil_wallet_id_is_rejected() {
        let nil = "00000000-0000-0000-0000-000000000000";
        assert_eq!(
            validate(&draft(nil, "DEPOSIT", 1)).unwrap_err(),
            ValidationError::InvalidWalletId(nil.into())
        );
    }
}
