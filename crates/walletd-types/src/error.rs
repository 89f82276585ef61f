use thiserror::Error;

/// Errors produced by type parsing and construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid wallet id: {0}")]
    InvalidWalletId(String),

    #[error("wallet id must not be the nil UUID")]
    NilWalletId,

    #[error("operation type not specified")]
    OperationTypeNotSpecified,

    #[error("unknown operation type: {0}")]
    UnknownOperationType(String),
}
