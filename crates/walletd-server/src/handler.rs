use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;
use serde_json::json;

use walletd_ledger::{validation, ValidationError};
use walletd_types::{OperationDraft, OperationRecord, WalletId};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for applied operations and balance reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    pub wallet_id: WalletId,
    pub balance: i64,
    pub version: u64,
}

/// `POST /api/v1/wallet` — apply a deposit or withdrawal.
pub async fn submit_operation(
    State(state): State<AppState>,
    Json(draft): Json<OperationDraft>,
) -> Result<Json<WalletResponse>, ApiError> {
    let request = validation::validate(&draft)?;

    tracing::info!(
        wallet = %request.wallet,
        kind = %request.kind,
        amount = request.amount,
        "processing operation"
    );

    let applied = state.coordinator.execute(&request)?;
    Ok(Json(WalletResponse {
        wallet_id: request.wallet,
        balance: applied.balance,
        version: applied.version,
    }))
}

/// `GET /api/v1/wallets/:id` — current balance.
pub async fn get_balance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WalletResponse>, ApiError> {
    let wallet = parse_wallet_id(&id)?;
    let snapshot = state.coordinator.balance(wallet)?;
    Ok(Json(WalletResponse {
        wallet_id: snapshot.id,
        balance: snapshot.balance,
        version: snapshot.version,
    }))
}

/// `GET /api/v1/wallets/:id/operations` — journal of applied operations.
pub async fn get_operations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<OperationRecord>>, ApiError> {
    let wallet = parse_wallet_id(&id)?;
    Ok(Json(state.coordinator.history(wallet)?))
}

/// `GET /api/v1/health`.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn parse_wallet_id(raw: &str) -> Result<WalletId, ApiError> {
    WalletId::parse(raw)
        .map_err(|_| ApiError::Validation(ValidationError::InvalidWalletId(raw.to_string())))
}
