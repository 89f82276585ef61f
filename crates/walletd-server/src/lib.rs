//! HTTP API for walletd.
//!
//! Exposes the wallet service boundary: a mutating operation call
//! (`POST /api/v1/wallet`), balance and journal reads, and a health probe.
//! Outcomes from the coordinator and store are translated into response
//! codes here and nowhere else.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::WalletServer;
pub use state::AppState;
