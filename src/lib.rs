//! Web service scoring psychological self-assessment submissions.
//!
//! The scoring pipeline in [`assessment`] is pure and synchronous; the HTTP
//! and CLI surfaces here only wire configuration, telemetry and the injected
//! collaborator capabilities around it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

mod cli;
mod infra;
mod routes;
mod server;

use error::AppError;

/// CLI entry point used by the `mindcheck` binary.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
