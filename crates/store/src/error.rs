//! Store error model.

use samplereg_core::DomainError;
use thiserror::Error;

/// Persistence-layer error.
///
/// Domain failures (missing owner, uniqueness conflicts, invalid input)
/// pass through as `Domain` so the API layer can map them to 4xx responses;
/// everything else is an infrastructure failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
