//! Error types for the backend client and the session lifecycle.

use store::CacheError;
use thiserror::Error;

/// Failures talking to the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend is not configured (SUPABASE_URL / SUPABASE_ANON_KEY missing)")]
    NotConfigured,
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("expected at most one row, got {0}")]
    MultipleRows(usize),
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("{0} has no dashboard account")]
    NotAnAdmin(String),
}
