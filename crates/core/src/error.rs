//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Infrastructure
/// concerns (store connectivity, geocoding outages) enter only through the
/// variants that callers are expected to act on: `StoreUnavailable` after
/// bounded retries, never transient blips.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Authorization denied. The reason is always surfaced to the caller.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A booking overlaps an existing one. Retryable with a different interval.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A requested interval was malformed (end <= start, or retroactive
    /// without the administrative override). Non-retryable.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// A requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The backing store stayed unavailable through bounded retries.
    /// Distinguishable from a true scheduling `Conflict`.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized(reason.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_interval(msg: impl Into<String>) -> Self {
        Self::InvalidInterval(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether a caller may reasonably retry the same request unchanged.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
