//! Error types for the Noteleaf system.
//!
//! Every core operation returns one specific failure kind rather than a
//! generic error; the HTTP glue maps kinds to status codes via
//! [`NoteleafError::http_status`]. No failure is retried automatically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteleafError {
    #[error("Tenant identifier missing from request")]
    MissingTenant,

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Quota exceeded: {resource} limit of {limit} reached")]
    QuotaExceeded { resource: String, limit: i64 },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoteleafError {
    /// Whether the failure should carry an `upgradeRequired` hint so the
    /// client can offer a plan-upgrade path.
    pub fn upgrade_required(&self) -> bool {
        matches!(self, NoteleafError::QuotaExceeded { .. })
    }

    /// The HTTP status the (out-of-scope) routing glue maps this kind to.
    ///
    /// Ownership mismatches surface as `NotFound` upstream, so 404 here
    /// already covers them — `Forbidden` is reserved for role violations.
    pub fn http_status(&self) -> u16 {
        match self {
            NoteleafError::MissingTenant | NoteleafError::Validation { .. } => 400,
            NoteleafError::AuthenticationFailed { .. } => 401,
            NoteleafError::Forbidden { .. } | NoteleafError::QuotaExceeded { .. } => 403,
            NoteleafError::NotFound { .. } => 404,
            NoteleafError::AlreadyExists { .. } => 409,
            NoteleafError::Database(_)
            | NoteleafError::Crypto(_)
            | NoteleafError::Internal(_) => 500,
        }
    }
}

pub type NoteleafResult<T> = Result<T, NoteleafError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_exceeded_carries_upgrade_hint() {
        let err = NoteleafError::QuotaExceeded {
            resource: "notes".into(),
            limit: 3,
        };
        assert!(err.upgrade_required());
        assert_eq!(err.http_status(), 403);
    }

    #[test]
    fn not_found_has_no_upgrade_hint() {
        let err = NoteleafError::NotFound {
            entity: "note".into(),
            id: "abc".into(),
        };
        assert!(!err.upgrade_required());
        assert_eq!(err.http_status(), 404);
    }
}
