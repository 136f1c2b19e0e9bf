//! Authentication error types.

use noteleaf_core::error::NoteleafError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email and wrong password both map here — the two cases
    /// are deliberately indistinguishable to avoid user enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    /// The token is valid but bound to a tenant other than the one
    /// resolved for this request.
    #[error("token does not belong to the resolved tenant")]
    CrossTenant,

    /// The token's subject no longer exists within the resolved tenant.
    #[error("token subject no longer exists")]
    UserNotFound,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for NoteleafError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_)
            | AuthError::CrossTenant
            | AuthError::UserNotFound => NoteleafError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => NoteleafError::Crypto(msg),
        }
    }
}
