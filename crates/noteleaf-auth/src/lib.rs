//! Noteleaf Auth — password hashing/verification, JWT issuance and
//! validation, and the login/authenticate orchestration.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, LoginOutput};
pub use token::AccessTokenClaims;
