//! Authentication service — login and identity binding.
//!
//! Generic over the user repository so that the auth layer has no
//! dependency on the database crate.

use noteleaf_core::error::{NoteleafError, NoteleafResult};
use noteleaf_core::models::tenant::Tenant;
use noteleaf_core::models::user::User;
use noteleaf_core::repository::UserRepository;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed JWT access token binding the user and tenant.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    /// The authenticated user.
    pub user: User,
}

/// Authentication service.
pub struct AuthService<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Authenticate a user of the resolved tenant with email + password
    /// and issue an access token.
    ///
    /// An unknown email and a wrong password both produce
    /// [`AuthError::InvalidCredentials`]; the caller cannot tell which
    /// occurred.
    pub async fn login(
        &self,
        tenant: &Tenant,
        email: &str,
        plaintext_password: &str,
    ) -> NoteleafResult<LoginOutput> {
        let user = match self.users.get_by_email(tenant.id, email).await {
            Ok(u) => u,
            Err(NoteleafError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        let valid = password::verify_password(
            plaintext_password,
            &user.password_hash,
            self.config.pepper.as_deref(),
        )?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = token::issue_access_token(user.id, tenant.id, &self.config)?;

        Ok(LoginOutput {
            access_token,
            expires_in: self.config.access_token_lifetime_secs,
            user,
        })
    }

    /// Bind a bearer token to the resolved tenant and load the acting
    /// user.
    ///
    /// The tenant embedded in the token MUST equal the resolved tenant;
    /// a token issued under another tenant is rejected with
    /// [`AuthError::CrossTenant`] before any user lookup happens. The
    /// user is then loaded scoped to the resolved tenant, which also
    /// guards against tokens that outlived their account.
    pub async fn authenticate(&self, tenant: &Tenant, bearer_token: &str) -> NoteleafResult<User> {
        let claims = token::decode_access_token(bearer_token, &self.config)?;

        if claims.tenant_id != tenant.id.to_string() {
            return Err(AuthError::CrossTenant.into());
        }

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|e| AuthError::TokenInvalid(format!("bad subject: {e}")))?;

        let user = match self.users.get_by_id(tenant.id, user_id).await {
            Ok(u) => u,
            Err(NoteleafError::NotFound { .. }) => {
                return Err(AuthError::UserNotFound.into());
            }
            Err(e) => return Err(e),
        };

        // The scoped lookup above already filtered by tenant; this
        // re-check guards against a repository that forgot the filter.
        if user.tenant_id != tenant.id {
            return Err(AuthError::CrossTenant.into());
        }

        Ok(user)
    }
}
