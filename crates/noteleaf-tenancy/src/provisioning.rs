//! Tenant and user provisioning.
//!
//! Tenant creation is the only operation that runs outside a resolved
//! tenant context: it creates the tenant and its first admin in one
//! step. Member registration runs under a resolved tenant.

use noteleaf_auth::config::AuthConfig;
use noteleaf_auth::password;
use noteleaf_core::error::{NoteleafError, NoteleafResult};
use noteleaf_core::models::tenant::{CreateTenant, Tenant};
use noteleaf_core::models::user::{CreateUser, Role, User};
use noteleaf_core::repository::{TenantRepository, UserRepository};
use tracing::info;

use crate::quota;

/// Input for tenant creation.
#[derive(Debug, Clone)]
pub struct CreateTenantInput {
    pub name: String,
    pub slug: String,
    pub admin_email: String,
    pub admin_password: String,
}

/// A freshly created tenant with its first admin account.
#[derive(Debug, Clone)]
pub struct ProvisionedTenant {
    pub tenant: Tenant,
    pub admin: User,
}

/// Provisioning service, generic over the tenant and user repositories.
pub struct ProvisioningService<T: TenantRepository, U: UserRepository> {
    tenants: T,
    users: U,
    config: AuthConfig,
}

impl<T: TenantRepository, U: UserRepository> ProvisioningService<T, U> {
    pub fn new(tenants: T, users: U, config: AuthConfig) -> Self {
        Self {
            tenants,
            users,
            config,
        }
    }

    /// Create a tenant on the free plan together with its first admin.
    ///
    /// The slug is globally unique and immutable afterwards; a
    /// duplicate yields `AlreadyExists`. The admin password is hashed
    /// before anything is stored.
    pub async fn create_tenant(&self, input: CreateTenantInput) -> NoteleafResult<ProvisionedTenant> {
        require_non_empty("name", &input.name)?;
        require_non_empty("slug", &input.slug)?;
        require_non_empty("admin_email", &input.admin_email)?;
        self.check_password_policy(&input.admin_password)?;

        match self.tenants.get_by_slug(input.slug.trim()).await {
            Ok(_) => {
                return Err(NoteleafError::AlreadyExists {
                    entity: "tenant".into(),
                });
            }
            Err(NoteleafError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let tenant = self
            .tenants
            .create(CreateTenant {
                name: input.name.trim().to_string(),
                slug: input.slug.trim().to_string(),
            })
            .await?;

        let password_hash =
            password::hash_password(&input.admin_password, self.config.pepper.as_deref())
                .map_err(NoteleafError::from)?;

        let admin = self
            .users
            .create(CreateUser {
                tenant_id: tenant.id,
                email: input.admin_email.trim().to_string(),
                password_hash,
                role: Role::Admin,
            })
            .await?;

        info!(
            tenant_id = %tenant.id,
            slug = %tenant.slug,
            "Tenant provisioned with initial admin"
        );

        Ok(ProvisionedTenant { tenant, admin })
    }

    /// Register a member account under a resolved tenant.
    ///
    /// `(tenant, email)` must be unique; the tenant's user quota
    /// applies on the free plan.
    pub async fn register_user(
        &self,
        tenant: &Tenant,
        email: &str,
        plaintext_password: &str,
    ) -> NoteleafResult<User> {
        require_non_empty("email", email)?;
        self.check_password_policy(plaintext_password)?;

        match self.users.get_by_email(tenant.id, email.trim()).await {
            Ok(_) => {
                return Err(NoteleafError::AlreadyExists {
                    entity: "user".into(),
                });
            }
            Err(NoteleafError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let current = self.users.count_for_tenant(tenant.id).await?;
        quota::ensure_user_capacity(tenant, current)?;

        let password_hash =
            password::hash_password(plaintext_password, self.config.pepper.as_deref())
                .map_err(NoteleafError::from)?;

        let user = self
            .users
            .create(CreateUser {
                tenant_id: tenant.id,
                email: email.trim().to_string(),
                password_hash,
                role: Role::Member,
            })
            .await?;

        info!(tenant_id = %tenant.id, user_id = %user.id, "User registered");

        Ok(user)
    }

    fn check_password_policy(&self, password: &str) -> NoteleafResult<()> {
        if password.chars().count() < self.config.min_password_length {
            return Err(NoteleafError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> NoteleafResult<()> {
    if value.trim().is_empty() {
        return Err(NoteleafError::Validation {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}
