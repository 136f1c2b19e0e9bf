//! Immutable request context.
//!
//! The resolved tenant and authenticated user are carried as an
//! explicit value threaded through call parameters — never attached to
//! ambient or request-global mutable state.

use crate::error::{NoteleafError, NoteleafResult};
use crate::models::tenant::Tenant;
use crate::models::user::User;

/// The scoping context for one request: the tenant resolved from the
/// request's tenant identifier and the user authenticated against it.
///
/// Construction enforces that the user belongs to the tenant, so any
/// code holding a `RequestContext` can rely on that binding.
#[derive(Debug, Clone)]
pub struct RequestContext {
    tenant: Tenant,
    user: User,
}

impl RequestContext {
    /// Bind an authenticated user to a resolved tenant.
    ///
    /// Fails if the user does not belong to the tenant. The auth layer
    /// already rejects cross-tenant tokens before loading the user, so
    /// hitting this error indicates a bug in the calling glue.
    pub fn new(tenant: Tenant, user: User) -> NoteleafResult<Self> {
        if user.tenant_id != tenant.id {
            return Err(NoteleafError::AuthenticationFailed {
                reason: "user does not belong to the resolved tenant".into(),
            });
        }
        Ok(Self { tenant, user })
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tenant::{Plan, TenantSettings};
    use crate::models::user::Role;
    use chrono::Utc;
    use uuid::Uuid;

    fn tenant() -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            name: "Acme".into(),
            slug: "acme".into(),
            plan: Plan::Free,
            settings: TenantSettings::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn user_in(tenant_id: Uuid) -> User {
        User {
            id: Uuid::new_v4(),
            tenant_id,
            email: "bob@acme.test".into(),
            password_hash: "$argon2id$stub".into(),
            role: Role::Member,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn binds_user_to_matching_tenant() {
        let t = tenant();
        let u = user_in(t.id);
        let ctx = RequestContext::new(t.clone(), u).unwrap();
        assert_eq!(ctx.tenant().id, t.id);
    }

    #[test]
    fn rejects_user_from_other_tenant() {
        let t = tenant();
        let u = user_in(Uuid::new_v4());
        let err = RequestContext::new(t, u).unwrap_err();
        assert!(matches!(err, NoteleafError::AuthenticationFailed { .. }));
    }
}
