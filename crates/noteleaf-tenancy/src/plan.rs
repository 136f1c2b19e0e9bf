//! Plan upgrade — the only tenant mutation in scope.

use noteleaf_core::context::RequestContext;
use noteleaf_core::error::{NoteleafError, NoteleafResult};
use noteleaf_core::models::tenant::Tenant;
use noteleaf_core::models::user::Role;
use noteleaf_core::repository::TenantRepository;
use tracing::info;

/// Plan service, generic over the tenant repository.
pub struct PlanService<T: TenantRepository> {
    tenants: T,
}

impl<T: TenantRepository> PlanService<T> {
    pub fn new(tenants: T) -> Self {
        Self { tenants }
    }

    /// Upgrade the acting tenant to the pro plan and lift all quotas.
    ///
    /// Requires the acting user to be an admin; a member gets
    /// `Forbidden` and the plan is left untouched. The context already
    /// guarantees the user belongs to the tenant. Irreversible — no
    /// downgrade exists.
    pub async fn upgrade(&self, ctx: &RequestContext) -> NoteleafResult<Tenant> {
        if ctx.user().role != Role::Admin {
            return Err(NoteleafError::Forbidden {
                reason: "admin role required to upgrade the plan".into(),
            });
        }

        let tenant = self.tenants.upgrade_plan(ctx.tenant().id).await?;
        info!(tenant_id = %tenant.id, "Tenant upgraded to pro plan");
        Ok(tenant)
    }
}
