//! Plan-based quota checks.
//!
//! Pure functions over the tenant's plan and current resource counts.
//! The caller performs the count; counting and the subsequent insert
//! are not atomic, so the cap is best-effort under concurrency (see
//! DESIGN.md).

use noteleaf_core::error::{NoteleafError, NoteleafResult};
use noteleaf_core::models::tenant::{Plan, Tenant, UNLIMITED};

/// Whether another note may be created for this tenant.
///
/// Pro tenants and any limit of [`UNLIMITED`] always pass; free
/// tenants fail once `current_count` reaches `settings.max_notes`.
pub fn ensure_note_capacity(tenant: &Tenant, current_count: u64) -> NoteleafResult<()> {
    ensure_capacity("notes", tenant, tenant.settings.max_notes, current_count)
}

/// Whether another user may be registered for this tenant. Same rule
/// as notes, against `settings.max_users`.
pub fn ensure_user_capacity(tenant: &Tenant, current_count: u64) -> NoteleafResult<()> {
    ensure_capacity("users", tenant, tenant.settings.max_users, current_count)
}

fn ensure_capacity(
    resource: &str,
    tenant: &Tenant,
    limit: i64,
    current_count: u64,
) -> NoteleafResult<()> {
    if tenant.plan == Plan::Pro || limit == UNLIMITED {
        return Ok(());
    }
    if limit >= 0 && current_count >= limit as u64 {
        return Err(NoteleafError::QuotaExceeded {
            resource: resource.into(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use noteleaf_core::models::tenant::TenantSettings;
    use uuid::Uuid;

    fn tenant(plan: Plan, max_notes: i64) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            name: "Acme".into(),
            slug: "acme".into(),
            plan,
            settings: TenantSettings {
                max_notes,
                max_users: 5,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn free_tenant_under_cap_is_allowed() {
        let t = tenant(Plan::Free, 3);
        assert!(ensure_note_capacity(&t, 2).is_ok());
    }

    #[test]
    fn free_tenant_at_cap_is_rejected_with_upgrade_hint() {
        let t = tenant(Plan::Free, 3);
        let err = ensure_note_capacity(&t, 3).unwrap_err();
        assert!(matches!(
            err,
            NoteleafError::QuotaExceeded { limit: 3, .. }
        ));
        assert!(err.upgrade_required());
    }

    #[test]
    fn free_tenant_over_cap_is_rejected() {
        let t = tenant(Plan::Free, 3);
        assert!(ensure_note_capacity(&t, 5).is_err());
    }

    #[test]
    fn pro_tenant_is_never_capped() {
        let t = tenant(Plan::Pro, 3);
        assert!(ensure_note_capacity(&t, 1_000).is_ok());
    }

    #[test]
    fn unlimited_sentinel_disables_the_cap() {
        let t = tenant(Plan::Free, UNLIMITED);
        assert!(ensure_note_capacity(&t, 1_000).is_ok());
    }

    #[test]
    fn user_cap_applies_to_free_tenants() {
        let t = tenant(Plan::Free, 3);
        assert!(ensure_user_capacity(&t, 4).is_ok());
        let err = ensure_user_capacity(&t, 5).unwrap_err();
        assert!(matches!(err, NoteleafError::QuotaExceeded { .. }));
    }
}
