//! Tenant resolution — the first stage of every scoped request.

use noteleaf_core::error::{NoteleafError, NoteleafResult};
use noteleaf_core::models::tenant::Tenant;
use noteleaf_core::repository::TenantRepository;

/// Resolves a client-supplied tenant identifier to a tenant. Whether
/// the identifier arrives as a header or a query parameter is a
/// transport concern of the calling glue.
///
/// Pure lookup, no side effects. The resolved tenant becomes the
/// scoping context for everything downstream; no fallback tenant is
/// ever assumed.
pub struct TenantResolver<T: TenantRepository> {
    tenants: T,
}

impl<T: TenantRepository> TenantResolver<T> {
    pub fn new(tenants: T) -> Self {
        Self { tenants }
    }

    /// Resolve a raw tenant identifier to its tenant.
    ///
    /// `None`, empty, and whitespace-only identifiers are all treated
    /// as missing. An identifier that matches no slug yields
    /// `NotFound`; slugs are globally unique, so there is never more
    /// than one match.
    pub async fn resolve(&self, raw: Option<&str>) -> NoteleafResult<Tenant> {
        let slug = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(NoteleafError::MissingTenant)?;

        self.tenants.get_by_slug(slug).await
    }
}
