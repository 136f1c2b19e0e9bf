//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Tenant-scoped operations take a
//! `tenant_id` parameter so the store-side filter always encodes data
//! isolation; note mutations additionally take the owning `user_id`.

use uuid::Uuid;

use crate::error::NoteleafResult;
use crate::models::{
    note::{CreateNote, Note, UpdateNote},
    tenant::{CreateTenant, Tenant},
    user::{CreateUser, User},
};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

// ---------------------------------------------------------------------------
// Tenant (global scope)
// ---------------------------------------------------------------------------

pub trait TenantRepository: Send + Sync {
    /// Create a tenant on the free plan with default quotas.
    fn create(&self, input: CreateTenant) -> impl Future<Output = NoteleafResult<Tenant>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = NoteleafResult<Tenant>> + Send;
    /// Slug lookup — slugs are globally unique, so zero or one match.
    fn get_by_slug(&self, slug: &str) -> impl Future<Output = NoteleafResult<Tenant>> + Send;
    /// Switch the tenant to the pro plan and lift all quotas.
    /// Irreversible: no downgrade operation exists.
    fn upgrade_plan(&self, id: Uuid) -> impl Future<Output = NoteleafResult<Tenant>> + Send;
}

// ---------------------------------------------------------------------------
// Tenant-scoped repositories
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = NoteleafResult<User>> + Send;
    fn get_by_id(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = NoteleafResult<User>> + Send;
    fn get_by_email(
        &self,
        tenant_id: Uuid,
        email: &str,
    ) -> impl Future<Output = NoteleafResult<User>> + Send;
    fn count_for_tenant(&self, tenant_id: Uuid)
    -> impl Future<Output = NoteleafResult<u64>> + Send;
}

pub trait NoteRepository: Send + Sync {
    fn create(&self, input: CreateNote) -> impl Future<Output = NoteleafResult<Note>> + Send;
    fn get(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = NoteleafResult<Note>> + Send;
    /// Notes of a tenant in reverse-creation order.
    fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = NoteleafResult<PaginatedResult<Note>>> + Send;
    /// Owner-scoped: a tenant or owner mismatch is reported as NotFound,
    /// indistinguishable from an absent record.
    fn update(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        id: Uuid,
        input: UpdateNote,
    ) -> impl Future<Output = NoteleafResult<Note>> + Send;
    /// Owner-scoped, same NotFound contract as `update`.
    fn delete(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = NoteleafResult<()>> + Send;
    fn count_for_tenant(&self, tenant_id: Uuid)
    -> impl Future<Output = NoteleafResult<u64>> + Send;
}
