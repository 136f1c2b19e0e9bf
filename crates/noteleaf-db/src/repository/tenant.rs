//! SurrealDB implementation of [`TenantRepository`].

use chrono::{DateTime, Utc};
use noteleaf_core::error::NoteleafResult;
use noteleaf_core::models::tenant::{CreateTenant, Plan, Tenant, TenantSettings, UNLIMITED};
use noteleaf_core::repository::TenantRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// Nested quota settings object as stored on the tenant record.
#[derive(Debug, SurrealValue)]
struct SettingsRow {
    max_notes: i64,
    max_users: i64,
}

impl From<SettingsRow> for TenantSettings {
    fn from(row: SettingsRow) -> Self {
        TenantSettings {
            max_notes: row.max_notes,
            max_users: row.max_users,
        }
    }
}

fn parse_plan(s: &str) -> Result<Plan, DbError> {
    match s {
        "free" => Ok(Plan::Free),
        "pro" => Ok(Plan::Pro),
        other => Err(DbError::Decode(format!("unknown plan: {other}"))),
    }
}

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct TenantRow {
    name: String,
    slug: String,
    plan: String,
    settings: SettingsRow,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TenantRow {
    fn into_tenant(self, id: Uuid) -> Result<Tenant, DbError> {
        Ok(Tenant {
            id,
            name: self.name,
            slug: self.slug,
            plan: parse_plan(&self.plan)?,
            settings: self.settings.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct TenantRowWithId {
    record_id: String,
    name: String,
    slug: String,
    plan: String,
    settings: SettingsRow,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TenantRowWithId {
    fn try_into_tenant(self) -> Result<Tenant, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        Ok(Tenant {
            id,
            name: self.name,
            slug: self.slug,
            plan: parse_plan(&self.plan)?,
            settings: self.settings.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Tenant repository.
#[derive(Clone)]
pub struct SurrealTenantRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealTenantRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> TenantRepository for SurrealTenantRepository<C> {
    async fn create(&self, input: CreateTenant) -> NoteleafResult<Tenant> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let defaults = TenantSettings::default();

        let result = self
            .db
            .query(
                "CREATE type::record('tenant', $id) SET \
                 name = $name, slug = $slug, \
                 plan = 'free', \
                 settings = { max_notes: $max_notes, \
                 max_users: $max_users }",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", input.name))
            .bind(("slug", input.slug))
            .bind(("max_notes", defaults.max_notes))
            .bind(("max_users", defaults.max_users))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<TenantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "tenant".into(),
            id: id_str,
        })?;

        Ok(row.into_tenant(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> NoteleafResult<Tenant> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('tenant', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<TenantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "tenant".into(),
            id: id_str,
        })?;

        Ok(row.into_tenant(id)?)
    }

    async fn get_by_slug(&self, slug: &str) -> NoteleafResult<Tenant> {
        let slug_owned = slug.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM tenant \
                 WHERE slug = $slug",
            )
            .bind(("slug", slug_owned))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<TenantRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "tenant".into(),
            id: format!("slug={slug}"),
        })?;

        Ok(row.try_into_tenant()?)
    }

    async fn upgrade_plan(&self, id: Uuid) -> NoteleafResult<Tenant> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('tenant', $id) SET \
                 plan = 'pro', \
                 settings.max_notes = $unlimited, \
                 settings.max_users = $unlimited, \
                 updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("unlimited", UNLIMITED))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<TenantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "tenant".into(),
            id: id_str,
        })?;

        Ok(row.into_tenant(id)?)
    }
}
