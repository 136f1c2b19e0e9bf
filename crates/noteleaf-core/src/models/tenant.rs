//! Tenant domain model.
//!
//! A tenant is the root scope: every user and note holds a reference to
//! exactly one tenant and no entity is ever shared across tenants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel quota value meaning "no limit".
pub const UNLIMITED: i64 = -1;

/// Billing plan of a tenant. Upgrading to `Pro` lifts all quotas;
/// there is no downgrade path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
        }
    }
}

/// Per-tenant resource caps. [`UNLIMITED`] (`-1`) disables a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSettings {
    pub max_notes: i64,
    pub max_users: i64,
}

impl Default for TenantSettings {
    fn default() -> Self {
        // Free-plan defaults.
        Self {
            max_notes: 3,
            max_users: 5,
        }
    }
}

impl TenantSettings {
    /// Settings applied when a tenant upgrades to the pro plan.
    pub fn unlimited() -> Self {
        Self {
            max_notes: UNLIMITED,
            max_users: UNLIMITED,
        }
    }
}

/// An isolated organization-scoped partition of all data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// URL-safe globally unique identifier (e.g., `acme`). Immutable
    /// after creation.
    pub slug: String,
    pub plan: Plan,
    pub settings: TenantSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new tenant. New tenants always start on
/// the free plan with default quotas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub slug: String,
}
