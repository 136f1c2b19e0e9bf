//! Note domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum content length in characters.
pub const MAX_CONTENT_LEN: usize = 10_000;

/// A note owned by a single user within a single tenant.
///
/// Reads are tenant-scoped; updates and deletes are additionally
/// owner-scoped — only `user_id` may mutate the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// Owning user. Only this user may update or delete the note.
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a note. Tenant and owner come from the
/// request context, never from client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_public: bool,
}

/// Fields that can be updated on an existing note.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_public: Option<bool>,
}
