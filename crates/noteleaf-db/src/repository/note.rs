//! SurrealDB implementation of [`NoteRepository`].
//!
//! Reads filter by `tenant_id`; update and delete additionally filter
//! by `user_id`. A filter mismatch produces zero rows and is reported
//! as `NotFound` — the caller cannot tell a foreign note from an
//! absent one.

use chrono::{DateTime, Utc};
use noteleaf_core::error::NoteleafResult;
use noteleaf_core::models::note::{CreateNote, Note, UpdateNote};
use noteleaf_core::repository::{NoteRepository, PaginatedResult, Pagination};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct NoteRow {
    tenant_id: String,
    user_id: String,
    title: String,
    content: String,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self, id: Uuid) -> Result<Note, DbError> {
        let tenant_id = Uuid::parse_str(&self.tenant_id)
            .map_err(|e| DbError::Decode(format!("invalid tenant UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(Note {
            id,
            tenant_id,
            user_id,
            title: self.title,
            content: self.content,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct NoteRowWithId {
    record_id: String,
    tenant_id: String,
    user_id: String,
    title: String,
    content: String,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRowWithId {
    fn try_into_note(self) -> Result<Note, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let tenant_id = Uuid::parse_str(&self.tenant_id)
            .map_err(|e| DbError::Decode(format!("invalid tenant UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(Note {
            id,
            tenant_id,
            user_id,
            title: self.title,
            content: self.content,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the Note repository.
#[derive(Clone)]
pub struct SurrealNoteRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealNoteRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> NoteRepository for SurrealNoteRepository<C> {
    async fn create(&self, input: CreateNote) -> NoteleafResult<Note> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('note', $id) SET \
                 tenant_id = $tenant_id, \
                 user_id = $user_id, \
                 title = $title, content = $content, \
                 is_public = $is_public",
            )
            .bind(("id", id_str.clone()))
            .bind(("tenant_id", input.tenant_id.to_string()))
            .bind(("user_id", input.user_id.to_string()))
            .bind(("title", input.title))
            .bind(("content", input.content))
            .bind(("is_public", input.is_public))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "note".into(),
            id: id_str,
        })?;

        Ok(row.into_note(id)?)
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> NoteleafResult<Note> {
        let id_str = id.to_string();
        let tenant_id_str = tenant_id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('note', $id) \
                 WHERE tenant_id = $tenant_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("tenant_id", tenant_id_str))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "note".into(),
            id: id_str,
        })?;

        Ok(row.into_note(id)?)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> NoteleafResult<PaginatedResult<Note>> {
        let tenant_id_str = tenant_id.to_string();

        let mut count_result = self
            .db
            .query(
                "SELECT count() AS total FROM note \
                 WHERE tenant_id = $tenant_id GROUP ALL",
            )
            .bind(("tenant_id", tenant_id_str.clone()))
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM note \
                 WHERE tenant_id = $tenant_id \
                 ORDER BY created_at DESC \
                 LIMIT $limit START $offset",
            )
            .bind(("tenant_id", tenant_id_str))
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<NoteRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_note())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        id: Uuid,
        input: UpdateNote,
    ) -> NoteleafResult<Note> {
        let id_str = id.to_string();
        let tenant_id_str = tenant_id.to_string();
        let user_id_str = user_id.to_string();

        let mut sets = Vec::new();
        if input.title.is_some() {
            sets.push("title = $title");
        }
        if input.content.is_some() {
            sets.push("content = $content");
        }
        if input.is_public.is_some() {
            sets.push("is_public = $is_public");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('note', $id) SET {} \
             WHERE tenant_id = $tenant_id AND user_id = $user_id",
            sets.join(", ")
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("id", id_str.clone()))
            .bind(("tenant_id", tenant_id_str))
            .bind(("user_id", user_id_str));

        if let Some(title) = input.title {
            builder = builder.bind(("title", title));
        }
        if let Some(content) = input.content {
            builder = builder.bind(("content", content));
        }
        if let Some(is_public) = input.is_public {
            builder = builder.bind(("is_public", is_public));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result
            .check()
            .map_err(|e| DbError::Decode(e.to_string()))?;

        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "note".into(),
            id: id_str,
        })?;

        Ok(row.into_note(id)?)
    }

    async fn delete(&self, tenant_id: Uuid, user_id: Uuid, id: Uuid) -> NoteleafResult<()> {
        let id_str = id.to_string();
        let tenant_id_str = tenant_id.to_string();
        let user_id_str = user_id.to_string();

        let mut result = self
            .db
            .query(
                "DELETE type::record('note', $id) \
                 WHERE tenant_id = $tenant_id AND user_id = $user_id \
                 RETURN BEFORE",
            )
            .bind(("id", id_str.clone()))
            .bind(("tenant_id", tenant_id_str))
            .bind(("user_id", user_id_str))
            .await
            .map_err(DbError::from)?;

        // RETURN BEFORE yields the deleted record; zero rows means the
        // filter did not match and nothing was removed.
        let rows: Vec<NoteRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "note".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }

    async fn count_for_tenant(&self, tenant_id: Uuid) -> NoteleafResult<u64> {
        let tenant_id_str = tenant_id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM note \
                 WHERE tenant_id = $tenant_id GROUP ALL",
            )
            .bind(("tenant_id", tenant_id_str))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }
}
