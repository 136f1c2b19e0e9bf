//! Tenant-scoped note CRUD with ownership enforcement.

use noteleaf_core::context::RequestContext;
use noteleaf_core::error::{NoteleafError, NoteleafResult};
use noteleaf_core::models::note::{
    CreateNote, MAX_CONTENT_LEN, MAX_TITLE_LEN, Note, UpdateNote,
};
use noteleaf_core::repository::{NoteRepository, PaginatedResult, Pagination};
use uuid::Uuid;

use crate::quota;

/// Client-supplied fields for a new note. Tenant and owner always come
/// from the request context.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub is_public: bool,
}

/// Note service, generic over the note repository.
pub struct NoteService<N: NoteRepository> {
    notes: N,
}

impl<N: NoteRepository> NoteService<N> {
    pub fn new(notes: N) -> Self {
        Self { notes }
    }

    /// Create a note owned by the acting user, subject to the tenant's
    /// note quota.
    ///
    /// The count and the insert are separate store operations;
    /// concurrent creates near the cap may briefly exceed it.
    pub async fn create(&self, ctx: &RequestContext, input: NewNote) -> NoteleafResult<Note> {
        validate_title(&input.title)?;
        validate_content(&input.content)?;

        let current = self.notes.count_for_tenant(ctx.tenant().id).await?;
        quota::ensure_note_capacity(ctx.tenant(), current)?;

        self.notes
            .create(CreateNote {
                tenant_id: ctx.tenant().id,
                user_id: ctx.user().id,
                title: input.title,
                content: input.content,
                is_public: input.is_public,
            })
            .await
    }

    /// All notes of the acting tenant, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        pagination: Pagination,
    ) -> NoteleafResult<PaginatedResult<Note>> {
        self.notes.list(ctx.tenant().id, pagination).await
    }

    /// A single note by id, visible only under its own tenant.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> NoteleafResult<Note> {
        self.notes.get(ctx.tenant().id, id).await
    }

    /// Update a note the acting user owns.
    ///
    /// A wrong tenant or wrong owner is `NotFound`, indistinguishable
    /// from an absent note — never `Forbidden`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateNote,
    ) -> NoteleafResult<Note> {
        if let Some(title) = &changes.title {
            validate_title(title)?;
        }
        if let Some(content) = &changes.content {
            validate_content(content)?;
        }

        self.notes
            .update(ctx.tenant().id, ctx.user().id, id, changes)
            .await
    }

    /// Delete a note the acting user owns. Same `NotFound` contract as
    /// `update`.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> NoteleafResult<()> {
        self.notes.delete(ctx.tenant().id, ctx.user().id, id).await
    }
}

fn validate_title(title: &str) -> NoteleafResult<()> {
    if title.trim().is_empty() {
        return Err(NoteleafError::Validation {
            message: "title must not be empty".into(),
        });
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(NoteleafError::Validation {
            message: format!("title exceeds {MAX_TITLE_LEN} characters"),
        });
    }
    Ok(())
}

fn validate_content(content: &str) -> NoteleafResult<()> {
    if content.trim().is_empty() {
        return Err(NoteleafError::Validation {
            message: "content must not be empty".into(),
        });
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(NoteleafError::Validation {
            message: format!("content exceeds {MAX_CONTENT_LEN} characters"),
        });
    }
    Ok(())
}
