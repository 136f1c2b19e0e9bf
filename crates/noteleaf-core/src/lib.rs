//! Noteleaf Core — domain models, error taxonomy, repository traits,
//! and the request context threaded through every tenant-scoped
//! operation.

pub mod context;
pub mod error;
pub mod models;
pub mod repository;

pub use context::RequestContext;
pub use error::{NoteleafError, NoteleafResult};
