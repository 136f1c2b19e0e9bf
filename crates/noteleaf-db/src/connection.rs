//! Database handle: connection, migration, and repository wiring.

use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::error::DbError;
use crate::repository::{SurrealNoteRepository, SurrealTenantRepository, SurrealUserRepository};
use crate::schema::run_migrations;

/// Connection settings for a SurrealDB endpoint.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "noteleaf".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

/// A migrated database handle from which the tenant, user, and note
/// repositories are obtained.
#[derive(Clone)]
pub struct DbManager<C: Connection> {
    db: Surreal<C>,
}

impl DbManager<Client> {
    /// Connect to a remote SurrealDB endpoint and bring the schema up
    /// to date.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        Self::init(db).await
    }
}

impl<C: Connection> DbManager<C> {
    /// Wrap an already-selected client, running pending migrations.
    ///
    /// This is the entry point for embedded engines; `connect` uses it
    /// after authenticating against a remote endpoint.
    pub async fn init(db: Surreal<C>) -> Result<Self, DbError> {
        run_migrations(&db).await?;
        Ok(Self { db })
    }

    pub fn tenants(&self) -> SurrealTenantRepository<C> {
        SurrealTenantRepository::new(self.db.clone())
    }

    pub fn users(&self) -> SurrealUserRepository<C> {
        SurrealUserRepository::new(self.db.clone())
    }

    pub fn notes(&self) -> SurrealNoteRepository<C> {
        SurrealNoteRepository::new(self.db.clone())
    }

    /// The underlying client, for queries the repositories do not cover.
    pub fn client(&self) -> &Surreal<C> {
        &self.db
    }
}
