//! Integration tests for Tenant and User repository implementations
//! using in-memory SurrealDB.

use noteleaf_core::models::tenant::{CreateTenant, Plan, UNLIMITED};
use noteleaf_core::models::user::{CreateUser, Role};
use noteleaf_core::repository::{NoteRepository, TenantRepository, UserRepository};
use noteleaf_db::DbManager;
use noteleaf_db::repository::{SurrealTenantRepository, SurrealUserRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    noteleaf_db::run_migrations(&db).await.unwrap();
    db
}

// -----------------------------------------------------------------------
// Tenant tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_tenant() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db);

    let tenant = repo
        .create(CreateTenant {
            name: "ACME Corp".into(),
            slug: "acme".into(),
        })
        .await
        .unwrap();

    assert_eq!(tenant.name, "ACME Corp");
    assert_eq!(tenant.slug, "acme");
    assert_eq!(tenant.plan, Plan::Free);
    assert_eq!(tenant.settings.max_notes, 3);
    assert_eq!(tenant.settings.max_users, 5);

    let fetched = repo.get_by_id(tenant.id).await.unwrap();
    assert_eq!(fetched.id, tenant.id);
    assert_eq!(fetched.slug, tenant.slug);
    assert_eq!(fetched.plan, Plan::Free);
}

#[tokio::test]
async fn get_tenant_by_slug() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db);

    let tenant = repo
        .create(CreateTenant {
            name: "Slug Test".into(),
            slug: "slug-test".into(),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_slug("slug-test").await.unwrap();
    assert_eq!(fetched.id, tenant.id);
    assert_eq!(fetched.slug, "slug-test");
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db);

    let result = repo.get_by_slug("no-such-tenant").await;
    assert!(result.is_err(), "unknown slug should not resolve");
}

#[tokio::test]
async fn duplicate_tenant_slug_rejected() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db);

    repo.create(CreateTenant {
        name: "First".into(),
        slug: "unique-slug".into(),
    })
    .await
    .unwrap();

    let result = repo
        .create(CreateTenant {
            name: "Second".into(),
            slug: "unique-slug".into(),
        })
        .await;

    assert!(result.is_err(), "duplicate slug should be rejected");
}

#[tokio::test]
async fn upgrade_plan_lifts_quotas() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db);

    let tenant = repo
        .create(CreateTenant {
            name: "Upgrader".into(),
            slug: "upgrader".into(),
        })
        .await
        .unwrap();

    let upgraded = repo.upgrade_plan(tenant.id).await.unwrap();
    assert_eq!(upgraded.plan, Plan::Pro);
    assert_eq!(upgraded.settings.max_notes, UNLIMITED);
    assert_eq!(upgraded.settings.max_users, UNLIMITED);
    assert!(upgraded.updated_at >= tenant.updated_at);

    // Persisted, not just returned.
    let fetched = repo.get_by_id(tenant.id).await.unwrap();
    assert_eq!(fetched.plan, Plan::Pro);
}

// -----------------------------------------------------------------------
// User tests
// -----------------------------------------------------------------------

/// Helper: create a tenant and return its ID.
async fn create_tenant(
    repo: &SurrealTenantRepository<surrealdb::engine::local::Db>,
    slug: &str,
) -> uuid::Uuid {
    repo.create(CreateTenant {
        name: format!("Tenant {slug}"),
        slug: slug.into(),
    })
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn create_and_get_user() {
    let db = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let user_repo = SurrealUserRepository::new(db);

    let tenant_id = create_tenant(&tenant_repo, "user-test").await;

    let user = user_repo
        .create(CreateUser {
            tenant_id,
            email: "alice@example.com".into(),
            password_hash: "$argon2id$test-hash".into(),
            role: Role::Admin,
        })
        .await
        .unwrap();

    assert_eq!(user.tenant_id, tenant_id);
    assert_eq!(user.role, Role::Admin);

    let fetched = user_repo.get_by_id(tenant_id, user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, "alice@example.com");
    assert_eq!(fetched.password_hash, "$argon2id$test-hash");
}

#[tokio::test]
async fn get_user_by_email_is_tenant_scoped() {
    let db = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let user_repo = SurrealUserRepository::new(db);

    let acme = create_tenant(&tenant_repo, "acme-scope").await;
    let globex = create_tenant(&tenant_repo, "globex-scope").await;

    // Same email under two tenants — two distinct users.
    let acme_user = user_repo
        .create(CreateUser {
            tenant_id: acme,
            email: "shared@example.com".into(),
            password_hash: "hash-a".into(),
            role: Role::Member,
        })
        .await
        .unwrap();
    let globex_user = user_repo
        .create(CreateUser {
            tenant_id: globex,
            email: "shared@example.com".into(),
            password_hash: "hash-b".into(),
            role: Role::Member,
        })
        .await
        .unwrap();

    let found = user_repo
        .get_by_email(acme, "shared@example.com")
        .await
        .unwrap();
    assert_eq!(found.id, acme_user.id);
    assert_ne!(found.id, globex_user.id);
}

#[tokio::test]
async fn user_lookup_under_wrong_tenant_is_not_found() {
    let db = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let user_repo = SurrealUserRepository::new(db);

    let acme = create_tenant(&tenant_repo, "acme-wrong").await;
    let globex = create_tenant(&tenant_repo, "globex-wrong").await;

    let user = user_repo
        .create(CreateUser {
            tenant_id: acme,
            email: "bob@example.com".into(),
            password_hash: "hash".into(),
            role: Role::Member,
        })
        .await
        .unwrap();

    let result = user_repo.get_by_id(globex, user.id).await;
    assert!(result.is_err(), "user must not be visible under another tenant");
}

#[tokio::test]
async fn duplicate_email_within_tenant_rejected() {
    let db = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let user_repo = SurrealUserRepository::new(db);

    let tenant_id = create_tenant(&tenant_repo, "dup-email").await;

    user_repo
        .create(CreateUser {
            tenant_id,
            email: "dup@example.com".into(),
            password_hash: "hash-1".into(),
            role: Role::Member,
        })
        .await
        .unwrap();

    let result = user_repo
        .create(CreateUser {
            tenant_id,
            email: "dup@example.com".into(),
            password_hash: "hash-2".into(),
            role: Role::Member,
        })
        .await;

    assert!(result.is_err(), "duplicate email in one tenant should be rejected");
}

#[tokio::test]
async fn count_users_per_tenant() {
    let db = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let user_repo = SurrealUserRepository::new(db);

    let acme = create_tenant(&tenant_repo, "count-a").await;
    let globex = create_tenant(&tenant_repo, "count-b").await;

    for i in 0..3 {
        user_repo
            .create(CreateUser {
                tenant_id: acme,
                email: format!("user{i}@example.com"),
                password_hash: "hash".into(),
                role: Role::Member,
            })
            .await
            .unwrap();
    }

    assert_eq!(user_repo.count_for_tenant(acme).await.unwrap(), 3);
    assert_eq!(user_repo.count_for_tenant(globex).await.unwrap(), 0);
}

// -----------------------------------------------------------------------
// DbManager wiring
// -----------------------------------------------------------------------

#[tokio::test]
async fn db_manager_migrates_and_wires_repositories() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let manager = DbManager::init(db).await.unwrap();

    let tenant = manager
        .tenants()
        .create(CreateTenant {
            name: "Managed".into(),
            slug: "managed".into(),
        })
        .await
        .unwrap();

    manager
        .users()
        .create(CreateUser {
            tenant_id: tenant.id,
            email: "alice@managed.test".into(),
            password_hash: "hash".into(),
            role: Role::Admin,
        })
        .await
        .unwrap();

    assert_eq!(manager.users().count_for_tenant(tenant.id).await.unwrap(), 1);
    assert_eq!(manager.notes().count_for_tenant(tenant.id).await.unwrap(), 0);

    // Re-initializing over the same client is a no-op: migrations are
    // tracked and existing data survives.
    let again = DbManager::init(manager.client().clone()).await.unwrap();
    let fetched = again.tenants().get_by_slug("managed").await.unwrap();
    assert_eq!(fetched.id, tenant.id);
}
