//! Noteleaf Tenancy — tenant resolution, plan quotas, plan upgrade,
//! tenant-scoped note CRUD, and tenant/user provisioning.
//!
//! Every service here is generic over the `noteleaf-core` repository
//! traits and takes the scoping context as an explicit parameter; no
//! tenant or user identity is ever read from ambient state.

pub mod notes;
pub mod plan;
pub mod provisioning;
pub mod quota;
pub mod resolver;

pub use notes::{NewNote, NoteService};
pub use plan::PlanService;
pub use provisioning::{CreateTenantInput, ProvisionedTenant, ProvisioningService};
pub use resolver::TenantResolver;
