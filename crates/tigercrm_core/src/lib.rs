//! Core data layer for the Tiger Marketing CRM.
//! This crate is the single source of truth for record shapes, storage
//! layout and the derived pipeline/task views.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod seed;
pub mod service;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::campaign::{Campaign, CampaignDraft, CampaignPatch};
pub use model::contact::{Contact, ContactDraft, ContactPatch};
pub use model::deal::{Deal, DealDraft, DealPatch, DealStage};
pub use model::interaction::{Interaction, InteractionDraft, InteractionPatch};
pub use model::reference::{Neighborhood, TopStore, ZipCode};
pub use model::task::{Task, TaskDraft, TaskPatch, TaskStatus};
pub use model::{Entity, Record, RecordId, Timestamp};
pub use query::ContactFilter;
pub use repo::entity_repo::{
    CampaignRepository, ContactRepository, DealRepository, EntityRepository,
    InteractionRepository, StoreRepository, TaskRepository,
};
pub use repo::reference_repo::ReferenceRepository;
pub use repo::{RepoError, RepoResult};
pub use seed::{seed_reference_data, SeedOutcome};
pub use service::contact_service::{ContactDetail, ContactService};
pub use service::dashboard_service::{
    DashboardService, DashboardStats, DashboardSummary, DealBoard, DealRow, NavCounts, TaskRow,
};
pub use service::lookup_service::{LookupService, MISSING_REFERENCE};
pub use service::task_service::TaskService;
pub use storage::{
    KeyValueStorage, MemoryKeyValueStorage, SqliteKeyValueStorage, StorageError, StorageResult,
};
pub use store::{Collection, Store};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
