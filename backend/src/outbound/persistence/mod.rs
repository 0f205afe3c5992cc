//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters translate between Diesel rows and domain types and map database
//! failures into port errors. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use panel::domain::Palette;
//! use panel::outbound::persistence::{DbPool, DieselLayoutPreferencesRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/panel")).await?;
//! let repo = DieselLayoutPreferencesRepository::new(pool, Palette::theme_default());
//! ```

mod diesel_audit_log;
mod diesel_customer_feature_repository;
mod diesel_error_mapping;
mod diesel_layout_preferences_repository;
mod diesel_ticket_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_audit_log::DieselAuditLog;
pub use diesel_customer_feature_repository::DieselCustomerFeatureRepository;
pub use diesel_layout_preferences_repository::DieselLayoutPreferencesRepository;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
