//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: in-process stores for database-less runs and tests.
//! - **audit**: audit lines emitted as `tracing` events.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod audit;
pub mod memory;
pub mod persistence;
