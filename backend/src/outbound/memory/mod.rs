//! In-process adapters for running without PostgreSQL.
//!
//! The server falls back to these when no database URL is configured, and the
//! integration tests drive the HTTP surface through them. State lives behind
//! a `std::sync::Mutex`; a poisoned lock surfaces as a query failure rather
//! than a panic.

mod audit;
mod features;
mod layout;
mod tickets;

pub use audit::InMemoryAuditLog;
pub use features::InMemoryCustomerFeatures;
pub use layout::InMemoryLayoutPreferences;
pub use tickets::InMemoryTickets;

use std::sync::{Mutex, MutexGuard};

fn lock<'a, T, E>(
    mutex: &'a Mutex<T>,
    name: &str,
    query: impl FnOnce(String) -> E,
) -> Result<MutexGuard<'a, T>, E> {
    mutex
        .lock()
        .map_err(|_| query(format!("{name} lock poisoned")))
}
