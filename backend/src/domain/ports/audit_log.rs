//! Port for the append-only audit trail.

use async_trait::async_trait;

use crate::domain::AuditEntry;

use super::define_port_error;

define_port_error! {
    /// Errors raised by audit log adapters.
    pub enum AuditLogError {
        /// The audit sink could not be reached.
        Connection { message: String } =>
            "audit log connection failed: {message}",
        /// Writing the entry failed.
        Write { message: String } =>
            "audit log write failed: {message}",
    }
}

/// Sink for audit lines, one per destructive action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append `entry`.
    async fn record(&self, entry: &AuditEntry) -> Result<(), AuditLogError>;
}

/// Audit sink that drops every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuditLog;

#[async_trait]
impl AuditLog for FixtureAuditLog {
    async fn record(&self, _entry: &AuditEntry) -> Result<(), AuditLogError> {
        Ok(())
    }
}
