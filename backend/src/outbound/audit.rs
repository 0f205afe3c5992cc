//! Audit sink writing through `tracing`.
//!
//! Lines go to the `audit` target at `INFO`, so the log pipeline decides where
//! they end up.

use async_trait::async_trait;
use tracing::info;

use crate::domain::AuditEntry;
use crate::domain::ports::{AuditLog, AuditLogError};

/// Tracing target for audit lines.
pub const AUDIT_TARGET: &str = "audit";

/// Emits each audit entry as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

#[async_trait]
impl AuditLog for TracingAuditLog {
    async fn record(&self, entry: &AuditEntry) -> Result<(), AuditLogError> {
        info!(
            target: AUDIT_TARGET,
            processor = entry.processor(),
            action = ?entry.action(),
            "{entry}"
        );
        Ok(())
    }
}
