use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::AuditEntry;
use crate::domain::ports::{AuditLog, AuditLogError};

use super::lock;

/// Audit sink keeping rendered lines in memory.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    lines: Mutex<Vec<String>>,
}

impl InMemoryAuditLog {
    /// Lines recorded so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, entry: &AuditEntry) -> Result<(), AuditLogError> {
        lock(&self.lines, "audit log", AuditLogError::write)?.push(entry.to_string());
        Ok(())
    }
}
