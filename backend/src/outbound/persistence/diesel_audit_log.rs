//! Audit log adapter appending to the `log` table.

use async_trait::async_trait;
use chrono::Utc;
use diesel_async::RunQueryDsl;

use crate::domain::AuditEntry;
use crate::domain::ports::{AuditLog, AuditLogError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewLogRow;
use super::pool::DbPool;
use super::schema::log;

/// Writes each audit entry as one row in `log`.
#[derive(Clone)]
pub struct DieselAuditLog {
    pool: DbPool,
}

impl DieselAuditLog {
    /// Create an audit sink over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLog for DieselAuditLog {
    async fn record(&self, entry: &AuditEntry) -> Result<(), AuditLogError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let message = entry.to_string();
        let row = NewLogRow {
            log_time: Utc::now(),
            log_message: &message,
        };
        diesel::insert_into(log::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
