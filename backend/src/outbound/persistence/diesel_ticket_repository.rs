//! PostgreSQL-backed `TicketRepository`.
//!
//! Replies are rows whose `ticket_reply` points at a thread root. Deleting a
//! ticket removes the root and all of its replies in one statement.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{Ticket, TicketId, TicketStatus, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::TicketRow;
use super::pool::DbPool;
use super::schema::tickets;

/// Diesel-backed ticket store.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type StatusPredicate = Box<dyn BoxableExpression<tickets::table, Pg, SqlType = Bool>>;

/// Rows in `status`. Open covers every non-zero code.
fn status_predicate(status: TicketStatus) -> StatusPredicate {
    match status {
        TicketStatus::Closed => Box::new(tickets::ticket_status.eq(TicketStatus::CLOSED_CODE)),
        TicketStatus::Open => Box::new(tickets::ticket_status.ne(TicketStatus::CLOSED_CODE)),
    }
}

fn row_to_ticket(row: TicketRow) -> Result<Ticket, TicketRepositoryError> {
    let from = UserId::new(row.ticket_from).map_err(|err| {
        TicketRepositoryError::query(format!("ticket {}: sender: {err}", row.ticket_id))
    })?;
    let to = UserId::new(row.ticket_to).map_err(|err| {
        TicketRepositoryError::query(format!("ticket {}: recipient: {err}", row.ticket_id))
    })?;
    Ok(Ticket {
        id: TicketId::new(row.ticket_id),
        from,
        to,
        status: TicketStatus::from_code(row.ticket_status),
        reply_to: row.ticket_reply.map(TicketId::new),
        subject: row.ticket_subject,
    })
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn find_for_owner(
        &self,
        ticket_id: TicketId,
        owner: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let owner = owner.get();
        let row: Option<TicketRow> = tickets::table
            .filter(tickets::ticket_id.eq(ticket_id.get()))
            .filter(
                tickets::ticket_from
                    .eq(owner)
                    .or(tickets::ticket_to.eq(owner)),
            )
            .select(TicketRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_ticket).transpose()
    }

    async fn delete_ticket(&self, ticket_id: TicketId) -> Result<u64, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = ticket_id.get();
        let removed = diesel::delete(
            tickets::table.filter(tickets::ticket_id.eq(id).or(tickets::ticket_reply.eq(id))),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        debug!(ticket_id = id, rows = removed, "ticket thread deleted");
        Ok(rows_to_u64(removed))
    }

    async fn delete_by_status(
        &self,
        owner: UserId,
        status: TicketStatus,
    ) -> Result<u64, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let owner = owner.get();

        let removed = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let roots: Vec<i64> = tickets::table
                        .filter(tickets::ticket_reply.is_null())
                        .filter(
                            tickets::ticket_from
                                .eq(owner)
                                .or(tickets::ticket_to.eq(owner)),
                        )
                        .filter(status_predicate(status))
                        .select(tickets::ticket_id)
                        .load(conn)
                        .await?;
                    if roots.is_empty() {
                        return Ok(0);
                    }

                    diesel::delete(
                        tickets::table.filter(
                            tickets::ticket_id
                                .eq_any(roots.clone())
                                .or(tickets::ticket_reply.eq_any(roots)),
                        ),
                    )
                    .execute(conn)
                    .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(rows_to_u64(removed))
    }
}

fn rows_to_u64(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}
