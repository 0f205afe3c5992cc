//! Port for support ticket persistence.

use async_trait::async_trait;

use crate::domain::{Ticket, TicketId, TicketStatus, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "ticket repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "ticket repository query failed: {message}",
    }
}

/// Storage contract for support tickets.
///
/// Ownership is enforced in the lookup itself: a ticket that exists but
/// belongs to someone else is reported exactly like a missing one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Ticket `ticket_id` if `owner` is its sender or recipient.
    async fn find_for_owner(
        &self,
        ticket_id: TicketId,
        owner: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Delete the ticket and every reply to it. Returns the number of rows
    /// removed.
    async fn delete_ticket(&self, ticket_id: TicketId) -> Result<u64, TicketRepositoryError>;

    /// Delete every ticket in `status` owned by `owner`, replies included.
    /// Returns the number of rows removed.
    async fn delete_by_status(
        &self,
        owner: UserId,
        status: TicketStatus,
    ) -> Result<u64, TicketRepositoryError>;
}

/// Empty ticket store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketRepository;

#[async_trait]
impl TicketRepository for FixtureTicketRepository {
    async fn find_for_owner(
        &self,
        _ticket_id: TicketId,
        _owner: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(None)
    }

    async fn delete_ticket(&self, _ticket_id: TicketId) -> Result<u64, TicketRepositoryError> {
        Ok(0)
    }

    async fn delete_by_status(
        &self,
        _owner: UserId,
        _status: TicketStatus,
    ) -> Result<u64, TicketRepositoryError> {
        Ok(0)
    }
}
