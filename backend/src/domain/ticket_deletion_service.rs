//! Customer ticket deletion service.
//!
//! Deletes tickets through a [`TicketRepository`] and writes one audit line
//! per successful deletion. A failing audit sink is logged and does not undo
//! or fail the deletion.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    AuditLog, TicketDeletionCommand, TicketRepository, TicketRepositoryError,
};
use crate::domain::{
    ActionResult, AuditAction, AuditEntry, Error, FlashMessage, Principal, RedirectTarget,
    TicketDeletion, TicketId, TicketStatus,
};

pub(crate) const MSG_TICKET_DELETED: &str = "Ticket successfully deleted.";
pub(crate) const MSG_OPEN_DELETED: &str = "All open tickets were successfully deleted.";
pub(crate) const MSG_CLOSED_DELETED: &str = "All closed tickets were successfully deleted.";
pub(crate) const MSG_UNKNOWN_ACTION: &str = "Unknown action requested.";

/// Ticket deletion service implementing [`TicketDeletionCommand`].
#[derive(Clone)]
pub struct TicketDeletionService<T, A> {
    tickets: Arc<T>,
    audit: Arc<A>,
}

impl<T, A> TicketDeletionService<T, A> {
    /// Create a service over a ticket store and an audit sink.
    pub fn new(tickets: Arc<T>, audit: Arc<A>) -> Self {
        Self { tickets, audit }
    }
}

impl<T, A> TicketDeletionService<T, A>
where
    T: TicketRepository,
    A: AuditLog,
{
    fn map_repository_error(error: TicketRepositoryError) -> Error {
        match error {
            TicketRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("ticket repository unavailable: {message}"))
            }
            TicketRepositoryError::Query { message } => {
                Error::internal(format!("ticket repository error: {message}"))
            }
        }
    }

    async fn audit(&self, principal: &Principal, action: AuditAction) {
        let entry = AuditEntry::new(principal.processor_name(), action);
        if let Err(err) = self.audit.record(&entry).await {
            warn!(error = %err, entry = %entry, "failed to record audit entry");
        }
    }

    async fn delete_single(
        &self,
        principal: &Principal,
        ticket_id: TicketId,
    ) -> Result<ActionResult, Error> {
        let found = self
            .tickets
            .find_for_owner(ticket_id, principal.user_id())
            .await
            .map_err(Self::map_repository_error)?;
        let Some(ticket) = found else {
            return Ok(ActionResult::new(
                FlashMessage::error(format!("Ticket with Id '{ticket_id}' was not found.")),
                RedirectTarget::TicketSystem,
            ));
        };

        let redirect = match ticket.status {
            TicketStatus::Closed => RedirectTarget::TicketClosed,
            TicketStatus::Open => RedirectTarget::TicketSystem,
        };
        let removed = self
            .tickets
            .delete_ticket(ticket.id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(ticket_id = %ticket.id, rows = removed, "ticket deleted");
        self.audit(principal, AuditAction::DeletedTicket(ticket.id)).await;

        Ok(ActionResult::new(
            FlashMessage::success(MSG_TICKET_DELETED),
            redirect,
        ))
    }

    async fn delete_all(
        &self,
        principal: &Principal,
        status: TicketStatus,
    ) -> Result<ActionResult, Error> {
        let removed = self
            .tickets
            .delete_by_status(principal.user_id(), status)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %principal.user_id(), ?status, rows = removed, "tickets deleted");

        let (action, message, redirect) = match status {
            TicketStatus::Open => (
                AuditAction::DeletedAllOpenTickets,
                MSG_OPEN_DELETED,
                RedirectTarget::TicketSystem,
            ),
            TicketStatus::Closed => (
                AuditAction::DeletedAllClosedTickets,
                MSG_CLOSED_DELETED,
                RedirectTarget::TicketClosed,
            ),
        };
        self.audit(principal, action).await;

        Ok(ActionResult::new(FlashMessage::success(message), redirect))
    }
}

#[async_trait]
impl<T, A> TicketDeletionCommand for TicketDeletionService<T, A>
where
    T: TicketRepository,
    A: AuditLog,
{
    async fn delete(
        &self,
        principal: &Principal,
        request: TicketDeletion,
    ) -> Result<ActionResult, Error> {
        match request {
            TicketDeletion::Single(ticket_id) => self.delete_single(principal, ticket_id).await,
            TicketDeletion::AllOpen => self.delete_all(principal, TicketStatus::Open).await,
            TicketDeletion::AllClosed => self.delete_all(principal, TicketStatus::Closed).await,
            TicketDeletion::Unrecognised => Ok(ActionResult::new(
                FlashMessage::error(MSG_UNKNOWN_ACTION),
                RedirectTarget::TicketSystem,
            )),
        }
    }
}

#[cfg(test)]
#[path = "ticket_deletion_service_tests.rs"]
mod tests;
