//! Driving port for customer-initiated ticket deletion.

use async_trait::async_trait;

use crate::domain::{ActionResult, Error, Principal, TicketDeletion};

/// Deletes tickets owned by a principal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketDeletionCommand: Send + Sync {
    /// Carry out `request` and say where to send the user next.
    ///
    /// Missing tickets and unknown requests are answered with an error flash;
    /// `Err` signals a storage failure.
    async fn delete(
        &self,
        principal: &Principal,
        request: TicketDeletion,
    ) -> Result<ActionResult, Error>;
}
