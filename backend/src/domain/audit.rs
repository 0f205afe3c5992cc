//! Audit records for destructive customer actions.

use std::fmt;

use super::TicketId;

/// Destructive action worth an audit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    /// A single ticket and its replies were deleted.
    DeletedTicket(TicketId),
    /// All open tickets of the customer were deleted.
    DeletedAllOpenTickets,
    /// All closed tickets of the customer were deleted.
    DeletedAllClosedTickets,
}

/// One audit line: who did what.
///
/// # Examples
/// ```
/// use panel::domain::{AuditAction, AuditEntry, TicketId};
///
/// let entry = AuditEntry::new("admin as jdoe", AuditAction::DeletedTicket(TicketId::new(4)));
/// assert_eq!(entry.to_string(), "admin as jdoe: deleted ticket 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    processor: String,
    action: AuditAction,
}

impl AuditEntry {
    /// Record `action` performed by `processor`.
    pub fn new(processor: impl Into<String>, action: AuditAction) -> Self {
        Self {
            processor: processor.into(),
            action,
        }
    }

    /// Name of the acting principal.
    pub fn processor(&self) -> &str {
        &self.processor
    }

    /// Action performed.
    pub fn action(&self) -> AuditAction {
        self.action
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            AuditAction::DeletedTicket(id) => write!(f, "{}: deleted ticket {id}", self.processor),
            AuditAction::DeletedAllOpenTickets => {
                write!(f, "{}: deleted all open tickets.", self.processor)
            }
            AuditAction::DeletedAllClosedTickets => {
                write!(f, "{}: deleted all closed tickets.", self.processor)
            }
        }
    }
}
