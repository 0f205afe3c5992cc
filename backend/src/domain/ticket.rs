//! Support ticket records as seen by the customer area.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Ticket identifier as supplied by the caller.
///
/// Unlike [`UserId`], any integer is accepted: malformed request input is
/// coerced to `0`, which simply never matches a stored ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Awaiting an answer or further action.
    Open,
    /// Resolved.
    Closed,
}

impl TicketStatus {
    /// Stored status code of a closed ticket. Every other code is open.
    pub const CLOSED_CODE: i32 = 0;

    /// Interpret a stored status code: zero is closed, anything else is open.
    ///
    /// # Examples
    /// ```
    /// use panel::domain::TicketStatus;
    ///
    /// assert_eq!(TicketStatus::from_code(0), TicketStatus::Closed);
    /// assert_eq!(TicketStatus::from_code(3), TicketStatus::Open);
    /// ```
    pub const fn from_code(code: i32) -> Self {
        if code == Self::CLOSED_CODE {
            Self::Closed
        } else {
            Self::Open
        }
    }
}

/// A support ticket or a reply to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Row identifier.
    pub id: TicketId,
    /// Account that opened the ticket.
    pub from: UserId,
    /// Account the ticket is addressed to.
    pub to: UserId,
    /// Current status.
    pub status: TicketStatus,
    /// Parent ticket when this row is a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<TicketId>,
    /// Subject line.
    pub subject: String,
}

impl Ticket {
    /// True when `user` is either party of the ticket.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.from == user || self.to == user
    }

    /// True for top-level tickets (not replies).
    pub fn is_thread_root(&self) -> bool {
        self.reply_to.is_none()
    }
}
