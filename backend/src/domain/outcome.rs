//! Results produced by the action services.

use serde::{Deserialize, Serialize};

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The action completed.
    Success,
    /// The action was rejected or found nothing to act on.
    Error,
}

impl Severity {
    /// Lower-case name used in markup class attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One-shot message shown on the next rendered page.
///
/// `text` is plain text. Renderers escape it; it is never treated as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Message category.
    pub severity: Severity,
    /// Human-readable text.
    pub text: String,
}

impl FlashMessage {
    /// Success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    /// Error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// Logical page a ticket action returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    /// Open-ticket listing.
    TicketSystem,
    /// Closed-ticket listing.
    TicketClosed,
}

impl RedirectTarget {
    /// Path of the target page.
    ///
    /// # Examples
    /// ```
    /// use panel::domain::RedirectTarget;
    ///
    /// assert_eq!(RedirectTarget::TicketClosed.path(), "/client/ticket_closed");
    /// ```
    pub fn path(self) -> &'static str {
        match self {
            Self::TicketSystem => "/client/ticket_system",
            Self::TicketClosed => "/client/ticket_closed",
        }
    }
}

/// Outcome of a redirecting action: a flash message and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Message stored for the next page.
    pub flash: FlashMessage,
    /// Page to redirect to.
    pub redirect: RedirectTarget,
}

impl ActionResult {
    /// Pair a flash message with a redirect target.
    pub fn new(flash: FlashMessage, redirect: RedirectTarget) -> Self {
        Self { flash, redirect }
    }
}
