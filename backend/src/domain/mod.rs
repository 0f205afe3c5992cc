//! Domain primitives, services and ports.
//!
//! Purpose: model the customer layout settings and ticket deletion flows
//! without reference to HTTP or storage. Inbound adapters decode requests into
//! the types here and call the driving ports; outbound adapters implement the
//! driven ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`Principal`]: the authenticated actor for one request.
//! - [`LayoutAction`] / [`TicketDeletion`]: decoded request actions.
//! - [`LayoutSettingsService`], [`TicketDeletionService`],
//!   [`CustomerFeatureService`]: implementations of the driving ports.

pub mod action;
pub mod audit;
pub mod auth;
pub mod error;
pub mod feature_service;
pub mod hooks;
pub mod layout;
pub mod layout_service;
pub mod outcome;
pub mod ports;
pub mod principal;
pub mod ticket;
pub mod ticket_deletion_service;
pub mod trace_id;

pub use self::action::{LayoutAction, TicketDeletion, coerce_int};
pub use self::audit::{AuditAction, AuditEntry};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feature_service::CustomerFeatureService;
pub use self::hooks::{
    ClientScript, ScriptEvent, ScriptHooks, ScriptObserver, TracingScriptObserver,
};
pub use self::layout::{
    DEFAULT_LAYOUT_COLOR, DEFAULT_PALETTE, LayoutColor, LayoutPreference, LayoutValidationError,
    Palette,
};
pub use self::layout_service::LayoutSettingsService;
pub use self::outcome::{ActionResult, FlashMessage, RedirectTarget, Severity};
pub use self::principal::{
    IdentityKind, Impersonator, Principal, PrincipalValidationError, UserId,
};
pub use self::ticket::{Ticket, TicketId, TicketStatus};
pub use self::ticket_deletion_service::TicketDeletionService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use panel::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
