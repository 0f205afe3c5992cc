//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: the signed-in principal, the cached theme
//! colour and the page message shown after a redirect.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, FlashMessage, IdentityKind, LayoutColor, Principal};

pub(crate) const PRINCIPAL_KEY: &str = "principal";
pub(crate) const THEME_COLOR_KEY: &str = "user_theme_color";
pub(crate) const PAGE_MESSAGE_KEY: &str = "page_message";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

fn write_failed(error: impl std::fmt::Display) -> Error {
    Error::internal(format!("failed to persist session: {error}"))
}

fn read_failed(error: impl std::fmt::Display) -> Error {
    Error::internal(format!("failed to read session: {error}"))
}

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated principal in the session cookie.
    ///
    /// Any previous session state is discarded first.
    pub fn persist_principal(&self, principal: &Principal) -> Result<(), Error> {
        self.0.renew();
        self.0.insert(PRINCIPAL_KEY, principal).map_err(write_failed)
    }

    /// Fetch the current principal, if present.
    ///
    /// A cookie holding an undecodable principal is treated as signed out.
    pub fn principal(&self) -> Result<Option<Principal>, Error> {
        match self.0.get::<Principal>(PRINCIPAL_KEY) {
            Ok(principal) => Ok(principal),
            Err(error) => {
                tracing::warn!("invalid principal in session cookie: {error}");
                Ok(None)
            }
        }
    }

    /// Require a signed-in customer.
    ///
    /// Returns `401 Unauthorized` without a principal and `403 Forbidden`
    /// when the session belongs to an administrator or reseller.
    pub fn require_user_principal(&self) -> Result<Principal, Error> {
        let principal = self
            .principal()?
            .ok_or_else(|| Error::unauthorized("login required"))?;
        if principal.kind() != IdentityKind::User {
            return Err(Error::forbidden("customer session required"));
        }
        Ok(principal)
    }

    /// Cache the customer's theme colour for page chrome.
    pub fn set_theme_color(&self, color: &LayoutColor) -> Result<(), Error> {
        self.0
            .insert(THEME_COLOR_KEY, color.as_str())
            .map_err(write_failed)
    }

    /// Cached theme colour, if any.
    pub fn theme_color(&self) -> Result<Option<String>, Error> {
        self.0.get::<String>(THEME_COLOR_KEY).map_err(read_failed)
    }

    /// Store the page message shown by the next rendered page.
    ///
    /// The session holds at most one message; a newer one replaces it.
    pub fn set_flash(&self, message: FlashMessage) -> Result<(), Error> {
        self.0
            .insert(PAGE_MESSAGE_KEY, message)
            .map_err(write_failed)
    }

    /// Remove and return the pending page message.
    pub fn take_flash(&self) -> Result<Option<FlashMessage>, Error> {
        self.0
            .remove_as::<FlashMessage>(PAGE_MESSAGE_KEY)
            .transpose()
            .map_err(|raw| read_failed(format!("undecodable page message {raw}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
