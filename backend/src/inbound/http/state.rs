//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ScriptHooks;
use crate::domain::ports::{
    FeatureEntitlements, LayoutSettingsCommand, LayoutSettingsQuery, LoginService,
    TicketDeletionCommand,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub layout: Arc<dyn LayoutSettingsCommand>,
    pub layout_query: Arc<dyn LayoutSettingsQuery>,
    pub ticket_deletion: Arc<dyn TicketDeletionCommand>,
    pub entitlements: Arc<dyn FeatureEntitlements>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub layout: Arc<dyn LayoutSettingsCommand>,
    pub layout_query: Arc<dyn LayoutSettingsQuery>,
    pub ticket_deletion: Arc<dyn TicketDeletionCommand>,
    pub entitlements: Arc<dyn FeatureEntitlements>,
    pub hooks: ScriptHooks,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports, ScriptHooks::default())
    }
}

impl HttpState {
    /// Construct state from a ports bundle and the script observers to notify.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use panel::domain::ports::{
    ///     FixtureAuditLog, FixtureCustomerFeatureRepository, FixtureLayoutPreferencesRepository,
    ///     FixtureLoginService, FixtureTicketRepository,
    /// };
    /// use panel::domain::{
    ///     CustomerFeatureService, LayoutSettingsService, ScriptHooks, TicketDeletionService,
    ///     TracingScriptObserver,
    /// };
    /// use panel::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let layout = Arc::new(LayoutSettingsService::new(Arc::new(
    ///     FixtureLayoutPreferencesRepository,
    /// )));
    /// let ports = HttpStatePorts {
    ///     login: Arc::new(FixtureLoginService),
    ///     layout: layout.clone(),
    ///     layout_query: layout,
    ///     ticket_deletion: Arc::new(TicketDeletionService::new(
    ///         Arc::new(FixtureTicketRepository),
    ///         Arc::new(FixtureAuditLog),
    ///     )),
    ///     entitlements: Arc::new(CustomerFeatureService::new(
    ///         Arc::new(FixtureCustomerFeatureRepository::default()),
    ///         true,
    ///     )),
    /// };
    /// let hooks = ScriptHooks::default().with_observer(Arc::new(TracingScriptObserver));
    /// let state = HttpState::new(ports, hooks);
    /// assert_eq!(state.hooks.len(), 1);
    /// ```
    pub fn new(ports: HttpStatePorts, hooks: ScriptHooks) -> Self {
        let HttpStatePorts {
            login,
            layout,
            layout_query,
            ticket_deletion,
            entitlements,
        } = ports;
        Self {
            login,
            layout,
            layout_query,
            ticket_deletion,
            entitlements,
            hooks,
        }
    }
}
