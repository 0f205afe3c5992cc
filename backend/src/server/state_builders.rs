//! Builders wiring adapters into the HTTP state.

use std::sync::Arc;

use tracing::{error, info, warn};

use panel::domain::ports::{
    AuditLog, CustomerFeatureRepository, DisabledLoginService, FixtureLoginService,
    LayoutPreferencesRepository, LoginService, TicketRepository,
};
use panel::domain::{
    CustomerFeatureService, LayoutSettingsService, ScriptHooks, TicketDeletionService,
    TracingScriptObserver,
};
use panel::inbound::http::state::{HttpState, HttpStatePorts};
use panel::outbound::audit::TracingAuditLog;
use panel::outbound::memory::{
    InMemoryCustomerFeatures, InMemoryLayoutPreferences, InMemoryTickets,
};
use panel::outbound::persistence::{
    DieselAuditLog, DieselCustomerFeatureRepository, DieselLayoutPreferencesRepository,
    DieselTicketRepository,
};

use super::ServerConfig;

/// Driven adapters backing the driving services.
struct Adapters<L, T, A, F> {
    layout: Arc<L>,
    tickets: Arc<T>,
    audit: Arc<A>,
    features: Arc<F>,
}

/// Fixture accounts only back `/login` when state is kept in memory.
///
/// No account store exists for the database-backed configuration, so login is
/// refused there rather than accepting the well-known fixture credentials.
fn build_login_service<Pool>(pool: &Option<Pool>) -> Arc<dyn LoginService> {
    match pool {
        Some(_) => {
            error!("no account store configured for the database; password login is disabled");
            Arc::new(DisabledLoginService)
        }
        None => Arc::new(FixtureLoginService),
    }
}

fn build_ports<L, T, A, F>(
    login: Arc<dyn LoginService>,
    adapters: Adapters<L, T, A, F>,
    support_enabled: bool,
) -> HttpStatePorts
where
    L: LayoutPreferencesRepository + 'static,
    T: TicketRepository + 'static,
    A: AuditLog + 'static,
    F: CustomerFeatureRepository + 'static,
{
    let Adapters {
        layout,
        tickets,
        audit,
        features,
    } = adapters;
    let layout_service = Arc::new(LayoutSettingsService::new(layout));
    HttpStatePorts {
        login,
        layout: layout_service.clone(),
        layout_query: layout_service,
        ticket_deletion: Arc::new(TicketDeletionService::new(tickets, audit)),
        entitlements: Arc::new(CustomerFeatureService::new(features, support_enabled)),
    }
}

/// Build the HTTP state, using Diesel adapters when a pool is configured and
/// in-memory stores otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let support = config.support_system_enabled;
    let login = build_login_service(&config.db_pool);
    let ports = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL adapters");
            build_ports(
                login,
                Adapters {
                    layout: Arc::new(DieselLayoutPreferencesRepository::new(
                        pool.clone(),
                        config.palette.clone(),
                    )),
                    tickets: Arc::new(DieselTicketRepository::new(pool.clone())),
                    audit: Arc::new(DieselAuditLog::new(pool.clone())),
                    features: Arc::new(DieselCustomerFeatureRepository::new(pool.clone())),
                },
                support,
            )
        }
        None => {
            warn!("no database configured; state is kept in memory");
            build_ports(
                login,
                Adapters {
                    layout: Arc::new(InMemoryLayoutPreferences::new(config.palette.clone())),
                    tickets: Arc::new(InMemoryTickets::default()),
                    audit: Arc::new(TracingAuditLog),
                    features: Arc::new(InMemoryCustomerFeatures::new(true)),
                },
                support,
            )
        }
    };
    let hooks = ScriptHooks::default().with_observer(Arc::new(TracingScriptObserver));
    HttpState::new(ports, hooks)
}
