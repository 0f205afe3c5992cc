//! Shared harness for HTTP integration tests.
//!
//! Builds the panel routes over in-memory adapters and a scripted login
//! service so tests can act as plain or impersonated customers.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{App, HttpResponse, test, web};
use async_trait::async_trait;

use panel::Trace;
use panel::domain::ports::LoginService;
use panel::domain::{
    CustomerFeatureService, Error, IdentityKind, Impersonator, LayoutColor, LayoutSettingsService,
    LoginCredentials, Palette, Principal, ScriptHooks, Ticket, TicketDeletionService, TicketId,
    TicketStatus, TracingScriptObserver, UserId,
};
use panel::inbound::http::layout::{show_layout, update_layout};
use panel::inbound::http::session::SessionContext;
use panel::inbound::http::state::{HttpState, HttpStatePorts};
use panel::inbound::http::tickets::delete_tickets;
use panel::inbound::http::users::{LoginRequest, login};
use panel::outbound::memory::{
    InMemoryAuditLog, InMemoryCustomerFeatures, InMemoryLayoutPreferences, InMemoryTickets,
};

pub const CUSTOMER: i64 = 7;
pub const OTHER_CUSTOMER: i64 = 8;

/// Accounts understood by [`ScriptedLogin`], all with password `password`.
///
/// - `jdoe`: customer 7.
/// - `admin-as-jdoe`: administrator `admin` acting as customer 7.
/// - `neighbour`: customer 8.
/// - `admin`: administrator 1.
pub struct ScriptedLogin;

#[async_trait]
impl LoginService for ScriptedLogin {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error> {
        if credentials.password() != "password" {
            return Err(Error::unauthorized("invalid credentials"));
        }
        let user = |id: i64, name: &str, kind: IdentityKind| {
            let id = UserId::new(id).map_err(|err| Error::internal(err.to_string()))?;
            Principal::new(id, name, kind).map_err(|err| Error::internal(err.to_string()))
        };
        match credentials.username() {
            "jdoe" => user(CUSTOMER, "jdoe", IdentityKind::User),
            "admin-as-jdoe" => {
                let su = Impersonator::new("admin").map_err(|err| Error::internal(err.to_string()))?;
                Ok(user(CUSTOMER, "jdoe", IdentityKind::User)?.impersonated_by(su))
            }
            "neighbour" => user(OTHER_CUSTOMER, "neighbour", IdentityKind::User),
            "admin" => user(1, "admin", IdentityKind::Admin),
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}

/// In-memory stores shared between the app and test assertions.
pub struct World {
    pub layout: Arc<InMemoryLayoutPreferences>,
    pub tickets: Arc<InMemoryTickets>,
    pub audit: Arc<InMemoryAuditLog>,
    pub features: Arc<InMemoryCustomerFeatures>,
    pub support_system_enabled: bool,
    key: Key,
}

impl World {
    /// Stores with `palette`, no tickets and support enabled for everyone.
    pub fn new(palette: Palette) -> Self {
        Self {
            layout: Arc::new(InMemoryLayoutPreferences::new(palette)),
            tickets: Arc::new(InMemoryTickets::default()),
            audit: Arc::new(InMemoryAuditLog::default()),
            features: Arc::new(InMemoryCustomerFeatures::new(true)),
            support_system_enabled: true,
            key: Key::generate(),
        }
    }

    #[must_use]
    pub fn with_tickets(mut self, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        self.tickets = Arc::new(InMemoryTickets::with_tickets(tickets));
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: InMemoryCustomerFeatures) -> Self {
        self.features = Arc::new(features);
        self
    }

    #[must_use]
    pub fn with_support_system(mut self, enabled: bool) -> Self {
        self.support_system_enabled = enabled;
        self
    }

    pub fn state(&self) -> HttpState {
        let layout = Arc::new(LayoutSettingsService::new(self.layout.clone()));
        let ports = HttpStatePorts {
            login: Arc::new(ScriptedLogin),
            layout: layout.clone(),
            layout_query: layout,
            ticket_deletion: Arc::new(TicketDeletionService::new(
                self.tickets.clone(),
                self.audit.clone(),
            )),
            entitlements: Arc::new(CustomerFeatureService::new(
                self.features.clone(),
                self.support_system_enabled,
            )),
        };
        HttpState::new(
            ports,
            ScriptHooks::default().with_observer(Arc::new(TracingScriptObserver)),
        )
    }

    pub fn app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state()))
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
                    .cookie_name("session".to_owned())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(Trace)
            .service(login)
            .service(
                web::scope("/client")
                    .service(show_layout)
                    .service(update_layout)
                    .service(delete_tickets),
            )
            .route(
                "/session/theme",
                web::get().to(|session: SessionContext| async move {
                    let theme = session.theme_color()?.unwrap_or_default();
                    Ok::<_, Error>(HttpResponse::Ok().body(theme))
                }),
            )
    }
}

pub fn color(name: &str) -> LayoutColor {
    LayoutColor::new(name).expect("valid colour")
}

pub fn palette(names: &[&str]) -> Palette {
    let colors = names.iter().map(|name| color(name)).collect();
    Palette::new(colors, color(names[0])).expect("palette")
}

pub fn user(id: i64) -> UserId {
    UserId::new(id).expect("valid user id")
}

pub fn ticket(id: i64, owner: i64, status: TicketStatus, reply_to: Option<i64>) -> Ticket {
    Ticket {
        id: TicketId::new(id),
        from: user(owner),
        to: user(1),
        status,
        reply_to: reply_to.map(TicketId::new),
        subject: format!("ticket {id}"),
    }
}

pub fn login_request(username: &str) -> test::TestRequest {
    test::TestRequest::post().uri("/login").set_json(&LoginRequest {
        username: username.to_owned(),
        password: "password".to_owned(),
    })
}

/// Latest session cookie set by `res`.
pub fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

pub async fn body_text(res: ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).expect("utf8 body")
}
