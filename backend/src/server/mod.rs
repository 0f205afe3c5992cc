//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::time::Duration;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use panel::Trace;
use panel::inbound::http::health::{HealthState, live, ready};
use panel::inbound::http::layout::{show_layout, update_layout};
use panel::inbound::http::session_config::SessionSettings;
use panel::inbound::http::state::HttpState;
use panel::inbound::http::tickets::delete_tickets;
use panel::inbound::http::users::login;

const SESSION_COOKIE: &str = "session";
const SESSION_TTL_HOURS: i64 = 2;

/// Private (encrypted) cookie sessions that expire two hours after the last
/// write.
fn session_middleware(session: &SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), session.key.clone())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(session.cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(session.same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
        )
        .build()
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Customer scripts live under `/client`, matching the redirect targets.
    let client = web::scope("/client")
        .service(show_layout)
        .service(update_layout)
        .service(delete_tickets);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(ready)
        .service(live)
        .service(login)
        .service(client)
        .wrap(session)
        .wrap(Trace)
}

/// Bind the panel server described by `config`.
///
/// The readiness probe flips to ready once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        session, bind_addr, ..
    } = config;

    let app_health = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            app_health.clone(),
            http_state.clone(),
            session_middleware(&session),
        )
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
