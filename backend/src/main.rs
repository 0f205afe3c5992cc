//! Panel entry-point: loads settings, prepares storage and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use panel::inbound::http::health::HealthState;
use panel::inbound::http::session_config::{BuildMode, session_settings};
use panel::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use panel::settings::PanelSettings;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = PanelSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let session = session_settings(
        &settings.session_toggles(),
        BuildMode::from_debug_assertions(),
    )
    .wrap_err("invalid session configuration")?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(session, bind_addr)
        .with_palette(settings.palette()?)
        .with_support_system(settings.support_system_enabled);

    if let Some(url) = settings.database_url.as_deref() {
        run_pending_migrations(url)
            .await
            .wrap_err("database migrations failed")?;
        let pool = DbPool::new(PoolConfig::new(url))
            .await
            .wrap_err("database pool setup failed")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "panel listening");
    server.await?;
    Ok(())
}
