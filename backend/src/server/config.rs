//! Server configuration assembled by `main`.

use std::net::SocketAddr;

use panel::domain::Palette;
use panel::inbound::http::session_config::SessionSettings;
use panel::outbound::persistence::DbPool;

/// Everything `create_server` needs besides the health probe state.
///
/// Starts on the default theme palette with the support system enabled and no
/// database, which selects the in-memory adapters.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) palette: Palette,
    pub(crate) support_system_enabled: bool,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            palette: Palette::theme_default(),
            support_system_enabled: true,
            db_pool: None,
        }
    }

    /// Colours offered on the layout page.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Global support-system switch.
    #[must_use]
    pub const fn with_support_system(mut self, enabled: bool) -> Self {
        self.support_system_enabled = enabled;
        self
    }

    /// Swap the in-memory stores for Diesel adapters on `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
