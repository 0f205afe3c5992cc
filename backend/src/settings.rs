//! Panel configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, a configuration file, `PANEL_*` environment
//! variables and command-line flags.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DEFAULT_LAYOUT_COLOR, LayoutColor, LayoutValidationError, Palette};
use crate::inbound::http::session_config::SessionToggles;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The palette or its default colour is malformed.
    #[error("invalid layout palette: {0}")]
    Palette(#[from] LayoutValidationError),
}

/// Runtime settings for the panel server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PANEL")]
pub struct PanelSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. In-memory adapters are used when absent.
    pub database_url: Option<String>,
    /// Comma-separated layout colours offered to customers.
    pub palette: Option<String>,
    /// Colour used when a customer has not chosen one.
    pub default_layout_color: Option<String>,
    /// Global switch for the support ticket system.
    #[ortho_config(default = true)]
    pub support_system_enabled: bool,
    /// File holding the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`.
    pub session_cookie_secure: Option<bool>,
    /// `SameSite` policy for session cookies.
    pub session_same_site: Option<String>,
    /// Allow a generated session key when the key file is unreadable.
    pub session_allow_ephemeral: Option<bool>,
}

impl PanelSettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured palette, or the theme palette when none is set.
    ///
    /// Without an explicit default colour, `black` is used when offered and
    /// the first listed colour otherwise. An empty list yields an empty
    /// palette.
    pub fn palette(&self) -> Result<Palette, SettingsError> {
        let Some(raw) = self.palette.as_deref() else {
            return Ok(Palette::theme_default());
        };
        let colors = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(LayoutColor::new)
            .collect::<Result<Vec<_>, _>>()?;

        let default = match self.default_layout_color.as_deref() {
            Some(name) => LayoutColor::new(name.trim())?,
            None => {
                let fallback = LayoutColor::new(DEFAULT_LAYOUT_COLOR)?;
                if colors.is_empty() || colors.contains(&fallback) {
                    fallback
                } else {
                    colors[0].clone()
                }
            }
        };
        Ok(Palette::new(colors, default)?)
    }

    /// Session toggles for [`session_settings`](crate::inbound::http::session_config::session_settings).
    pub fn session_toggles(&self) -> SessionToggles {
        SessionToggles {
            key_file: self.session_key_file.clone(),
            cookie_secure: self.session_cookie_secure,
            same_site: self.session_same_site.clone(),
            allow_ephemeral: self.session_allow_ephemeral,
        }
    }
}
