//! Session cookie configuration and validation.
//!
//! Toggles arrive from the layered `PANEL_*` settings. Debug builds fall back
//! to permissive defaults with a warning; release builds require every toggle
//! and a persistent signing key.

use std::path::{Path, PathBuf};

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use zeroize::Zeroize;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const COOKIE_SECURE_SETTING: &str = "session_cookie_secure";
const SAME_SITE_SETTING: &str = "session_same_site";
const ALLOW_EPHEMERAL_SETTING: &str = "session_allow_ephemeral";
const SAME_SITE_EXPECTED: &str = "Strict|Lax|None";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and emit warnings for missing toggles.
    Debug,
    /// Release builds require explicit, valid session toggles.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Raw session toggles as configured. `None` means the toggle was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionToggles {
    /// File holding the cookie signing key material.
    pub key_file: Option<PathBuf>,
    /// Mark cookies `Secure`.
    pub cookie_secure: Option<bool>,
    /// `SameSite` policy name.
    pub same_site: Option<String>,
    /// Allow a generated key when the key file is unreadable.
    pub allow_ephemeral: Option<bool>,
}

/// Session settings derived from configuration toggles.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Configured `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A toggle required in release builds is not set.
    #[error("missing required setting: {name}")]
    MissingSetting { name: &'static str },
    /// A toggle is set to an unsupported value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short for release builds.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` requires secure cookies in release builds.
    #[error("session_same_site=None requires session_cookie_secure=true")]
    InsecureSameSiteNone,
    /// Release builds must not allow ephemeral session keys.
    #[error("session_allow_ephemeral must be false in release builds")]
    EphemeralNotAllowed,
}

/// Validate toggles and load the signing key.
///
/// # Examples
///
/// ```rust
/// use panel::inbound::http::session_config::{BuildMode, SessionToggles, session_settings};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let key_path = dir.path().join("session_key");
/// std::fs::write(&key_path, vec![b'a'; 64])?;
///
/// let toggles = SessionToggles {
///     key_file: Some(key_path),
///     cookie_secure: Some(true),
///     same_site: Some("Strict".to_owned()),
///     allow_ephemeral: Some(false),
/// };
/// let settings = session_settings(&toggles, BuildMode::Release)?;
/// assert!(settings.cookie_secure);
/// # Ok(())
/// # }
/// ```
pub fn session_settings(
    toggles: &SessionToggles,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = cookie_secure(toggles, mode)?;
    let same_site = same_site(toggles, mode, cookie_secure)?;
    let allow_ephemeral = allow_ephemeral(toggles, mode)?;
    let key_path = toggles
        .key_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(SESSION_KEY_DEFAULT_PATH));
    let key = session_key(&key_path, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn required<T>(
    value: Option<T>,
    name: &'static str,
    mode: BuildMode,
    fallback: T,
) -> Result<T, SessionConfigError> {
    match value {
        Some(value) => Ok(value),
        None if mode.is_debug() => {
            warn!("{name} not set; using default");
            Ok(fallback)
        }
        None => Err(SessionConfigError::MissingSetting { name }),
    }
}

fn cookie_secure(toggles: &SessionToggles, mode: BuildMode) -> Result<bool, SessionConfigError> {
    required(toggles.cookie_secure, COOKIE_SECURE_SETTING, mode, true)
}

fn same_site(
    toggles: &SessionToggles,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let default_same_site = if mode.is_debug() {
        SameSite::Lax
    } else {
        SameSite::Strict
    };
    let Some(value) = toggles.same_site.as_deref() else {
        return required(None, SAME_SITE_SETTING, mode, default_same_site);
    };

    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" => {
            if !cookie_secure {
                if !mode.is_debug() {
                    return Err(SessionConfigError::InsecureSameSiteNone);
                }
                warn!("SameSite=None without secure cookies; browsers may reject the cookie");
            }
            Ok(SameSite::None)
        }
        _ if mode.is_debug() => {
            warn!(value, "invalid {SAME_SITE_SETTING}; using default");
            Ok(default_same_site)
        }
        _ => Err(SessionConfigError::InvalidSetting {
            name: SAME_SITE_SETTING,
            value: value.to_owned(),
            expected: SAME_SITE_EXPECTED,
        }),
    }
}

fn allow_ephemeral(toggles: &SessionToggles, mode: BuildMode) -> Result<bool, SessionConfigError> {
    let allow = required(toggles.allow_ephemeral, ALLOW_EPHEMERAL_SETTING, mode, false)?;
    if allow && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    Ok(allow)
}

fn session_key(
    path: &Path,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if mode == BuildMode::Release && length < SESSION_KEY_MIN_LEN {
                bytes.zeroize();
                return Err(SessionConfigError::KeyTooShort {
                    path: path.to_path_buf(),
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                });
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(error) => {
            if mode.is_debug() || allow_ephemeral {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            } else {
                Err(SessionConfigError::KeyRead {
                    path: path.to_path_buf(),
                    source: error,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct KeyDir {
        _dir: TempDir,
        path: PathBuf,
    }

    fn key_file(len: usize) -> KeyDir {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session_key");
        std::fs::write(&path, vec![b'a'; len]).expect("write key");
        KeyDir { _dir: dir, path }
    }

    #[fixture]
    fn release_key() -> KeyDir {
        key_file(SESSION_KEY_MIN_LEN)
    }

    fn release_toggles(key: &KeyDir) -> SessionToggles {
        SessionToggles {
            key_file: Some(key.path.clone()),
            cookie_secure: Some(true),
            same_site: Some("Strict".to_owned()),
            allow_ephemeral: Some(false),
        }
    }

    #[rstest]
    fn release_accepts_complete_toggles(release_key: KeyDir) {
        let settings =
            session_settings(&release_toggles(&release_key), BuildMode::Release).expect("valid");
        assert!(settings.cookie_secure);
        assert_eq!(settings.same_site, SameSite::Strict);
    }

    #[rstest]
    #[case::cookie_secure(COOKIE_SECURE_SETTING)]
    #[case::same_site(SAME_SITE_SETTING)]
    #[case::allow_ephemeral(ALLOW_EPHEMERAL_SETTING)]
    fn release_rejects_missing_toggle(release_key: KeyDir, #[case] missing: &'static str) {
        let mut toggles = release_toggles(&release_key);
        match missing {
            COOKIE_SECURE_SETTING => toggles.cookie_secure = None,
            SAME_SITE_SETTING => toggles.same_site = None,
            _ => toggles.allow_ephemeral = None,
        }
        let err = session_settings(&toggles, BuildMode::Release)
            .err()
            .expect("missing toggle fails");
        assert!(matches!(err, SessionConfigError::MissingSetting { name } if name == missing));
    }

    #[rstest]
    fn release_rejects_unknown_same_site(release_key: KeyDir) {
        let mut toggles = release_toggles(&release_key);
        toggles.same_site = Some("sometimes".to_owned());
        let err = session_settings(&toggles, BuildMode::Release)
            .err()
            .expect("invalid SameSite fails");
        assert!(matches!(err, SessionConfigError::InvalidSetting { .. }));
    }

    #[rstest]
    fn release_rejects_insecure_same_site_none(release_key: KeyDir) {
        let mut toggles = release_toggles(&release_key);
        toggles.cookie_secure = Some(false);
        toggles.same_site = Some("None".to_owned());
        let err = session_settings(&toggles, BuildMode::Release)
            .err()
            .expect("insecure None fails");
        assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
    }

    #[rstest]
    fn release_rejects_ephemeral_keys(release_key: KeyDir) {
        let mut toggles = release_toggles(&release_key);
        toggles.allow_ephemeral = Some(true);
        let err = session_settings(&toggles, BuildMode::Release)
            .err()
            .expect("ephemeral fails");
        assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
    }

    #[rstest]
    fn release_rejects_short_key() {
        let short = key_file(SESSION_KEY_MIN_LEN - 1);
        let err = session_settings(&release_toggles(&short), BuildMode::Release)
            .err()
            .expect("short key fails");
        assert!(matches!(err, SessionConfigError::KeyTooShort { length, .. } if length == 63));
    }

    #[rstest]
    fn release_rejects_missing_key_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let toggles = SessionToggles {
            key_file: Some(dir.path().join("absent")),
            cookie_secure: Some(true),
            same_site: Some("Lax".to_owned()),
            allow_ephemeral: Some(false),
        };
        let err = session_settings(&toggles, BuildMode::Release)
            .err()
            .expect("missing key fails");
        assert!(matches!(err, SessionConfigError::KeyRead { .. }));
    }

    #[rstest]
    fn debug_fills_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let toggles = SessionToggles {
            key_file: Some(dir.path().join("absent")),
            ..SessionToggles::default()
        };
        let settings = session_settings(&toggles, BuildMode::Debug).expect("debug defaults");
        assert!(settings.cookie_secure);
        assert_eq!(settings.same_site, SameSite::Lax);
    }
}
