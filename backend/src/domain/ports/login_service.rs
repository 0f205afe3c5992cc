//! Driving port for login.
//!
//! Inbound adapters call [`LoginService`] to turn credentials into a
//! [`Principal`] without knowing where accounts live. Handler tests substitute
//! their own implementation.

use async_trait::async_trait;

use crate::domain::{Error, IdentityKind, LoginCredentials, Principal, UserId};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated principal.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error>;
}

/// Development authenticator with two built-in accounts.
///
/// `jdoe` / `password` signs in customer 7 and `admin` / `password` signs in
/// administrator 1. Anything else is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

impl FixtureLoginService {
    const PASSWORD: &'static str = "password";

    fn account(username: &str) -> Option<(i64, IdentityKind)> {
        match username {
            "jdoe" => Some((7, IdentityKind::User)),
            "admin" => Some((1, IdentityKind::Admin)),
            _ => None,
        }
    }
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error> {
        let Some((id, kind)) = Self::account(credentials.username()) else {
            return Err(Error::unauthorized("invalid credentials"));
        };
        if credentials.password() != Self::PASSWORD {
            return Err(Error::unauthorized("invalid credentials"));
        }
        let user_id = UserId::new(id)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        Principal::new(user_id, credentials.username(), kind)
            .map_err(|err| Error::internal(format!("invalid fixture principal: {err}")))
    }
}

/// Authenticator used when no account store is wired in.
///
/// Every attempt fails with `ServiceUnavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLoginService;

#[async_trait]
impl LoginService for DisabledLoginService {
    async fn authenticate(&self, _credentials: &LoginCredentials) -> Result<Principal, Error> {
        Err(Error::service_unavailable("password login is not configured"))
    }
}
