//! Authenticated principal model.
//!
//! A [`Principal`] is the actor behind a request: a customer acting on their
//! own account, or an administrator or reseller impersonating that customer
//! (the "su" identity). Handlers only ever see the customer's [`UserId`]; the
//! impersonator is kept for message wording and audit lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors for principal components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrincipalValidationError {
    /// User ids are strictly positive.
    #[error("user id must be a positive integer")]
    InvalidUserId,
    /// Usernames must contain a visible character.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Numeric account identifier.
///
/// # Examples
/// ```
/// use panel::domain::UserId;
///
/// let id = UserId::new(7).expect("positive id");
/// assert_eq!(id.get(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: i64) -> Result<Self, PrincipalValidationError> {
        if raw <= 0 {
            return Err(PrincipalValidationError::InvalidUserId);
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = PrincipalValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Kind of account a session was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    /// Panel administrator.
    Admin,
    /// Reseller managing customers.
    Reseller,
    /// Hosting customer.
    User,
}

/// Administrator or reseller acting on behalf of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impersonator {
    name: String,
}

impl Impersonator {
    /// Build an impersonator record from the acting account's name.
    pub fn new(name: impl Into<String>) -> Result<Self, PrincipalValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PrincipalValidationError::EmptyUsername);
        }
        Ok(Self { name })
    }

    /// Name of the acting account.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Actor resolved from the session for the duration of one request.
///
/// # Examples
/// ```
/// use panel::domain::{IdentityKind, Impersonator, Principal, UserId};
///
/// let id = UserId::new(7).expect("positive id");
/// let user = Principal::new(id, "jdoe", IdentityKind::User).expect("valid principal");
/// assert!(!user.is_impersonated());
/// assert_eq!(user.processor_name(), "jdoe");
///
/// let su = user.impersonated_by(Impersonator::new("admin").expect("valid name"));
/// assert!(su.is_impersonated());
/// assert_eq!(su.processor_name(), "admin as jdoe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    user_id: UserId,
    username: String,
    kind: IdentityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impersonator: Option<Impersonator>,
}

impl Principal {
    /// Build a principal acting on its own account.
    pub fn new(
        user_id: UserId,
        username: impl Into<String>,
        kind: IdentityKind,
    ) -> Result<Self, PrincipalValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(PrincipalValidationError::EmptyUsername);
        }
        Ok(Self {
            user_id,
            username,
            kind,
            impersonator: None,
        })
    }

    /// Mark this principal as operated by `impersonator`.
    #[must_use]
    pub fn impersonated_by(mut self, impersonator: Impersonator) -> Self {
        self.impersonator = Some(impersonator);
        self
    }

    /// Account the request acts on.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Login name of the account the request acts on.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Identity kind of the account.
    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    /// Impersonating account, if any.
    pub fn impersonator(&self) -> Option<&Impersonator> {
        self.impersonator.as_ref()
    }

    /// True when an administrator or reseller is acting as this user.
    pub fn is_impersonated(&self) -> bool {
        self.impersonator.is_some()
    }

    /// Name recorded in audit lines for actions taken by this principal.
    pub fn processor_name(&self) -> String {
        match &self.impersonator {
            Some(su) => format!("{} as {}", su.name(), self.username),
            None => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn user_id_rejects_non_positive(#[case] raw: i64) {
        assert_eq!(UserId::new(raw), Err(PrincipalValidationError::InvalidUserId));
    }

    #[rstest]
    fn principal_rejects_blank_username() {
        let id = UserId::new(1).expect("valid id");
        let result = Principal::new(id, "  ", IdentityKind::User);
        assert_eq!(result, Err(PrincipalValidationError::EmptyUsername));
    }

    #[rstest]
    fn principal_serde_round_trip_keeps_impersonator() {
        let principal = Principal::new(UserId::new(7).expect("id"), "jdoe", IdentityKind::User)
            .expect("principal")
            .impersonated_by(Impersonator::new("reseller1").expect("impersonator"));

        let json = serde_json::to_string(&principal).expect("serialise");
        let parsed: Principal = serde_json::from_str(&json).expect("deserialise");

        assert_eq!(parsed, principal);
        assert_eq!(parsed.processor_name(), "reseller1 as jdoe");
    }

    #[rstest]
    fn principal_rejects_zero_user_id_on_deserialise() {
        let json = r#"{"userId":0,"username":"jdoe","kind":"user"}"#;
        let parsed: Result<Principal, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
