//! Login credentials accepted by the development login surface.
//!
//! Handlers build [`LoginCredentials`] from the posted payload before talking
//! to the [`LoginService`](super::ports::LoginService) port, so the port never
//! sees blank input.

use std::fmt;

use zeroize::Zeroizing;

/// Reasons a login payload is rejected before authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl LoginValidationError {
    /// Name of the payload field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
        }
    }
}

/// Validated username/password pair.
///
/// The username is trimmed; the password is kept verbatim and wiped from
/// memory on drop.
///
/// # Examples
/// ```
/// use panel::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" jdoe ", "s3cret").expect("valid credentials");
/// assert_eq!(creds.username(), "jdoe");
/// assert_eq!(creds.password(), "s3cret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Account name to authenticate.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case(" \t", "pw", LoginValidationError::EmptyUsername)]
    #[case("jdoe", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("blank input must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn password_whitespace_is_preserved() {
        let creds = LoginCredentials::try_from_parts("jdoe", " pw ").expect("valid");
        assert_eq!(creds.password(), " pw ");
    }

    #[rstest]
    fn debug_output_hides_password() {
        let creds = LoginCredentials::try_from_parts("jdoe", "hunter2").expect("valid");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("jdoe"));
        assert!(!rendered.contains("hunter2"));
    }

    #[rstest]
    fn field_names_match_payload() {
        assert_eq!(LoginValidationError::EmptyUsername.field(), "username");
        assert_eq!(LoginValidationError::EmptyPassword.field(), "password");
    }
}
