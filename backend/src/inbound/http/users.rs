//! Login handler.
//!
//! ```text
//! POST /login {"username":"jdoe","password":"password"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Authenticate and bind the resulting principal to the session cookie.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let principal = state.login.authenticate(&credentials).await?;
    session.persist_principal(&principal)?;
    info!(
        user_id = %principal.user_id(),
        kind = ?principal.kind(),
        impersonated = principal.is_impersonated(),
        "session established"
    );
    Ok(HttpResponse::Ok().finish())
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let code = match err {
        LoginValidationError::EmptyUsername => "empty_username",
        LoginValidationError::EmptyPassword => "empty_password",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": code }))
}
