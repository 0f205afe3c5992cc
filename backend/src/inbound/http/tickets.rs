//! Ticket deletion handler.
//!
//! ```text
//! GET /client/ticket_delete?ticket_id=42
//! GET /client/ticket_delete?delete=open
//! GET /client/ticket_delete?delete=closed
//! ```
//!
//! Every accepted request ends in `303 See Other` with the outcome queued as a
//! page message for the listing it lands on.

use actix_web::{HttpResponse, get, http::header, web};
use serde::Deserialize;

use crate::domain::ports::CustomerFeature;
use crate::domain::{ClientScript, Error, TicketDeletion};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query string accepted by the delete endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TicketDeleteQuery {
    pub ticket_id: Option<String>,
    pub delete: Option<String>,
}

/// Delete one ticket thread or every thread in a status bucket.
#[get("/ticket_delete")]
pub async fn delete_tickets(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<TicketDeleteQuery>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_principal()?;
    state.hooks.script_start(ClientScript::TicketDelete, &principal);

    let feature = CustomerFeature::Support;
    if !state
        .entitlements
        .has_feature(principal.user_id(), feature)
        .await?
    {
        return Err(Error::feature_unavailable(feature));
    }

    let request = TicketDeletion::decode(query.ticket_id.as_deref(), query.delete.as_deref());
    let result = state.ticket_deletion.delete(&principal, request).await?;
    session.set_flash(result.flash)?;

    let response = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, result.redirect.path()))
        .finish();
    state.hooks.script_end(ClientScript::TicketDelete, &principal);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::ports::{
        FixtureLoginService, MockFeatureEntitlements, MockLayoutSettingsCommand,
        MockLayoutSettingsQuery, MockTicketDeletionCommand,
    };
    use crate::domain::{
        ActionResult, FlashMessage, IdentityKind, Principal, RedirectTarget, ScriptHooks,
        TicketId, UserId,
    };
    use crate::inbound::http::state::HttpStatePorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    fn entitlements(support: bool) -> MockFeatureEntitlements {
        let mut mock = MockFeatureEntitlements::new();
        mock.expect_has_feature()
            .withf(|_, feature| *feature == CustomerFeature::Support)
            .returning(move |_, _| Ok(support));
        mock
    }

    fn state(command: MockTicketDeletionCommand, support: bool) -> HttpState {
        let ports = HttpStatePorts {
            login: Arc::new(FixtureLoginService),
            layout: Arc::new(MockLayoutSettingsCommand::new()),
            layout_query: Arc::new(MockLayoutSettingsQuery::new()),
            ticket_deletion: Arc::new(command),
            entitlements: Arc::new(entitlements(support)),
        };
        HttpState::new(ports, ScriptHooks::default())
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/sign-in",
                web::get().to(|session: SessionContext| async move {
                    let id = UserId::new(7).expect("fixture id");
                    let principal =
                        Principal::new(id, "jdoe", IdentityKind::User).expect("principal");
                    session.persist_principal(&principal)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .service(web::scope("/client").service(delete_tickets))
    }

    async fn call_signed_in(state: HttpState, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(test_app(state)).await;
        let signed_in = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/sign-in").to_request(),
        )
        .await;
        let cookie = signed_in
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(|cookie| cookie.into_owned())
            .expect("session cookie");
        actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(uri)
                .cookie(cookie)
                .to_request(),
        )
        .await
    }

    #[rstest]
    #[case("/client/ticket_delete?ticket_id=12", TicketDeletion::Single(TicketId::new(12)), RedirectTarget::TicketClosed)]
    #[case("/client/ticket_delete?delete=open", TicketDeletion::AllOpen, RedirectTarget::TicketSystem)]
    #[case("/client/ticket_delete?delete=closed", TicketDeletion::AllClosed, RedirectTarget::TicketClosed)]
    #[case("/client/ticket_delete?ticket_id=abc&delete=open", TicketDeletion::Single(TicketId::new(0)), RedirectTarget::TicketSystem)]
    #[case("/client/ticket_delete", TicketDeletion::Unrecognised, RedirectTarget::TicketSystem)]
    #[actix_web::test]
    async fn decoded_request_is_dispatched_and_redirected(
        #[case] uri: &str,
        #[case] expected: TicketDeletion,
        #[case] redirect: RedirectTarget,
    ) {
        let mut command = MockTicketDeletionCommand::new();
        command
            .expect_delete()
            .withf(move |principal, request| {
                principal.user_id().get() == 7 && *request == expected
            })
            .times(1)
            .returning(move |_, _| Ok(ActionResult::new(FlashMessage::success("done"), redirect)));

        let res = call_signed_in(state(command, true), uri).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some(redirect.path()));
    }

    #[actix_web::test]
    async fn customers_without_support_get_bad_request() {
        let mut command = MockTicketDeletionCommand::new();
        command.expect_delete().times(0);

        let res = call_signed_in(state(command, false), "/client/ticket_delete?delete=open").await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(res).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn anonymous_requests_are_unauthorised() {
        let mut command = MockTicketDeletionCommand::new();
        command.expect_delete().times(0);
        let app = actix_test::init_service(test_app(state(command, true))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/client/ticket_delete?ticket_id=1")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
