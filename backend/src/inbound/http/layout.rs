//! Layout settings page handlers.
//!
//! ```text
//! GET  /client/layout
//! POST /client/layout  uaction=changeLayoutColor&layoutColor=blue
//! POST /client/layout  uaction=changeShowLabels&mainMenuShowLabels=0
//! ```

use actix_web::{HttpResponse, get, http::header::ContentType, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{ClientScript, LayoutAction, Principal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::render_layout_page;

/// Form posted by the layout page. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutForm {
    pub uaction: Option<String>,
    pub layout_color: Option<String>,
    pub main_menu_show_labels: Option<String>,
}

impl LayoutForm {
    fn action(&self) -> Option<LayoutAction> {
        LayoutAction::decode(
            self.uaction.as_deref(),
            self.layout_color.as_deref(),
            self.main_menu_show_labels.as_deref(),
        )
    }
}

/// Render the layout page for the signed-in customer.
#[get("/layout")]
pub async fn show_layout(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_principal()?;
    state.hooks.script_start(ClientScript::Layout, &principal);
    let response = render(&state, &session, &principal).await?;
    state.hooks.script_end(ClientScript::Layout, &principal);
    Ok(response)
}

/// Apply a posted layout action, then render the page from stored state.
#[post("/layout")]
pub async fn update_layout(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LayoutForm>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_principal()?;
    state.hooks.script_start(ClientScript::Layout, &principal);

    if let Some(action) = form.action() {
        debug!(user_id = %principal.user_id(), ?action, "applying layout action");
        let outcome = state.layout.apply(&principal, action).await?;
        if let Some(color) = &outcome.session_color {
            session.set_theme_color(color)?;
        }
        session.set_flash(outcome.flash)?;
    }

    let response = render(&state, &session, &principal).await?;
    state.hooks.script_end(ClientScript::Layout, &principal);
    Ok(response)
}

async fn render(
    state: &HttpState,
    session: &SessionContext,
    principal: &Principal,
) -> ApiResult<HttpResponse> {
    let view = state.layout_query.view(principal.user_id()).await?;
    let flash = session.take_flash()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_layout_page(&view, flash.as_ref())))
}
