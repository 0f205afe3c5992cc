//! Layout settings service.
//!
//! Implements [`LayoutSettingsCommand`] and [`LayoutSettingsQuery`] on top of
//! a [`LayoutPreferencesRepository`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    LayoutActionOutcome, LayoutPreferencesRepository, LayoutPreferencesRepositoryError,
    LayoutSettingsCommand, LayoutSettingsQuery, LayoutView,
};
use crate::domain::{Error, FlashMessage, LayoutAction, Principal, UserId};

pub(crate) const MSG_COLOR_UPDATED: &str = "Layout color successfully updated.";
pub(crate) const MSG_CUSTOMER_COLOR_UPDATED: &str = "Customer's layout color successfully updated.";
pub(crate) const MSG_UNKNOWN_COLOR: &str = "Unknown layout color.";
pub(crate) const MSG_LABELS_UPDATED: &str = "Main menu labels visibility successfully updated.";

/// Layout settings service implementing the layout driving ports.
#[derive(Clone)]
pub struct LayoutSettingsService<R> {
    preferences: Arc<R>,
}

impl<R> LayoutSettingsService<R> {
    /// Create a service over `preferences`.
    pub fn new(preferences: Arc<R>) -> Self {
        Self { preferences }
    }
}

impl<R> LayoutSettingsService<R>
where
    R: LayoutPreferencesRepository,
{
    fn map_repository_error(error: LayoutPreferencesRepositoryError) -> Error {
        match error {
            LayoutPreferencesRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("layout preferences unavailable: {message}"))
            }
            LayoutPreferencesRepositoryError::Query { message } => {
                Error::internal(format!("layout preferences error: {message}"))
            }
        }
    }

    async fn change_color(
        &self,
        principal: &Principal,
        requested: Option<String>,
    ) -> Result<LayoutActionOutcome, Error> {
        let Some(requested) = requested else {
            return Ok(LayoutActionOutcome::message(FlashMessage::error(
                MSG_UNKNOWN_COLOR,
            )));
        };

        let palette = self
            .preferences
            .palette()
            .await
            .map_err(Self::map_repository_error)?;
        let Some(color) = palette.resolve(&requested) else {
            return Ok(LayoutActionOutcome::message(FlashMessage::error(
                MSG_UNKNOWN_COLOR,
            )));
        };

        let stored = self
            .preferences
            .set_layout_color(principal.user_id(), &color)
            .await
            .map_err(Self::map_repository_error)?;
        if !stored {
            return Ok(LayoutActionOutcome::message(FlashMessage::error(
                MSG_UNKNOWN_COLOR,
            )));
        }

        if principal.is_impersonated() {
            return Ok(LayoutActionOutcome::message(FlashMessage::success(
                MSG_CUSTOMER_COLOR_UPDATED,
            )));
        }
        Ok(LayoutActionOutcome {
            flash: FlashMessage::success(MSG_COLOR_UPDATED),
            session_color: Some(color),
        })
    }
}

#[async_trait]
impl<R> LayoutSettingsCommand for LayoutSettingsService<R>
where
    R: LayoutPreferencesRepository,
{
    async fn apply(
        &self,
        principal: &Principal,
        action: LayoutAction,
    ) -> Result<LayoutActionOutcome, Error> {
        match action {
            LayoutAction::ChangeLayoutColor { color } => self.change_color(principal, color).await,
            LayoutAction::ChangeShowLabels { visible } => {
                self.preferences
                    .set_main_menu_labels_visible(principal.user_id(), visible)
                    .await
                    .map_err(Self::map_repository_error)?;
                Ok(LayoutActionOutcome::message(FlashMessage::success(
                    MSG_LABELS_UPDATED,
                )))
            }
            LayoutAction::Unrecognised { raw } => Ok(LayoutActionOutcome::message(
                FlashMessage::error(format!("Unknown action: {raw}")),
            )),
        }
    }
}

#[async_trait]
impl<R> LayoutSettingsQuery for LayoutSettingsService<R>
where
    R: LayoutPreferencesRepository,
{
    async fn view(&self, user_id: UserId) -> Result<LayoutView, Error> {
        let palette = self
            .preferences
            .palette()
            .await
            .map_err(Self::map_repository_error)?;
        let current_color = self
            .preferences
            .layout_color(user_id)
            .await
            .map_err(Self::map_repository_error)?;
        let labels_visible = self
            .preferences
            .main_menu_labels_visible(user_id)
            .await
            .map_err(Self::map_repository_error)?;

        Ok(LayoutView {
            palette,
            current_color,
            labels_visible,
        })
    }
}

#[cfg(test)]
#[path = "layout_service_tests.rs"]
mod tests;
