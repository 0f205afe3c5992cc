//! Driving ports for the layout page.
//!
//! [`LayoutSettingsCommand`] applies a posted action; [`LayoutSettingsQuery`]
//! reads back what the page needs to render. The HTTP adapter always calls the
//! query after the command so the page reflects stored state.

use async_trait::async_trait;

use crate::domain::{Error, FlashMessage, LayoutAction, LayoutColor, Palette, Principal, UserId};

/// Result of applying a [`LayoutAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutActionOutcome {
    /// Message for the rendered page.
    pub flash: FlashMessage,
    /// Colour to mirror into the session cache, set only when a
    /// non-impersonated principal changed their colour.
    pub session_color: Option<LayoutColor>,
}

impl LayoutActionOutcome {
    /// Outcome that touches nothing but the page message.
    pub fn message(flash: FlashMessage) -> Self {
        Self {
            flash,
            session_color: None,
        }
    }
}

/// Everything the layout page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutView {
    /// Selectable colours.
    pub palette: Palette,
    /// Colour currently stored for the user.
    pub current_color: LayoutColor,
    /// Whether main-menu labels are shown.
    pub labels_visible: bool,
}

/// Applies layout actions on behalf of a principal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LayoutSettingsCommand: Send + Sync {
    /// Apply `action`. Validation problems come back as error flashes, not as
    /// `Err`; `Err` is reserved for infrastructure failures.
    async fn apply(
        &self,
        principal: &Principal,
        action: LayoutAction,
    ) -> Result<LayoutActionOutcome, Error>;
}

/// Reads the layout page state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LayoutSettingsQuery: Send + Sync {
    /// Current layout settings for `user_id`.
    async fn view(&self, user_id: UserId) -> Result<LayoutView, Error>;
}
