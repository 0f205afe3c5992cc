//! Port for per-user layout settings storage.
//!
//! The repository owns the palette: it knows which colours exist and refuses
//! to persist anything else.

use async_trait::async_trait;

use crate::domain::{LayoutColor, Palette, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by layout preference adapters.
    pub enum LayoutPreferencesRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "layout preferences connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "layout preferences query failed: {message}",
    }
}

/// Storage contract for layout colour and main-menu label visibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LayoutPreferencesRepository: Send + Sync {
    /// Selectable colours, in theme order.
    async fn palette(&self) -> Result<Palette, LayoutPreferencesRepositoryError>;

    /// Stored colour for `user_id`, or the palette default when none is set.
    async fn layout_color(
        &self,
        user_id: UserId,
    ) -> Result<LayoutColor, LayoutPreferencesRepositoryError>;

    /// Persist `color` for `user_id`.
    ///
    /// Returns `false`, leaving the stored value untouched, when the colour is
    /// not part of the palette.
    async fn set_layout_color(
        &self,
        user_id: UserId,
        color: &LayoutColor,
    ) -> Result<bool, LayoutPreferencesRepositoryError>;

    /// Whether the main menu shows labels. Defaults to `true`.
    async fn main_menu_labels_visible(
        &self,
        user_id: UserId,
    ) -> Result<bool, LayoutPreferencesRepositoryError>;

    /// Persist the main-menu label visibility for `user_id`.
    async fn set_main_menu_labels_visible(
        &self,
        user_id: UserId,
        visible: bool,
    ) -> Result<(), LayoutPreferencesRepositoryError>;
}

/// Stateless repository exposing the theme palette and default values.
///
/// Writes are accepted for palette members and then forgotten.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLayoutPreferencesRepository;

#[async_trait]
impl LayoutPreferencesRepository for FixtureLayoutPreferencesRepository {
    async fn palette(&self) -> Result<Palette, LayoutPreferencesRepositoryError> {
        Ok(Palette::theme_default())
    }

    async fn layout_color(
        &self,
        _user_id: UserId,
    ) -> Result<LayoutColor, LayoutPreferencesRepositoryError> {
        Ok(Palette::theme_default().default_color().clone())
    }

    async fn set_layout_color(
        &self,
        _user_id: UserId,
        color: &LayoutColor,
    ) -> Result<bool, LayoutPreferencesRepositoryError> {
        Ok(Palette::theme_default().contains(color))
    }

    async fn main_menu_labels_visible(
        &self,
        _user_id: UserId,
    ) -> Result<bool, LayoutPreferencesRepositoryError> {
        Ok(true)
    }

    async fn set_main_menu_labels_visible(
        &self,
        _user_id: UserId,
        _visible: bool,
    ) -> Result<(), LayoutPreferencesRepositoryError> {
        Ok(())
    }
}
