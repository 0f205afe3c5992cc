use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{LayoutPreferencesRepository, LayoutPreferencesRepositoryError};
use crate::domain::{LayoutColor, LayoutPreference, Palette, UserId};

use super::lock;

/// Layout settings kept in a map keyed by user.
#[derive(Debug)]
pub struct InMemoryLayoutPreferences {
    palette: Palette,
    rows: Mutex<HashMap<UserId, LayoutPreference>>,
}

impl InMemoryLayoutPreferences {
    /// Empty store offering `palette`.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            rows: Mutex::new(HashMap::new()),
        }
    }

    fn with_row<R>(
        &self,
        user_id: UserId,
        apply: impl FnOnce(&mut LayoutPreference) -> R,
    ) -> Result<R, LayoutPreferencesRepositoryError> {
        let mut rows = lock(
            &self.rows,
            "layout preferences",
            LayoutPreferencesRepositoryError::query,
        )?;
        let row = rows.entry(user_id).or_insert_with(|| LayoutPreference {
            user_id,
            color: self.palette.default_color().clone(),
            main_menu_labels_visible: true,
        });
        Ok(apply(row))
    }

    fn read(
        &self,
        user_id: UserId,
    ) -> Result<Option<LayoutPreference>, LayoutPreferencesRepositoryError> {
        let rows = lock(
            &self.rows,
            "layout preferences",
            LayoutPreferencesRepositoryError::query,
        )?;
        Ok(rows.get(&user_id).cloned())
    }
}

#[async_trait]
impl LayoutPreferencesRepository for InMemoryLayoutPreferences {
    async fn palette(&self) -> Result<Palette, LayoutPreferencesRepositoryError> {
        Ok(self.palette.clone())
    }

    async fn layout_color(
        &self,
        user_id: UserId,
    ) -> Result<LayoutColor, LayoutPreferencesRepositoryError> {
        Ok(self
            .read(user_id)?
            .map_or_else(|| self.palette.default_color().clone(), |row| row.color))
    }

    async fn set_layout_color(
        &self,
        user_id: UserId,
        color: &LayoutColor,
    ) -> Result<bool, LayoutPreferencesRepositoryError> {
        if !self.palette.contains(color) {
            return Ok(false);
        }
        self.with_row(user_id, |row| row.color = color.clone())?;
        Ok(true)
    }

    async fn main_menu_labels_visible(
        &self,
        user_id: UserId,
    ) -> Result<bool, LayoutPreferencesRepositoryError> {
        Ok(self
            .read(user_id)?
            .is_none_or(|row| row.main_menu_labels_visible))
    }

    async fn set_main_menu_labels_visible(
        &self,
        user_id: UserId,
        visible: bool,
    ) -> Result<(), LayoutPreferencesRepositoryError> {
        self.with_row(user_id, |row| row.main_menu_labels_visible = visible)
    }
}
