//! PostgreSQL-backed `LayoutPreferencesRepository`.
//!
//! Settings live in `user_gui_props`, one row per customer, created on first
//! write. The palette is configuration, not data, and is held in memory.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LayoutPreferencesRepository, LayoutPreferencesRepositoryError};
use crate::domain::{LayoutColor, Palette, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewLayoutColorRow, NewMenuLabelsRow, UserGuiPropsRow};
use super::pool::DbPool;
use super::schema::user_gui_props;

/// Diesel-backed layout settings store.
#[derive(Clone)]
pub struct DieselLayoutPreferencesRepository {
    pool: DbPool,
    palette: Palette,
}

impl DieselLayoutPreferencesRepository {
    /// Create a repository over `pool` offering `palette`.
    pub fn new(pool: DbPool, palette: Palette) -> Self {
        Self { pool, palette }
    }

    async fn find_row(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserGuiPropsRow>, LayoutPreferencesRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        user_gui_props::table
            .find(user_id.get())
            .select(UserGuiPropsRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }
}

#[async_trait]
impl LayoutPreferencesRepository for DieselLayoutPreferencesRepository {
    async fn palette(&self) -> Result<Palette, LayoutPreferencesRepositoryError> {
        Ok(self.palette.clone())
    }

    async fn layout_color(
        &self,
        user_id: UserId,
    ) -> Result<LayoutColor, LayoutPreferencesRepositoryError> {
        let stored = self
            .find_row(user_id)
            .await?
            .and_then(|row| row.layout_color)
            .and_then(|name| self.palette.resolve(&name));
        Ok(stored.unwrap_or_else(|| self.palette.default_color().clone()))
    }

    async fn set_layout_color(
        &self,
        user_id: UserId,
        color: &LayoutColor,
    ) -> Result<bool, LayoutPreferencesRepositoryError> {
        if !self.palette.contains(color) {
            return Ok(false);
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewLayoutColorRow {
            user_id: user_id.get(),
            layout_color: color.as_str(),
        };
        diesel::insert_into(user_gui_props::table)
            .values(&row)
            .on_conflict(user_gui_props::user_id)
            .do_update()
            .set(user_gui_props::layout_color.eq(excluded(user_gui_props::layout_color)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(true)
    }

    async fn main_menu_labels_visible(
        &self,
        user_id: UserId,
    ) -> Result<bool, LayoutPreferencesRepositoryError> {
        Ok(self
            .find_row(user_id)
            .await?
            .is_none_or(|row| row.show_main_menu_labels))
    }

    async fn set_main_menu_labels_visible(
        &self,
        user_id: UserId,
        visible: bool,
    ) -> Result<(), LayoutPreferencesRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewMenuLabelsRow {
            user_id: user_id.get(),
            show_main_menu_labels: visible,
        };
        diesel::insert_into(user_gui_props::table)
            .values(&row)
            .on_conflict(user_gui_props::user_id)
            .do_update()
            .set(
                user_gui_props::show_main_menu_labels
                    .eq(excluded(user_gui_props::show_main_menu_labels)),
            )
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
