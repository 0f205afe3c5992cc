//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{log, tickets, user_gui_props};

/// Row read from `user_gui_props`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_gui_props)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserGuiPropsRow {
    pub layout_color: Option<String>,
    pub show_main_menu_labels: bool,
}

/// Insertable used to create a `user_gui_props` row with a colour.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_gui_props)]
pub(crate) struct NewLayoutColorRow<'a> {
    pub user_id: i64,
    pub layout_color: &'a str,
}

/// Insertable used to create a `user_gui_props` row with a label flag.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_gui_props)]
pub(crate) struct NewMenuLabelsRow {
    pub user_id: i64,
    pub show_main_menu_labels: bool,
}

/// Row read from `tickets`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketRow {
    pub ticket_id: i64,
    pub ticket_reply: Option<i64>,
    pub ticket_from: i64,
    pub ticket_to: i64,
    pub ticket_status: i32,
    pub ticket_subject: String,
}

/// Insertable for `log`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = log)]
pub(crate) struct NewLogRow<'a> {
    pub log_time: DateTime<Utc>,
    pub log_message: &'a str,
}
