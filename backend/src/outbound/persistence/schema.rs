//! Diesel table definitions for the panel schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Per-user interface settings.
    user_gui_props (user_id) {
        /// Owning customer account.
        user_id -> Int8,
        /// Selected layout colour; `NULL` means the palette default.
        layout_color -> Nullable<Varchar>,
        /// Whether the main menu shows text labels.
        show_main_menu_labels -> Bool,
    }
}

diesel::table! {
    /// Support tickets and their replies.
    tickets (ticket_id) {
        /// Primary key.
        ticket_id -> Int8,
        /// Parent ticket for replies; `NULL` for thread roots.
        ticket_reply -> Nullable<Int8>,
        /// Sending account.
        ticket_from -> Int8,
        /// Receiving account.
        ticket_to -> Int8,
        /// Status code: `0` closed, anything else open.
        ticket_status -> Int4,
        /// Subject line.
        ticket_subject -> Varchar,
        /// Creation timestamp.
        ticket_date -> Timestamptz,
    }
}

diesel::table! {
    /// Administrative audit log.
    log (log_id) {
        /// Primary key.
        log_id -> Int8,
        /// Time the line was written.
        log_time -> Timestamptz,
        /// Human-readable line.
        log_message -> Text,
    }
}

diesel::table! {
    /// Customer hosting accounts; only the feature switches are mapped.
    domain (domain_id) {
        /// Primary key.
        domain_id -> Int8,
        /// Customer account owning the domain.
        domain_admin_id -> Int8,
        /// Support system switch: `yes` or `no`.
        domain_support -> Varchar,
    }
}
