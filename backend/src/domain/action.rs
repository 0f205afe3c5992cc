//! Decoding of posted action fields into closed enums.
//!
//! Inbound adapters hand over the raw optional fields; the domain decides what
//! they mean. Unknown values are kept as an explicit variant so the services
//! can answer with the right message instead of failing the request.

use super::TicketId;

/// Parse the leading integer of `raw`, the way loosely typed form fields are
/// read by the panel.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Blank or non-numeric input yields `0`. Values outside the
/// `i64` range saturate.
///
/// # Examples
/// ```
/// use panel::domain::coerce_int;
///
/// assert_eq!(coerce_int("42"), 42);
/// assert_eq!(coerce_int(" 12abc"), 12);
/// assert_eq!(coerce_int("-3"), -3);
/// assert_eq!(coerce_int("abc"), 0);
/// assert_eq!(coerce_int(""), 0);
/// ```
pub fn coerce_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Action posted to the layout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutAction {
    /// `changeLayoutColor`, with the posted colour if one was sent.
    ChangeLayoutColor {
        /// Raw `layoutColor` field.
        color: Option<String>,
    },
    /// `changeShowLabels`; `visible` is the coerced flag.
    ChangeShowLabels {
        /// True when `mainMenuShowLabels` parsed to a non-zero integer.
        visible: bool,
    },
    /// Any other `uaction` value.
    Unrecognised {
        /// Value as posted.
        raw: String,
    },
}

impl LayoutAction {
    /// Decode the posted fields. Returns `None` when no `uaction` was sent.
    ///
    /// # Examples
    /// ```
    /// use panel::domain::LayoutAction;
    ///
    /// assert_eq!(LayoutAction::decode(None, Some("blue"), None), None);
    /// assert_eq!(
    ///     LayoutAction::decode(Some("changeShowLabels"), None, Some("1")),
    ///     Some(LayoutAction::ChangeShowLabels { visible: true })
    /// );
    /// ```
    pub fn decode(
        uaction: Option<&str>,
        layout_color: Option<&str>,
        main_menu_show_labels: Option<&str>,
    ) -> Option<Self> {
        let action = uaction?;
        let decoded = match action {
            "changeLayoutColor" => Self::ChangeLayoutColor {
                color: layout_color.map(str::to_owned),
            },
            "changeShowLabels" => Self::ChangeShowLabels {
                visible: coerce_int(main_menu_show_labels.unwrap_or_default()) != 0,
            },
            other => Self::Unrecognised {
                raw: other.to_owned(),
            },
        };
        Some(decoded)
    }
}

/// Deletion requested through the ticket-delete endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketDeletion {
    /// Delete one ticket and its replies.
    Single(TicketId),
    /// Delete every open ticket owned by the principal.
    AllOpen,
    /// Delete every closed ticket owned by the principal.
    AllClosed,
    /// Neither a ticket id nor a known bulk selector was supplied.
    Unrecognised,
}

impl TicketDeletion {
    /// Decode the query parameters. `ticket_id` wins over `delete`.
    ///
    /// # Examples
    /// ```
    /// use panel::domain::{TicketDeletion, TicketId};
    ///
    /// assert_eq!(
    ///     TicketDeletion::decode(Some("9"), Some("open")),
    ///     TicketDeletion::Single(TicketId::new(9))
    /// );
    /// assert_eq!(TicketDeletion::decode(None, Some("closed")), TicketDeletion::AllClosed);
    /// assert_eq!(TicketDeletion::decode(None, Some("all")), TicketDeletion::Unrecognised);
    /// ```
    pub fn decode(ticket_id: Option<&str>, delete: Option<&str>) -> Self {
        if let Some(raw) = ticket_id {
            return Self::Single(TicketId::new(coerce_int(raw)));
        }
        match delete {
            Some("open") => Self::AllOpen,
            Some("closed") => Self::AllClosed,
            _ => Self::Unrecognised,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("17", 17)]
    #[case::leading_space("   8", 8)]
    #[case::plus("+5", 5)]
    #[case::negative("-12x", -12)]
    #[case::trailing_garbage("3.9", 3)]
    #[case::only_sign("-", 0)]
    #[case::words("yes", 0)]
    #[case::blank("", 0)]
    #[case::overflow("99999999999999999999999", i64::MAX)]
    #[case::underflow("-99999999999999999999999", i64::MIN)]
    fn coerce_int_reads_leading_integer(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(coerce_int(raw), expected);
    }

    #[rstest]
    #[case(Some("1"), true)]
    #[case(Some("0"), false)]
    #[case(Some("on"), false)]
    #[case(Some("-1"), true)]
    #[case(None, false)]
    fn show_labels_flag_is_coerced(#[case] raw: Option<&str>, #[case] visible: bool) {
        assert_eq!(
            LayoutAction::decode(Some("changeShowLabels"), None, raw),
            Some(LayoutAction::ChangeShowLabels { visible })
        );
    }

    #[rstest]
    fn change_colour_keeps_missing_colour() {
        assert_eq!(
            LayoutAction::decode(Some("changeLayoutColor"), None, None),
            Some(LayoutAction::ChangeLayoutColor { color: None })
        );
    }

    #[rstest]
    fn unknown_layout_action_keeps_raw_value() {
        assert_eq!(
            LayoutAction::decode(Some("<b>x</b>"), None, None),
            Some(LayoutAction::Unrecognised {
                raw: "<b>x</b>".to_owned()
            })
        );
    }

    #[rstest]
    #[case(Some("abc"), None, TicketDeletion::Single(TicketId::new(0)))]
    #[case(Some("5"), Some("closed"), TicketDeletion::Single(TicketId::new(5)))]
    #[case(None, Some("open"), TicketDeletion::AllOpen)]
    #[case(None, Some("Open"), TicketDeletion::Unrecognised)]
    #[case(None, None, TicketDeletion::Unrecognised)]
    fn ticket_deletion_decoding(
        #[case] ticket_id: Option<&str>,
        #[case] delete: Option<&str>,
        #[case] expected: TicketDeletion,
    ) {
        assert_eq!(TicketDeletion::decode(ticket_id, delete), expected);
    }
}
