//! Server-rendered pages.
//!
//! Markup is built with `maud`, which escapes every interpolated value.

use maud::{DOCTYPE, Markup, html};

use crate::domain::FlashMessage;
use crate::domain::ports::LayoutView;

/// Title of the layout settings page.
pub const LAYOUT_PAGE_TITLE: &str = "Client / Profile / Layout";

/// Render the layout settings page.
///
/// # Examples
/// ```
/// use panel::domain::{FlashMessage, Palette};
/// use panel::domain::ports::LayoutView;
/// use panel::inbound::http::views::render_layout_page;
///
/// let palette = Palette::theme_default();
/// let view = LayoutView {
///     current_color: palette.default_color().clone(),
///     palette,
///     labels_visible: true,
/// };
/// let html = render_layout_page(&view, Some(&FlashMessage::success("<b>ok</b>")));
/// assert!(html.contains("&lt;b&gt;ok&lt;/b&gt;"));
/// ```
pub fn render_layout_page(view: &LayoutView, flash: Option<&FlashMessage>) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (LAYOUT_PAGE_TITLE) }
            }
            body class=(view.current_color.as_str()) {
                h1 { (LAYOUT_PAGE_TITLE) }
                (page_message(flash))
                @if !view.palette.is_empty() {
                    (color_form(view))
                }
                (labels_form(view.labels_visible))
            }
        }
    };
    markup.into_string()
}

fn page_message(flash: Option<&FlashMessage>) -> Markup {
    html! {
        @if let Some(flash) = flash {
            div class={ "message " (flash.severity.as_str()) } { (flash.text) }
        }
    }
}

fn color_form(view: &LayoutView) -> Markup {
    html! {
        form id="layout-colors" method="post" action="/client/layout" {
            h2 { "Layout color" }
            label for="layoutColor" { "Choose layout color" }
            select id="layoutColor" name="layoutColor" {
                @for color in view.palette.iter() {
                    option value=(color.as_str()) selected[*color == view.current_color] { (color.as_str()) }
                }
            }
            input type="hidden" name="uaction" value="changeLayoutColor";
            button type="submit" { "Update" }
        }
    }
}

fn labels_form(visible: bool) -> Markup {
    html! {
        form id="other-settings" method="post" action="/client/layout" {
            h2 { "Other settings" }
            label for="mainMenuShowLabels" { "Show labels for main menu links" }
            select id="mainMenuShowLabels" name="mainMenuShowLabels" {
                option value="1" selected[visible] { "Enabled" }
                option value="0" selected[!visible] { "Disabled" }
            }
            input type="hidden" name="uaction" value="changeShowLabels";
            button type="submit" { "Update" }
        }
    }
}
