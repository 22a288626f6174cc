//! Status bar
//!
//! One-line chrome at the bottom: transient status message on the left,
//! key hints and the dirty indicator on the right.

use gpui::*;

use crate::app::Stencil;
use crate::navigation::Screen;
use crate::theme::TokenKey;

pub const STATUS_BAR_HEIGHT: f32 = 26.0;

pub fn render_status_bar(app: &Stencil) -> impl IntoElement {
    let status_bg = app.token(TokenKey::StatusBg);
    let status_text = app.token(TokenKey::StatusText);
    let status_muted = app.token(TokenKey::StatusTextMuted);
    let warn = app.token(TokenKey::Warn);

    let hints = if app.mode.is_overlay() {
        "enter confirm \u{00b7} esc dismiss"
    } else {
        match app.current_screen() {
            Screen::Library => "\u{2191}\u{2193} select \u{00b7} enter open",
            Screen::Editor(_) => "esc back \u{00b7} ctrl-s save \u{00b7} alt-\u{2190} back",
        }
    };

    let mut right = div().flex().items_center().gap_3();
    if app.is_dirty() {
        right = right.child(
            div()
                .text_size(px(11.0))
                .text_color(warn)
                .child("\u{25cf} unsaved"),
        );
    }
    right = right.child(
        div()
            .text_size(px(11.0))
            .text_color(status_muted)
            .child(hints),
    );

    div()
        .h(px(STATUS_BAR_HEIGHT))
        .px_3()
        .flex()
        .items_center()
        .justify_between()
        .bg(status_bg)
        .border_t_1()
        .border_color(app.token(TokenKey::PanelBorder))
        .child(
            div()
                .text_size(px(11.0))
                .text_color(status_text)
                .child(app.status_message.clone().unwrap_or_default()),
        )
        .child(right)
}
