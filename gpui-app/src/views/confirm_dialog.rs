//! Unsaved-changes confirmation dialog
//!
//! Confirm runs the parked leave action; Cancel, backdrop click, and
//! escape (handled by the root key listener) all drop it.

use gpui::*;

use stencil_core::guard::{DEFAULT_LEAVE_MESSAGE, LEAVE_DIALOG_TITLE};

use crate::app::Stencil;
use crate::theme::TokenKey;
use crate::ui::{dialog_header, modal_overlay, Button, DialogFrame};

pub fn render_confirm_dialog(app: &Stencil, cx: &mut Context<Stencil>) -> impl IntoElement {
    let text_primary = app.token(TokenKey::TextPrimary);
    let text_muted = app.token(TokenKey::TextMuted);
    let text_inverse = app.token(TokenKey::TextInverse);
    let panel_bg = app.token(TokenKey::PanelBg);
    let panel_border = app.token(TokenKey::PanelBorder);
    let accent = app.token(TokenKey::Accent);

    // The guard's message was snapshotted when the editor opened
    let message = app
        .editor
        .as_ref()
        .map(|e| e.guard.message().to_string())
        .unwrap_or_else(|| DEFAULT_LEAVE_MESSAGE.to_string());

    let body = div()
        .text_size(px(13.0))
        .text_color(text_primary)
        .child(message);

    let footer = div()
        .flex()
        .justify_end()
        .gap_2()
        .child(
            Button::new("leave-cancel-btn", "Cancel")
                .secondary(panel_border, text_muted)
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.cancel_leave(cx);
                    }),
                ),
        )
        .child(
            Button::new("leave-confirm-btn", "Leave")
                .primary(accent, text_inverse)
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.confirm_leave(cx);
                    }),
                ),
        );

    modal_overlay(
        "confirm-leave-dialog",
        // Dismiss without an explicit confirm is cancel: the pending
        // action must never outlive the dialog
        |this, cx| this.cancel_leave(cx),
        DialogFrame::new(body, panel_bg, panel_border)
            .width(px(420.0))
            .header(dialog_header(LEAVE_DIALOG_TITLE, text_primary))
            .footer(footer),
        cx,
    )
}
