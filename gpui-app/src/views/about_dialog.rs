//! About Stencil dialog

use gpui::*;

use crate::app::Stencil;
use crate::theme::TokenKey;
use crate::ui::{dialog_header, modal_overlay, DialogFrame};

pub fn render_about_dialog(app: &Stencil, cx: &mut Context<Stencil>) -> impl IntoElement {
    let text_primary = app.token(TokenKey::TextPrimary);
    let text_muted = app.token(TokenKey::TextMuted);
    let panel_bg = app.token(TokenKey::PanelBg);
    let panel_border = app.token(TokenKey::PanelBorder);

    let body = div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_size(px(13.0))
                .text_color(text_primary)
                .child(format!("Stencil {}", env!("CARGO_PKG_VERSION"))),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(text_muted)
                .child("A small template manager. Escape to close."),
        );

    modal_overlay(
        "about-dialog",
        |this, cx| this.hide_about(cx),
        DialogFrame::new(body, panel_bg, panel_border)
            .width(px(360.0))
            .header(dialog_header("About Stencil", text_primary)),
        cx,
    )
}
