//! Template library screen
//!
//! Lists all templates over the decorative grid backdrop. Arrow keys move
//! the selection, enter (or click) opens the editor.

use gpui::*;

use crate::app::Stencil;
use crate::theme::TokenKey;
use crate::views::grid_background::render_grid_background;

pub fn render_library(app: &Stencil, cx: &mut Context<Stencil>) -> impl IntoElement {
    let text_primary = app.token(TokenKey::TextPrimary);
    let text_muted = app.token(TokenKey::TextMuted);
    let panel_bg = app.token(TokenKey::PanelBg);
    let panel_border = app.token(TokenKey::PanelBorder);
    let selection_bg = app.token(TokenKey::SelectionBg);
    let accent = app.token(TokenKey::Accent);

    let mut list = div().flex().flex_col().gap_2();

    for (index, template) in app.templates.iter().enumerate() {
        let selected = index == app.library_selected;
        let id = template.id;

        let mut row = div()
            .id(ElementId::Name(format!("template-row-{}", index).into()))
            .px_4()
            .py_3()
            .bg(panel_bg)
            .border_1()
            .border_color(if selected { accent } else { panel_border })
            .rounded_md()
            .cursor_pointer()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, _, cx| {
                    this.open_template(id, cx);
                }),
            )
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(text_primary)
                            .child(template.name.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(text_muted)
                            .child(template.updated_at.format("%Y-%m-%d %H:%M").to_string()),
                    ),
            );

        if selected {
            row = row.bg(selection_bg);
        }

        if let Some(description) = &template.description {
            row = row.child(
                div()
                    .text_size(px(12.0))
                    .text_color(text_muted)
                    .child(description.clone()),
            );
        }

        list = list.child(row);
    }

    div()
        .relative()
        .size_full()
        // Backdrop first, content on top
        .child(render_grid_background(app))
        .child(
            div()
                .relative()
                .flex()
                .flex_col()
                .gap_4()
                .p_8()
                .max_w(px(640.0))
                .child(
                    div()
                        .text_size(px(18.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(text_primary)
                        .child("Templates"),
                )
                .child(list),
        )
}
