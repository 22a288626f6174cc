//! Template editor screen
//!
//! Renders the draft body with a block caret. The header shows the
//! template name with the dirty dot while the draft diverges from the
//! saved body.

use gpui::*;
use uuid::Uuid;

use crate::app::Stencil;
use crate::theme::TokenKey;

pub fn render_editor(app: &Stencil, template_id: Uuid) -> impl IntoElement {
    let text_primary = app.token(TokenKey::TextPrimary);
    let text_muted = app.token(TokenKey::TextMuted);
    let editor_bg = app.token(TokenKey::EditorBg);
    let panel_border = app.token(TokenKey::PanelBorder);
    let accent = app.token(TokenKey::Accent);

    let name = app
        .template(template_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown template".to_string());

    let (title, draft, cursor) = match app.editor.as_ref() {
        Some(editor) => {
            // Dirty dot, same convention as window titles elsewhere
            let title = if editor.is_dirty() {
                format!("{} \u{25cf}", name)
            } else {
                name
            };
            (title, editor.draft.clone(), editor.cursor)
        }
        None => (name, String::new(), 0),
    };

    // Body with caret: split the draft at the cursor and lay the pieces
    // out line by line. The caret line renders as before|caret|after.
    let before = &draft[..cursor];
    let after = &draft[cursor..];
    let caret_line_index = before.matches('\n').count();

    let mut body = div().flex().flex_col().gap(px(2.0));
    for (index, line) in draft.split('\n').enumerate() {
        let line_el = if index == caret_line_index {
            let line_before = before.rsplit('\n').next().unwrap_or("");
            let line_after = after.split('\n').next().unwrap_or("");
            div()
                .flex()
                .items_center()
                .child(div().child(line_before.to_string()))
                .child(div().w(px(1.5)).h(px(16.0)).bg(accent))
                .child(div().child(line_after.to_string()))
        } else if line.is_empty() {
            // Preserve the height of blank lines
            div().child(" ".to_string())
        } else {
            div().child(line.to_string())
        };
        body = body.child(line_el);
    }

    div()
        .flex()
        .flex_col()
        .size_full()
        .p_6()
        .gap_3()
        .child(
            div()
                .flex()
                .justify_between()
                .items_center()
                .child(
                    div()
                        .text_size(px(16.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(text_primary)
                        .child(title),
                )
                .child(
                    div()
                        .text_size(px(11.0))
                        .text_color(text_muted)
                        .child("esc back \u{00b7} ctrl-s save"),
                ),
        )
        .child(
            div()
                .flex_1()
                .p_4()
                .bg(editor_bg)
                .border_1()
                .border_color(panel_border)
                .rounded_md()
                .text_size(px(13.0))
                .text_color(text_primary)
                .overflow_hidden()
                .child(body),
        )
}
