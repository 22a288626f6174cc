//! Button components for dialogs and panels.
//!
//! Consistent button styling only - the caller adds `.on_mouse_down()`
//! for click handling.

use gpui::*;

/// Button builder with consistent styling.
pub struct Button {
    id: ElementId,
    label: SharedString,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Render as primary button (accent background, prominent).
    pub fn primary(self, accent: Hsla, text_color: Hsla) -> Stateful<Div> {
        div()
            .id(self.id)
            .px_4()
            .py(px(6.0))
            .bg(accent)
            .rounded_md()
            .text_size(px(12.0))
            .font_weight(FontWeight::MEDIUM)
            .text_color(text_color)
            .cursor_pointer()
            .hover(|s| s.opacity(0.9))
            .child(self.label)
    }

    /// Render as secondary button (bordered, subdued).
    pub fn secondary(self, border_color: Hsla, text_color: Hsla) -> Stateful<Div> {
        div()
            .id(self.id)
            .px_4()
            .py(px(6.0))
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_size(px(12.0))
            .text_color(text_color)
            .cursor_pointer()
            .hover(move |s| s.bg(border_color.opacity(0.3)))
            .child(self.label)
    }
}
