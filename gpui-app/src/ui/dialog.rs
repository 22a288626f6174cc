//! Modal dialog primitives: backdrop overlay and dialog container.
//!
//! Backdrop and dialog are SIBLINGS, not parent-child. The backdrop is a
//! full-screen layer that catches clicks (dismiss) and consumes scroll;
//! the dialog sits on top and receives pointer events normally. Nesting
//! the dialog inside the backdrop would let the backdrop's mouse handler
//! eat press events before the dialog's children see them.
//!
//! Escape handling is the caller's responsibility (the root view's
//! key-down listener already routes it per mode).
//!
//! ID convention: `{feature}-dialog`, e.g. `"confirm-leave-dialog"`.

use gpui::*;

use crate::app::Stencil;

/// Creates a dismissable modal overlay.
///
/// Click on the backdrop (outside the dialog) calls `on_dismiss`. For the
/// unsaved-changes dialog the dismiss handler is the cancel handler, so a
/// backdrop click can never strand a pending action.
pub fn modal_overlay<F, E>(
    id: impl Into<SharedString>,
    on_dismiss: F,
    content: E,
    cx: &mut Context<Stencil>,
) -> impl IntoElement
where
    F: Fn(&mut Stencil, &mut Context<Stencil>) + 'static + Clone,
    E: IntoElement,
{
    let dismiss = on_dismiss.clone();
    let id: SharedString = id.into();

    div()
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        // Backdrop layer: full-screen, behind the dialog, consumes events
        .child(
            div()
                .id(ElementId::Name(format!("{}-backdrop", id).into()))
                .absolute()
                .inset_0()
                .bg(hsla(0.0, 0.0, 0.0, 0.5))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _, _, cx| {
                        dismiss(this, cx);
                    }),
                )
                .on_scroll_wheel(|_, _, cx| {
                    cx.stop_propagation();
                }),
        )
        // Dialog layer: sits on top, receives events normally
        .child(div().id(ElementId::Name(id)).child(content))
}

/// Dialog container with optional header and footer rows.
///
/// Handles the panel chrome only (bg, border, rounding, shadow); wrap it
/// in `modal_overlay` for the backdrop.
pub struct DialogFrame<B: IntoElement> {
    body: B,
    header: Option<AnyElement>,
    footer: Option<AnyElement>,
    width: Pixels,
    panel_bg: Hsla,
    panel_border: Hsla,
}

impl<B: IntoElement> DialogFrame<B> {
    pub fn new(body: B, panel_bg: Hsla, panel_border: Hsla) -> Self {
        Self {
            body,
            header: None,
            footer: None,
            width: px(400.0),
            panel_bg,
            panel_border,
        }
    }

    pub fn width(mut self, width: Pixels) -> Self {
        self.width = width;
        self
    }

    /// Header row, rendered with a bottom border.
    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    /// Footer row, rendered with a top border.
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }
}

impl<B: IntoElement> IntoElement for DialogFrame<B> {
    type Element = <Div as IntoElement>::Element;

    fn into_element(self) -> Self::Element {
        let mut container = div()
            .w(self.width)
            .bg(self.panel_bg)
            .border_1()
            .border_color(self.panel_border)
            .rounded_lg()
            .shadow_xl()
            .overflow_hidden()
            .flex()
            .flex_col();

        if let Some(header) = self.header {
            container = container.child(
                div()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(self.panel_border)
                    .child(header),
            );
        }

        container = container.child(div().p_4().flex().flex_col().gap_4().child(self.body));

        if let Some(footer) = self.footer {
            container = container.child(
                div()
                    .w_full()
                    .px_4()
                    .py_3()
                    .border_t_1()
                    .border_color(self.panel_border)
                    .child(footer),
            );
        }

        container.into_element()
    }
}

/// Simple header with title only.
pub fn dialog_header(title: impl Into<SharedString>, text_primary: Hsla) -> impl IntoElement {
    div().flex().items_center().child(
        div()
            .text_size(px(14.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(text_primary)
            .child(title.into()),
    )
}
