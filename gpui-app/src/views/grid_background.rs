//! Decorative grid backdrop for the library screen.
//!
//! Evenly spaced 1px lines over the app background, colored with the
//! GridLines token so themes can fade it in or out. Pure decoration: the
//! layer has no ids and no handlers, so it never intercepts input.

use gpui::*;

use crate::app::Stencil;
use crate::theme::TokenKey;

/// Spacing between grid lines
pub const GRID_CELL: f32 = 32.0;

pub fn render_grid_background(app: &Stencil) -> impl IntoElement {
    let line = app.token(TokenKey::GridLines);
    let width: f32 = app.window_size.width.into();
    let height: f32 = app.window_size.height.into();
    let cols = (width / GRID_CELL) as usize;
    let rows = (height / GRID_CELL) as usize;

    let mut layer = div().absolute().inset_0().overflow_hidden();

    for i in 1..=cols {
        layer = layer.child(
            div()
                .absolute()
                .top_0()
                .bottom_0()
                .left(px(i as f32 * GRID_CELL))
                .w(px(1.0))
                .bg(line),
        );
    }
    for i in 1..=rows {
        layer = layer.child(
            div()
                .absolute()
                .left_0()
                .right_0()
                .top(px(i as f32 * GRID_CELL))
                .h(px(1.0))
                .bg(line),
        );
    }

    layer
}
