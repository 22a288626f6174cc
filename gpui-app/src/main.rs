mod actions;
mod app;
mod dialogs;
mod editing;
mod keybindings;
mod mode;
mod navigation;
mod settings_store;
mod theme;
mod ui;
mod views;

#[cfg(test)]
mod tests;

use app::Stencil;
use gpui::*;

fn main() {
    Application::new().run(|cx: &mut App| {
        settings_store::init_settings_store(cx);
        keybindings::register(cx);

        let bounds = Bounds {
            origin: Point::new(px(120.0), px(120.0)),
            size: Size {
                width: px(1000.0),
                height: px(700.0),
            },
        };

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| Stencil::new(window, cx)),
        )
        .unwrap();
    });
}
