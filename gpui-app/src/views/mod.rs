mod about_dialog;
mod confirm_dialog;
mod editor;
mod grid_background;
mod library;
mod status_bar;

use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::actions::*;
use crate::app::Stencil;
use crate::mode::Mode;
use crate::navigation::Screen;
use crate::theme::TokenKey;

pub fn render_stencil(app: &mut Stencil, cx: &mut Context<Stencil>) -> impl IntoElement {
    let screen = app.current_screen();
    let mode = app.mode;

    div()
        .relative()
        .size_full()
        .flex()
        .flex_col()
        .bg(app.token(TokenKey::AppBg))
        .text_color(app.token(TokenKey::TextPrimary))
        .key_context("Stencil")
        .track_focus(&app.focus_handle)
        // Chorded commands (see keybindings.rs)
        .on_action(cx.listener(|this, _: &Back, _, cx| {
            this.go_back(cx);
        }))
        .on_action(cx.listener(|this, _: &SaveTemplate, _, cx| {
            this.save_template(cx);
        }))
        .on_action(cx.listener(|this, _: &ToggleAppearance, _, cx| {
            this.toggle_appearance(cx);
        }))
        .on_action(cx.listener(|this, _: &ShowAbout, _, cx| {
            this.show_about(cx);
        }))
        // Screen- and mode-dependent keys
        .on_key_down(cx.listener(|this, event: &KeyDownEvent, _, cx| {
            handle_key(this, event, cx);
        }))
        .child(
            div()
                .flex_1()
                .relative()
                .overflow_hidden()
                .child(match screen {
                    Screen::Library => library::render_library(app, cx).into_any_element(),
                    Screen::Editor(id) => editor::render_editor(app, id).into_any_element(),
                }),
        )
        .child(status_bar::render_status_bar(app))
        .when(mode == Mode::ConfirmLeave, |el| {
            el.child(confirm_dialog::render_confirm_dialog(app, cx))
        })
        .when(mode == Mode::About, |el| {
            el.child(about_dialog::render_about_dialog(app, cx))
        })
}

/// Keyboard dispatch for everything that is not a chorded command.
///
/// Overlay modes swallow all input; otherwise keys go to the current
/// screen. Plain typing reaches the editor via `key_char`, skipping
/// anything with a command modifier held.
fn handle_key(app: &mut Stencil, event: &KeyDownEvent, cx: &mut Context<Stencil>) {
    if app.mode == Mode::ConfirmLeave {
        match event.keystroke.key.as_str() {
            "escape" => app.cancel_leave(cx),
            "enter" => app.confirm_leave(cx),
            _ => {}
        }
        return;
    }

    if app.mode == Mode::About {
        if matches!(event.keystroke.key.as_str(), "escape" | "enter") {
            app.hide_about(cx);
        }
        return;
    }

    match app.current_screen() {
        Screen::Library => match event.keystroke.key.as_str() {
            "up" => app.library_up(cx),
            "down" => app.library_down(cx),
            "enter" => app.open_selected(cx),
            _ => {}
        },
        Screen::Editor(_) => {
            match event.keystroke.key.as_str() {
                "escape" => {
                    app.go_back(cx);
                    return;
                }
                "enter" => {
                    app.editor_newline(cx);
                    return;
                }
                "backspace" => {
                    app.editor_backspace(cx);
                    return;
                }
                "left" => {
                    app.editor_cursor_left(cx);
                    return;
                }
                "right" => {
                    app.editor_cursor_right(cx);
                    return;
                }
                "home" => {
                    app.editor_cursor_home(cx);
                    return;
                }
                "end" => {
                    app.editor_cursor_end(cx);
                    return;
                }
                _ => {}
            }

            if let Some(key_char) = &event.keystroke.key_char {
                if !event.keystroke.modifiers.control
                    && !event.keystroke.modifiers.alt
                    && !event.keystroke.modifiers.platform
                {
                    for c in key_char.chars() {
                        app.editor_insert_char(c, cx);
                    }
                }
            }
        }
    }
}
