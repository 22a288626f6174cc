use crate::actions::*;
use gpui::{App, KeyBinding};

/// Get the primary modifier key string based on platform
/// macOS: "cmd"; Windows/Linux: "ctrl"
fn primary_mod() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "cmd"
    }
    #[cfg(not(target_os = "macos"))]
    {
        "ctrl"
    }
}

/// Build a keybinding string with the primary modifier
fn kb(key: &str) -> String {
    format!("{}-{}", primary_mod(), key)
}

/// Register all keybindings for the application
///
/// Arrow keys, enter, escape, backspace, and plain typing are handled in
/// the root view's key-down listener because their meaning depends on the
/// current screen and mode. Only chorded commands live here.
pub fn register(cx: &mut App) {
    let bindings: Vec<KeyBinding> = vec![
        KeyBinding::new("alt-left", Back, Some("Stencil")),
        KeyBinding::new(&kb("s"), SaveTemplate, Some("Stencil")),
        KeyBinding::new(&kb("shift-t"), ToggleAppearance, Some("Stencil")),
        KeyBinding::new("f1", ShowAbout, Some("Stencil")),
    ];

    cx.bind_keys(bindings);
}
