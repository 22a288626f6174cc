//! Theme system for Stencil
//!
//! Themes are defined using semantic tokens that map to colors, so views
//! never hard-code a hex value.

use gpui::Hsla;
use std::collections::HashMap;

/// Theme appearance - light or dark base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

/// All semantic color tokens used in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    // App surfaces
    AppBg,
    PanelBg,
    PanelBorder,
    TextPrimary,
    TextMuted,
    TextInverse,

    // Decorative grid backdrop
    GridLines,

    // Editor surface
    EditorBg,
    EditorBorder,

    // Selection (library rows)
    SelectionBg,

    // Status bar
    StatusBg,
    StatusText,
    StatusTextMuted,

    // Semantic feedback
    Accent,
    Warn,
    Error,
}

impl TokenKey {
    /// Get all token keys for validation
    #[allow(dead_code)]
    pub const ALL: &'static [TokenKey] = &[
        TokenKey::AppBg,
        TokenKey::PanelBg,
        TokenKey::PanelBorder,
        TokenKey::TextPrimary,
        TokenKey::TextMuted,
        TokenKey::TextInverse,
        TokenKey::GridLines,
        TokenKey::EditorBg,
        TokenKey::EditorBorder,
        TokenKey::SelectionBg,
        TokenKey::StatusBg,
        TokenKey::StatusText,
        TokenKey::StatusTextMuted,
        TokenKey::Accent,
        TokenKey::Warn,
        TokenKey::Error,
    ];
}

/// Theme identity
#[derive(Debug, Clone)]
pub struct ThemeMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub appearance: Appearance,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub meta: ThemeMeta,
    pub tokens: HashMap<TokenKey, Hsla>,
}

impl Theme {
    /// Get a token color, panics if not found (should never happen with builtin themes)
    pub fn get(&self, key: TokenKey) -> Hsla {
        *self
            .tokens
            .get(&key)
            .unwrap_or_else(|| panic!("Missing theme token: {:?}", key))
    }
}

/// Helper to create Hsla from hex RGB
pub fn rgb(hex: u32) -> Hsla {
    gpui::rgb(hex).into()
}

/// Helper to create Hsla from hex RGBA
pub fn rgba(hex: u32) -> Hsla {
    gpui::rgba(hex).into()
}

// ============================================================================
// Built-in Themes
// ============================================================================

/// Graphite Dark - neutral charcoal default
pub fn graphite_dark_theme() -> Theme {
    let mut tokens = HashMap::new();

    let bg_dark = rgb(0x101318);
    let bg_panel = rgb(0x161b24);
    let border = rgb(0x262e3d);

    let text_primary = rgb(0xd5d9e0);
    let text_muted = rgb(0x8a93a3);

    let accent = rgb(0x5a8ef2);

    tokens.insert(TokenKey::AppBg, bg_dark);
    tokens.insert(TokenKey::PanelBg, bg_panel);
    tokens.insert(TokenKey::PanelBorder, border);
    tokens.insert(TokenKey::TextPrimary, text_primary);
    tokens.insert(TokenKey::TextMuted, text_muted);
    tokens.insert(TokenKey::TextInverse, bg_dark);

    // Backdrop grid should be barely there
    tokens.insert(TokenKey::GridLines, rgba(0x262e3d55));

    tokens.insert(TokenKey::EditorBg, rgb(0x0c0f14));
    tokens.insert(TokenKey::EditorBorder, accent);

    tokens.insert(TokenKey::SelectionBg, rgba(0x5a8ef226));

    tokens.insert(TokenKey::StatusBg, bg_panel);
    tokens.insert(TokenKey::StatusText, text_primary);
    tokens.insert(TokenKey::StatusTextMuted, text_muted);

    tokens.insert(TokenKey::Accent, accent);
    tokens.insert(TokenKey::Warn, rgb(0xf2b84b));
    tokens.insert(TokenKey::Error, rgb(0xe4636a));

    Theme {
        meta: ThemeMeta {
            id: "graphite-dark",
            name: "Graphite Dark",
            appearance: Appearance::Dark,
        },
        tokens,
    }
}

/// Paper Light - warm light theme
pub fn paper_light_theme() -> Theme {
    let mut tokens = HashMap::new();

    let bg_light = rgb(0xf7f6f2);
    let bg_panel = rgb(0xffffff);
    let border = rgb(0xd8d5cc);

    let text_primary = rgb(0x2b2e33);
    let text_muted = rgb(0x6d7179);

    let accent = rgb(0x3a6fd8);

    tokens.insert(TokenKey::AppBg, bg_light);
    tokens.insert(TokenKey::PanelBg, bg_panel);
    tokens.insert(TokenKey::PanelBorder, border);
    tokens.insert(TokenKey::TextPrimary, text_primary);
    tokens.insert(TokenKey::TextMuted, text_muted);
    tokens.insert(TokenKey::TextInverse, bg_panel);

    tokens.insert(TokenKey::GridLines, rgba(0xd8d5cc66));

    tokens.insert(TokenKey::EditorBg, bg_panel);
    tokens.insert(TokenKey::EditorBorder, accent);

    tokens.insert(TokenKey::SelectionBg, rgba(0x3a6fd81f));

    tokens.insert(TokenKey::StatusBg, rgb(0xefede7));
    tokens.insert(TokenKey::StatusText, text_primary);
    tokens.insert(TokenKey::StatusTextMuted, text_muted);

    tokens.insert(TokenKey::Accent, accent);
    tokens.insert(TokenKey::Warn, rgb(0xb07e1f));
    tokens.insert(TokenKey::Error, rgb(0xc23b44));

    Theme {
        meta: ThemeMeta {
            id: "paper-light",
            name: "Paper Light",
            appearance: Appearance::Light,
        },
        tokens,
    }
}

/// All built-in themes
pub fn builtin_themes() -> Vec<Theme> {
    vec![graphite_dark_theme(), paper_light_theme()]
}

/// Look up a builtin theme by id
pub fn get_theme(id: &str) -> Option<Theme> {
    builtin_themes().into_iter().find(|t| t.meta.id == id)
}

/// The theme used when settings name no (or an unknown) theme
pub fn default_theme() -> Theme {
    graphite_dark_theme()
}
