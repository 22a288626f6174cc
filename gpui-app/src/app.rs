//! Root application view

use gpui::*;
use uuid::Uuid;

use stencil_core::template::starter_templates;
use stencil_core::{LeaveGuard, Template};

use crate::mode::Mode;
use crate::navigation::{LeaveAction, Screen};
use crate::settings_store::{observe_settings, user_settings};
use crate::theme::{default_theme, get_theme, Appearance, Theme, TokenKey};
use crate::views;

/// Editing state for the template open in the editor screen.
///
/// Created when the editor screen is entered, dropped when it is left;
/// nothing here survives navigation. The guard's dialog message is
/// snapshotted here: renaming the template while the editor is open does
/// not reword an already-created dialog (first value wins).
pub struct EditorState {
    pub template_id: Uuid,
    pub draft: String,
    /// Byte offset of the caret within `draft` (always on a char boundary)
    pub cursor: usize,
    pub saved_body: String,
    pub guard: LeaveGuard<LeaveAction>,
}

impl EditorState {
    pub fn new(template: &Template) -> Self {
        Self {
            template_id: template.id,
            draft: template.body.clone(),
            cursor: template.body.len(),
            saved_body: template.body.clone(),
            guard: LeaveGuard::new(format!(
                "\u{201c}{}\u{201d} has unsaved changes. Leave without saving?",
                template.name
            )),
        }
    }

    /// Draft differs from the last saved body.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved_body
    }
}

pub struct Stencil {
    // Domain data (in-memory for the session)
    pub templates: Vec<Template>,

    // Session navigation history; the last entry is the current screen
    pub history: Vec<Screen>,

    // Mode & editor state
    pub mode: Mode,
    pub editor: Option<EditorState>,

    // Library selection
    pub library_selected: usize,

    // UI state
    pub focus_handle: FocusHandle,
    pub status_message: Option<String>,
    pub window_size: Size<Pixels>,
    pub theme: Theme,
    _settings_subscription: Subscription,
}

impl Stencil {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle, cx);
        let window_size = window.viewport_size();

        // Get theme from global settings store
        let theme = get_theme(&user_settings(cx).appearance.theme_id).unwrap_or_else(default_theme);

        // Re-render all windows when settings change anywhere
        let settings_subscription = observe_settings(cx, |cx| {
            cx.refresh_windows();
        });

        let templates = starter_templates();
        log::info!("stencil started with {} starter templates", templates.len());

        Self {
            templates,
            history: vec![Screen::Library],
            mode: Mode::Normal,
            editor: None,
            library_selected: 0,
            focus_handle,
            status_message: None,
            window_size,
            theme,
            _settings_subscription: settings_subscription,
        }
    }

    /// Theme token lookup shorthand for views
    pub fn token(&self, key: TokenKey) -> Hsla {
        self.theme.get(key)
    }

    pub fn template(&self, id: Uuid) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// True when the open editor has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.editor.as_ref().map_or(false, |e| e.is_dirty())
    }

    // =========================================================================
    // Library selection
    // =========================================================================

    pub fn library_up(&mut self, cx: &mut Context<Self>) {
        if self.library_selected > 0 {
            self.library_selected -= 1;
            cx.notify();
        }
    }

    pub fn library_down(&mut self, cx: &mut Context<Self>) {
        if self.library_selected + 1 < self.templates.len() {
            self.library_selected += 1;
            cx.notify();
        }
    }

    pub fn open_selected(&mut self, cx: &mut Context<Self>) {
        if let Some(template) = self.templates.get(self.library_selected) {
            let id = template.id;
            self.open_template(id, cx);
        }
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Flip between the dark and light builtin themes and persist the choice.
    pub fn toggle_appearance(&mut self, cx: &mut Context<Self>) {
        let next_id = match self.theme.meta.appearance {
            Appearance::Dark => "paper-light",
            Appearance::Light => "graphite-dark",
        };
        self.theme = get_theme(next_id).unwrap_or_else(default_theme);
        self.status_message = Some(format!("Theme: {}", self.theme.meta.name));
        crate::settings_store::update_user_settings(cx, |settings| {
            settings.appearance.theme_id = next_id.to_string();
        });
        cx.notify();
    }
}

impl Render for Stencil {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Track window size for the grid backdrop (handles resize)
        let current_size = window.viewport_size();
        if self.window_size != current_size {
            self.window_size = current_size;
        }

        views::render_stencil(self, cx)
    }
}
