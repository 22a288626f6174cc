//! Screen navigation
//!
//! The app keeps its own session history: a stack of visited screens where
//! the last entry is the current one. Back pops to the previous entry when
//! one exists and otherwise lands on the library, the fixed default, so a
//! window that started somewhere else still has somewhere to go.
//!
//! Every navigation entry point routes through the unsaved-changes guard
//! (`request_leave` in dialogs.rs); the `*_now` methods below are the
//! unguarded transitions the guard ultimately executes.

use gpui::*;
use uuid::Uuid;

use crate::app::{EditorState, Stencil};

/// A navigable screen. `Editor` carries the id of the template it edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Library,
    Editor(Uuid),
}

/// Deferred navigation command parked behind the unsaved-changes dialog.
///
/// The zero-argument "thing to do if allowed to leave", spelled as data so
/// it can wait in the guard's pending slot until the user decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveAction {
    GoBack,
    OpenScreen(Screen),
}

/// Pop to the previous history entry, or fall back to the library landing
/// screen when there is none. Returns the new current screen.
pub(crate) fn back_transition(history: &mut Vec<Screen>) -> Screen {
    if history.len() > 1 {
        history.pop();
    } else {
        history.clear();
        history.push(Screen::Library);
    }
    *history.last().unwrap_or(&Screen::Library)
}

impl Stencil {
    pub fn current_screen(&self) -> Screen {
        *self.history.last().unwrap_or(&Screen::Library)
    }

    // =========================================================================
    // Guarded entry points
    // =========================================================================

    /// Navigate back (guarded).
    pub fn go_back(&mut self, cx: &mut Context<Self>) {
        self.request_leave(LeaveAction::GoBack, cx);
    }

    /// Open a template's editor (guarded when another editor is dirty).
    pub fn open_template(&mut self, id: Uuid, cx: &mut Context<Self>) {
        self.request_leave(LeaveAction::OpenScreen(Screen::Editor(id)), cx);
    }

    // =========================================================================
    // Unguarded transitions
    // =========================================================================

    pub(crate) fn run_leave_action(&mut self, action: LeaveAction, cx: &mut Context<Self>) {
        match action {
            LeaveAction::GoBack => self.go_back_now(cx),
            LeaveAction::OpenScreen(screen) => self.open_screen_now(screen, cx),
        }
    }

    pub(crate) fn go_back_now(&mut self, cx: &mut Context<Self>) {
        let had_previous = self.history.len() > 1;
        back_transition(&mut self.history);
        if !had_previous {
            log::info!("back with no history, landing on library");
        }
        self.sync_editor_state();
        cx.notify();
    }

    pub(crate) fn open_screen_now(&mut self, screen: Screen, cx: &mut Context<Self>) {
        if self.current_screen() == screen {
            return;
        }
        self.history.push(screen);
        self.sync_editor_state();
        cx.notify();
    }

    /// Make the editor state track the current screen: entering an editor
    /// screen creates a fresh `EditorState` (and a fresh guard with its
    /// message snapshot); leaving it drops the state, draft included.
    fn sync_editor_state(&mut self) {
        match self.current_screen() {
            Screen::Editor(id) => {
                let already_open = self
                    .editor
                    .as_ref()
                    .map_or(false, |e| e.template_id == id);
                if !already_open {
                    let state = self.template(id).map(EditorState::new);
                    self.editor = state;
                    if self.editor.is_none() {
                        // Stale id in history (template list changed under us)
                        log::warn!("editor screen for unknown template {}, backing out", id);
                        back_transition(&mut self.history);
                    }
                }
            }
            Screen::Library => {
                self.editor = None;
            }
        }
    }
}
