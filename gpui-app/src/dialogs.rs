//! Modal dialogs
//!
//! Contains show/hide and confirmation handling for:
//! - Unsaved-changes confirmation (leave guard)
//! - About dialog

use gpui::*;

use crate::app::Stencil;
use crate::mode::Mode;
use crate::navigation::LeaveAction;

impl Stencil {
    // =========================================================================
    // Unsaved-changes confirmation
    // =========================================================================

    /// Route a leave request through the editor's guard.
    ///
    /// A clean editor (or no editor at all) runs the action immediately; a
    /// dirty one parks it behind the confirmation dialog. The dirty flag is
    /// read here, at request time, never cached.
    pub fn request_leave(&mut self, action: LeaveAction, cx: &mut Context<Self>) {
        let routed = match self.editor.as_mut() {
            Some(editor) => {
                let dirty = editor.is_dirty();
                editor.guard.request_leave(dirty, action)
            }
            None => Some(action),
        };
        match routed {
            Some(action) => self.run_leave_action(action, cx),
            None => {
                self.mode = Mode::ConfirmLeave;
                cx.notify();
            }
        }
    }

    /// "Leave" button (or enter): drain the pending action and run it.
    pub fn confirm_leave(&mut self, cx: &mut Context<Self>) {
        self.mode = Mode::Normal;
        let action = self.editor.as_mut().and_then(|e| e.guard.confirm_leave());
        if let Some(action) = action {
            self.run_leave_action(action, cx);
        }
        cx.notify();
    }

    /// "Cancel" button, backdrop click, or escape: drop the pending action.
    ///
    /// Any way of dismissing the dialog without an explicit confirm lands
    /// here, so a dismissed dialog can never leave a stale pending action
    /// behind.
    pub fn cancel_leave(&mut self, cx: &mut Context<Self>) {
        self.mode = Mode::Normal;
        if let Some(editor) = self.editor.as_mut() {
            editor.guard.cancel_leave();
        }
        cx.notify();
    }

    // =========================================================================
    // About dialog
    // =========================================================================

    pub fn show_about(&mut self, cx: &mut Context<Self>) {
        self.mode = Mode::About;
        cx.notify();
    }

    pub fn hide_about(&mut self, cx: &mut Context<Self>) {
        self.mode = Mode::Normal;
        cx.notify();
    }
}
