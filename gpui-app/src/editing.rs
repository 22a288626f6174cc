//! Draft editing for the template editor screen
//!
//! The editor works on a draft copy of the template body; the in-memory
//! template is only touched on save. The caret is a byte offset into the
//! draft, kept on char boundaries by only ever moving it by whole chars.

use gpui::*;

use crate::app::Stencil;

impl Stencil {
    pub fn editor_insert_char(&mut self, c: char, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        editor.draft.insert(editor.cursor, c);
        editor.cursor += c.len_utf8();
        cx.notify();
    }

    pub fn editor_newline(&mut self, cx: &mut Context<Self>) {
        self.editor_insert_char('\n', cx);
    }

    pub fn editor_backspace(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if editor.cursor == 0 {
            return;
        }
        let prev = editor.draft[..editor.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        editor.cursor -= prev;
        editor.draft.remove(editor.cursor);
        cx.notify();
    }

    pub fn editor_cursor_left(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if let Some(c) = editor.draft[..editor.cursor].chars().next_back() {
            editor.cursor -= c.len_utf8();
            cx.notify();
        }
    }

    pub fn editor_cursor_right(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if let Some(c) = editor.draft[editor.cursor..].chars().next() {
            editor.cursor += c.len_utf8();
            cx.notify();
        }
    }

    pub fn editor_cursor_home(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let line_start = editor.draft[..editor.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        if editor.cursor != line_start {
            editor.cursor = line_start;
            cx.notify();
        }
    }

    pub fn editor_cursor_end(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let line_end = editor.draft[editor.cursor..]
            .find('\n')
            .map(|i| editor.cursor + i)
            .unwrap_or(editor.draft.len());
        if editor.cursor != line_end {
            editor.cursor = line_end;
            cx.notify();
        }
    }

    /// Apply the draft to the in-memory template and clear the dirty state.
    pub fn save_template(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if !editor.is_dirty() {
            return;
        }
        let id = editor.template_id;
        let draft = editor.draft.clone();
        editor.saved_body = draft.clone();

        if let Some(template) = self.templates.iter_mut().find(|t| t.id == id) {
            template.body = draft;
            template.touch();
            self.status_message = Some(format!("Saved \u{201c}{}\u{201d}", template.name));
        }
        cx.notify();
    }
}
