//! Tests for app-level logic that doesn't need a window
//!
//! The root view itself can't be constructed without gpui (it owns a
//! FocusHandle), so these tests exercise the pure pieces the view methods
//! are built from: the history fallback rule, editor dirty tracking, and
//! the guard/leave-action interplay.

use stencil_core::Template;
use uuid::Uuid;

use crate::app::EditorState;
use crate::navigation::{back_transition, LeaveAction, Screen};

// =========================================================================
// History fallback rule
// =========================================================================

#[test]
fn back_pops_to_the_previous_screen() {
    let id = Uuid::new_v4();
    let mut history = vec![Screen::Library, Screen::Editor(id)];

    let current = back_transition(&mut history);

    assert_eq!(current, Screen::Library);
    assert_eq!(history, vec![Screen::Library]);
}

#[test]
fn back_with_no_previous_entry_lands_on_library() {
    // A window opened straight into an editor has no history behind it
    let mut history = vec![Screen::Editor(Uuid::new_v4())];

    let current = back_transition(&mut history);

    assert_eq!(current, Screen::Library);
    assert_eq!(history, vec![Screen::Library]);
}

#[test]
fn back_from_the_library_stays_on_the_library() {
    let mut history = vec![Screen::Library];

    let current = back_transition(&mut history);

    assert_eq!(current, Screen::Library);
    assert_eq!(history.len(), 1);
}

// =========================================================================
// Editor dirty tracking
// =========================================================================

#[test]
fn editor_is_clean_until_the_draft_diverges() {
    let template = Template::new("Invoice", "Dear {{name}},");
    let mut editor = EditorState::new(&template);

    assert!(!editor.is_dirty());

    editor.draft.push('!');
    assert!(editor.is_dirty());

    // Reverting the draft by hand is clean again - dirty is a comparison,
    // not a sticky flag
    editor.draft.pop();
    assert!(!editor.is_dirty());
}

#[test]
fn saving_resets_dirty_via_saved_body() {
    let template = Template::new("Invoice", "Dear {{name}},");
    let mut editor = EditorState::new(&template);

    editor.draft.push_str(" Regards");
    assert!(editor.is_dirty());

    editor.saved_body = editor.draft.clone();
    assert!(!editor.is_dirty());
}

// =========================================================================
// Guard wiring
// =========================================================================

#[test]
fn guard_message_snapshots_the_template_name_at_open() {
    let mut template = Template::new("Invoice", "body");
    let editor = EditorState::new(&template);

    // Renaming after the editor opened must not reword the dialog
    template.name = "Renamed".to_string();

    assert!(editor.guard.message().contains("Invoice"));
    assert!(!editor.guard.message().contains("Renamed"));
}

#[test]
fn dirty_editor_parks_the_leave_action_until_confirmed() {
    let template = Template::new("Invoice", "body");
    let mut editor = EditorState::new(&template);
    editor.draft.push('x');

    let dirty = editor.is_dirty();
    let routed = editor.guard.request_leave(dirty, LeaveAction::GoBack);
    assert_eq!(routed, None);
    assert!(editor.guard.dialog_visible());

    assert_eq!(editor.guard.confirm_leave(), Some(LeaveAction::GoBack));
    assert!(!editor.guard.dialog_visible());
}

#[test]
fn clean_editor_passes_the_leave_action_straight_through() {
    let template = Template::new("Invoice", "body");
    let mut editor = EditorState::new(&template);

    let dirty = editor.is_dirty();
    let target = Screen::Editor(Uuid::new_v4());
    let routed = editor.guard.request_leave(dirty, LeaveAction::OpenScreen(target));

    assert_eq!(routed, Some(LeaveAction::OpenScreen(target)));
    assert!(!editor.guard.dialog_visible());
}
