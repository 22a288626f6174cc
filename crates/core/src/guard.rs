//! Unsaved-changes guard for leave-style navigation.
//!
//! Gates an arbitrary "leave" action behind user confirmation when unsaved
//! state exists, and passes it through untouched when there is nothing to
//! lose. The guard owns the pending-action slot and the dialog visibility
//! flag; the dirty flag stays with the owner and is re-read on every
//! request, never cached here.
//!
//! # Invariants
//!
//! - At most one pending action exists at a time. A guarded request while
//!   one is already pending overwrites it (last write wins, no queueing).
//! - The pending slot is only ever occupied while the dialog is visible.
//! - The dialog message is captured once at construction and never re-read
//!   from the owner. This is deliberate: the dialog a user is looking at
//!   should not reword itself because upstream state moved on.
//!
//! # Ownership
//!
//! `request_leave` and `confirm_leave` hand the action back to the caller
//! instead of invoking a stored closure. Moving the action out of the slot
//! before it can run is what makes reentrancy safe: by the time the caller
//! invokes it, the guard is already back in its idle state, so an action
//! that triggers another guarded request finds no stale pending reference.

/// Title shown above the guard's message in the confirmation dialog.
pub const LEAVE_DIALOG_TITLE: &str = "Unsaved Changes";

/// Fallback dialog message when the owner does not supply one.
pub const DEFAULT_LEAVE_MESSAGE: &str =
    "You have unsaved changes. Leave without saving?";

/// Confirmation gate for a single "leave" decision.
///
/// `A` is the deferred action type: a boxed closure, an enum of navigation
/// commands, whatever the owner wants to run once leaving is allowed.
pub struct LeaveGuard<A> {
    message: String,
    dialog_visible: bool,
    pending: Option<A>,
}

impl<A> LeaveGuard<A> {
    /// Create a guard, snapshotting `message` for the dialog.
    ///
    /// First value wins: later changes to whatever the message was derived
    /// from are not observed.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dialog_visible: false,
            pending: None,
        }
    }

    /// Create a guard with [`DEFAULT_LEAVE_MESSAGE`].
    pub fn with_default_message() -> Self {
        Self::new(DEFAULT_LEAVE_MESSAGE)
    }

    /// The snapshotted dialog message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the confirmation dialog should be showing.
    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Whether an action is parked behind the dialog.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Route a leave request.
    ///
    /// `dirty` is the owner's live unsaved-changes flag at call time. When
    /// it is false the guard stays untouched and the action comes straight
    /// back as `Some` for the caller to run synchronously. When it is true
    /// the action is parked (replacing any previously parked action) and
    /// the dialog becomes visible; `None` means "ask the user first".
    ///
    /// This cannot fail - it is a pure routing decision.
    pub fn request_leave(&mut self, dirty: bool, action: A) -> Option<A> {
        if !dirty {
            return Some(action);
        }
        self.pending = Some(action);
        self.dialog_visible = true;
        self.debug_check_invariants();
        None
    }

    /// The user confirmed leaving: hide the dialog and hand the pending
    /// action (if any) to the caller for exactly-once invocation.
    ///
    /// The slot is cleared before the caller can run the action, so a
    /// reentrant `request_leave` from inside it sees an idle guard.
    /// Calling with nothing pending is a safe no-op beyond hiding the
    /// dialog.
    pub fn confirm_leave(&mut self) -> Option<A> {
        self.dialog_visible = false;
        let action = self.pending.take();
        self.debug_check_invariants();
        action
    }

    /// The user declined (button, backdrop click, or escape): hide the
    /// dialog and drop the pending action without running it.
    pub fn cancel_leave(&mut self) {
        self.dialog_visible = false;
        self.pending = None;
        self.debug_check_invariants();
    }

    /// Debug-only invariant check: a pending action implies a visible dialog
    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        debug_assert!(
            self.pending.is_none() || self.dialog_visible,
            "LeaveGuard invariant violation: pending action without a visible dialog"
        );
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type BoxedAction = Box<dyn FnOnce()>;

    fn counting_action(counter: &Rc<Cell<u32>>) -> BoxedAction {
        let counter = Rc::clone(counter);
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn clean_request_runs_action_immediately() {
        let mut guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();
        let calls = Rc::new(Cell::new(0));

        if let Some(action) = guard.request_leave(false, counting_action(&calls)) {
            action();
        }

        assert_eq!(calls.get(), 1, "action fires exactly once, synchronously");
        assert!(!guard.dialog_visible(), "no dialog for a clean leave");
        assert!(!guard.has_pending());
    }

    #[test]
    fn dirty_request_parks_action_behind_dialog() {
        let mut guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();
        let calls = Rc::new(Cell::new(0));

        let routed = guard.request_leave(true, counting_action(&calls));

        assert!(routed.is_none(), "dirty request must not hand the action back");
        assert_eq!(calls.get(), 0);
        assert!(guard.dialog_visible());
        assert!(guard.has_pending());
    }

    #[test]
    fn cancel_without_pending_is_a_noop_beyond_hiding() {
        let mut guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();

        guard.cancel_leave();

        assert!(!guard.dialog_visible());
        assert!(!guard.has_pending());
        // And the guard still routes cleanly afterwards
        assert!(guard.request_leave(false, Box::new(|| {}) as BoxedAction).is_some());
    }

    #[test]
    fn confirm_drains_pending_and_resets_to_idle() {
        let mut guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();
        let calls = Rc::new(Cell::new(0));

        guard.request_leave(true, counting_action(&calls));
        let action = guard.confirm_leave();

        // Slot is cleared before the action runs - reentrancy-clean
        assert!(!guard.has_pending());
        assert!(!guard.dialog_visible());
        action.expect("a pending action was parked")();
        assert_eq!(calls.get(), 1);

        // Subsequent clean request fires immediately, no residue
        if let Some(action) = guard.request_leave(false, counting_action(&calls)) {
            action();
        }
        assert_eq!(calls.get(), 2);
        assert!(!guard.dialog_visible());
    }

    #[test]
    fn second_dirty_request_overwrites_first() {
        let mut guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        guard.request_leave(true, counting_action(&first));
        guard.request_leave(true, counting_action(&second));

        if let Some(action) = guard.confirm_leave() {
            action();
        }

        assert_eq!(first.get(), 0, "overwritten action never runs");
        assert_eq!(second.get(), 1, "last write wins");
        assert!(!guard.has_pending());
    }

    #[test]
    fn cancel_discards_pending_action_for_good() {
        let mut guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();
        let calls = Rc::new(Cell::new(0));

        guard.request_leave(true, counting_action(&calls));
        guard.cancel_leave();

        assert!(!guard.dialog_visible());
        assert_eq!(calls.get(), 0);
        // A later confirm must not resurrect the cancelled action
        assert!(guard.confirm_leave().is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn message_is_snapshotted_at_construction() {
        let mut source = String::from("M1");
        let guard: LeaveGuard<BoxedAction> = LeaveGuard::new(source.clone());

        // The external source moves on; the guard does not follow
        source.push_str(" changed");

        assert_eq!(guard.message(), "M1");
    }

    #[test]
    fn default_message_guard_uses_the_fallback_text() {
        let guard: LeaveGuard<BoxedAction> = LeaveGuard::with_default_message();
        assert_eq!(guard.message(), DEFAULT_LEAVE_MESSAGE);
    }

    #[test]
    fn enum_actions_work_without_boxing() {
        #[derive(Debug, PartialEq, Eq)]
        enum Command {
            GoBack,
            Close,
        }

        let mut guard = LeaveGuard::new("unsaved edits");
        assert_eq!(guard.request_leave(false, Command::GoBack), Some(Command::GoBack));

        assert_eq!(guard.request_leave(true, Command::GoBack), None);
        assert_eq!(guard.request_leave(true, Command::Close), None);
        assert_eq!(guard.confirm_leave(), Some(Command::Close));
        assert_eq!(guard.confirm_leave(), None);
    }
}
