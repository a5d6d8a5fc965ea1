//! The speed-dial container and its activation state machine.

use super::props::ActionButtonProps;
use super::state::{ActivationState, Lifecycle, ResetToken, SyncOutcome};
use super::timer::AutoCloseTimer;
use super::tree::{self, DialTree};
use std::rc::Rc;
use std::time::Instant;

/// Primary button owning the open/closed state of its action stack.
///
/// Every transition runs synchronously in the caller's event handler. The
/// only deferred work is an optional auto-close timer, which is cancelled
/// on close, on unmount and on drop.
pub struct ActionButton {
    props: ActionButtonProps,
    state: ActivationState,
    lifecycle: Lifecycle,
    pending_close: Option<AutoCloseTimer>,
}

impl ActionButton {
    pub fn new(props: ActionButtonProps) -> Self {
        let state = ActivationState::new(props.active, props.reset_token.clone());
        Self {
            props,
            state,
            lifecycle: Lifecycle::Mounted,
            pending_close: None,
        }
    }

    pub fn state(&self) -> &ActivationState {
        &self.state
    }

    pub fn props(&self) -> &ActionButtonProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn pending_close(&self) -> Option<&AutoCloseTimer> {
        self.pending_close.as_ref()
    }

    /// Open the stack, or close it when it is already open
    pub fn request_open(&mut self) {
        if !self.is_mounted() {
            return;
        }
        if self.state.is_open() {
            self.request_close();
            return;
        }
        self.state.set_open(true);
        log::debug!("speed dial opened");
    }

    /// Close the stack. Does nothing when already closed or after unmount.
    pub fn request_close(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.pending_close = None;
        if !self.state.is_open() {
            return;
        }
        self.state.set_open(false);
        log::debug!("speed dial closed");
    }

    /// Apply an externally desired open flag when `token` is new.
    ///
    /// A token equal to the last observed one is ignored, whatever the
    /// desired flag says.
    pub fn sync_from_external(&mut self, desired_active: bool, token: ResetToken) -> SyncOutcome {
        if !self.is_mounted() || token == *self.state.reset_token() {
            return SyncOutcome::Unchanged;
        }

        let outcome = match (desired_active, self.state.is_open()) {
            (false, true) => SyncOutcome::ForcedClose,
            (true, false) => SyncOutcome::ForcedOpen,
            _ => SyncOutcome::Refreshed,
        };

        log::debug!(
            "reset token {} -> {}: {:?}",
            self.state.reset_token(),
            token,
            outcome
        );
        self.pending_close = None;
        self.state.adopt(desired_active, token);
        outcome
    }

    /// Host update hook: swap in the next props and resync from them
    pub fn on_props_changed(&mut self, next: ActionButtonProps) -> SyncOutcome {
        let desired_active = next.active;
        let token = next.reset_token.clone();
        self.props = next;
        self.sync_from_external(desired_active, token)
    }

    /// Primary button tap.
    ///
    /// `on_press` fires first. The state machine is only engaged when at
    /// least one child exists; the return value says whether it was. An
    /// unmounted container ignores the tap entirely.
    pub fn press_primary(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let on_press = Rc::clone(&self.props.on_press);
        (*on_press)();

        if !self.props.has_actions() {
            return false;
        }
        self.request_open();
        true
    }

    /// Backdrop tap
    pub fn dismiss(&mut self) {
        self.request_close();
    }

    pub fn select_item(&mut self, index: usize) -> bool {
        self.select_item_at(index, Instant::now())
    }

    /// Select the `index`-th non-placeholder child.
    ///
    /// With auto-close on, the close (or the timer standing in for it) is
    /// requested before the item's callback runs, so the callback already
    /// sees the closed state. Returns false when nothing was selected.
    pub fn select_item_at(&mut self, index: usize, now: Instant) -> bool {
        if !self.is_mounted() || !self.state.is_open() {
            return false;
        }
        let on_select = match self.props.actions().nth(index) {
            Some(item) if item.enabled => Rc::clone(item.on_select()),
            _ => return false,
        };

        if self.props.auto_close {
            self.request_auto_close(now);
        }
        (*on_select)(&self.state);
        true
    }

    fn request_auto_close(&mut self, now: Instant) {
        match self.props.auto_close_delay {
            Some(delay) if !delay.is_zero() => {
                self.pending_close = Some(AutoCloseTimer::arm(now, delay));
            }
            _ => self.request_close(),
        }
    }

    /// Fire the auto-close timer if its deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_close {
            Some(timer) if timer.is_due(now) => {
                self.request_close();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self) -> DialTree {
        tree::render(&self.state, &self.props)
    }

    /// Tear down: close, cancel the timer, and ignore every later transition
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.pending_close = None;
        self.state.set_open(false);
        self.lifecycle = Lifecycle::Unmounted;
        log::debug!("speed dial unmounted");
    }
}

impl Drop for ActionButton {
    fn drop(&mut self) {
        self.unmount();
    }
}
