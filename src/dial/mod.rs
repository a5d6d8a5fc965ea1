//! Speed-dial widget core.
//!
//! Nothing in here knows about the terminal. [`ActionButton`] owns the
//! open/closed state and mediates taps; [`item::render_item`] and
//! [`tree::render`] are pure functions from props and state to a tree that
//! the UI layer lays out and draws.
//!
//! # Module Components
//!
//! - [`action_button`] - Container state machine
//! - [`item`] - Stateless action item rendering
//! - [`props`] - Container and item configuration
//! - [`state`] - Activation state and reset tokens
//! - [`timer`] - Deferred auto-close handle
//! - [`tree`] - Render tree produced from state and props

pub mod action_button;
pub mod item;
pub mod props;
pub mod state;
pub mod timer;
pub mod tree;

pub use action_button::ActionButton;
pub use item::{render_item, ItemNode};
pub use props::{ActionButtonProps, ActionItem, ItemProps, Orientation, SharedItemProps};
pub use state::{ActivationState, Lifecycle, ResetToken, SyncOutcome};
pub use timer::AutoCloseTimer;
pub use tree::{render, Anchor, DialTree};
