//! Reusable UI components

pub mod action_item_widget;

// Component architecture
pub mod speed_dial_component;

// Component exports
pub use action_item_widget::ActionItemWidget;
pub use speed_dial_component::SpeedDialComponent;
