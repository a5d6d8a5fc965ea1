//! Core UI functionality for the speeddial application.
//!
//! This module contains the building blocks shared by every component:
//! the [`Component`] trait, the [`Action`] values components hand back to the
//! event loop, and the async [`EventHandler`] that feeds terminal events in.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions passed from components to the app
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Keyboard/mouse event polling and ticks

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
