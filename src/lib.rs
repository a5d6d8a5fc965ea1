//! Speeddial - a floating speed-dial action button for terminal UIs
//!
//! This library provides a primary button that, when activated, reveals a
//! vertical stack of labeled action items over a dismissible backdrop. The
//! widget logic is independent of the terminal; a ratatui component draws
//! it and routes crossterm mouse and key events into it.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`dial`] - Activation state machine, props and the pure render tree
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`ui`] - Terminal components, layout and the event loop
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Speed-dial widget core: state machine, items and render tree
pub mod dial;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and other helpers
pub mod utils;

pub use dial::{ActionButton, ActionButtonProps, ActionItem, Orientation, ResetToken};
