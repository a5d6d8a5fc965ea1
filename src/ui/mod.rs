//! UI module for speeddial
//!
//! This module handles the terminal side of the widget: components, layout,
//! rendering, and the event loop of the demo application.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::{DialLayout, LayoutManager};
pub use renderer::run_app;
