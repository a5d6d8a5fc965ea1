//! Utility modules for the speeddial application

pub mod color;
