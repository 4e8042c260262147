//! Configuration module for the expense dashboard
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::Settings;
