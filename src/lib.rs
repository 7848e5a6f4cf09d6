//! jobd core library — daemon identifiers, configuration, workspace paths.
//!
//! Public API surface:
//! - [`types`] — [`DaemonId`] and the [`PathSegment`] capability
//! - [`config`] — [`DaemonConfig`] load / defaults
//! - [`error`] — [`ConfigError`]
//! - [`paths`] — [`workspace_path`] resolution

pub mod config;
pub mod error;
pub mod paths;
pub mod types;

pub use config::DaemonConfig;
pub use error::ConfigError;
pub use paths::workspace_path;
pub use types::{DaemonId, PathSegment};
