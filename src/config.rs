//! Daemon configuration: the workspace root and where it comes from.
//!
//! # Layout
//!
//! ```text
//! ~/.jobd/
//!   config.yaml   (optional — omitted fields fall back to defaults)
//!   workspaces/   (default workspace root)
//! ```
//!
//! # API pattern
//!
//! Every loading function has two forms:
//! - `fn_at(home: &Path)` — explicit home; used in tests with `TempDir`
//! - `fn()` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::paths;
use crate::types::PathSegment;

const CONFIG_FILE: &str = "config.yaml";

/// `<home>/.jobd/` — pure, no I/O.
pub fn jobd_root(home: &Path) -> PathBuf {
    home.join(".jobd")
}

/// `<home>/.jobd/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    jobd_root(home).join(CONFIG_FILE)
}

/// Process-wide daemon configuration.
///
/// Constructed once at startup, immutable afterwards, and passed by reference
/// into anything that needs the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Base directory under which per-identifier working directories resolve.
    pub workspace: PathBuf,
}

/// On-disk shape of `config.yaml`; every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    workspace: Option<PathBuf>,
}

impl DaemonConfig {
    /// Defaults for `home`: workspace under `<home>/.jobd/workspaces`.
    pub fn default_at(home: &Path) -> Self {
        Self {
            workspace: jobd_root(home).join("workspaces"),
        }
    }

    /// Load `<home>/.jobd/config.yaml`, filling omitted fields from
    /// [`default_at`](Self::default_at). An absent file yields the defaults.
    ///
    /// Returns `ConfigError::Parse` (with path + line context) if malformed YAML.
    pub fn load_at(home: &Path) -> Result<Self, ConfigError> {
        let path = config_path_at(home);
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default_at(home));
        }
        let contents = std::fs::read_to_string(&path)?;
        let file: ConfigFile = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::Parse { path, source: e })?;
        let defaults = Self::default_at(home);
        let config = Self {
            workspace: file.workspace.unwrap_or(defaults.workspace),
        };
        debug!(workspace = %config.workspace.display(), "loaded config");
        Ok(config)
    }

    /// `load_at` convenience wrapper.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(&home()?)
    }

    /// `<workspace>/<first>[/<rest>...]` for this configuration's root.
    ///
    /// See [`paths::workspace_path`].
    pub fn workspace_path<S>(&self, first: &S, rest: &[&str]) -> PathBuf
    where
        S: PathSegment + ?Sized,
    {
        paths::workspace_path(&self.workspace, first, rest)
    }
}

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
