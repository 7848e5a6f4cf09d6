//! Domain types for jobd.
//!
//! All filesystem paths elsewhere in the crate use `PathBuf`; the types here
//! are the string-valued identifiers joined onto them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a unit of daemon-managed work.
///
/// Equal and displayed by its string form. The tag is expected to be a single
/// path segment; it is joined verbatim under the workspace root by
/// [`workspace_path`](crate::paths::workspace_path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaemonId(pub String);

impl fmt::Display for DaemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DaemonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DaemonId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Path-segment capability
// ---------------------------------------------------------------------------

/// A value usable as one workspace path component.
///
/// Lets [`workspace_path`](crate::paths::workspace_path) accept either a
/// [`DaemonId`] or a plain string for its first argument through a trait
/// bound rather than separate entry points.
pub trait PathSegment {
    /// The component's string form, joined as-is.
    fn as_segment(&self) -> &str;
}

impl PathSegment for DaemonId {
    fn as_segment(&self) -> &str {
        &self.0
    }
}

impl PathSegment for str {
    fn as_segment(&self) -> &str {
        self
    }
}

impl PathSegment for String {
    fn as_segment(&self) -> &str {
        self
    }
}

impl<T: PathSegment + ?Sized> PathSegment for &T {
    fn as_segment(&self) -> &str {
        (**self).as_segment()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
