//! Workspace path resolution.
//!
//! Pure joins only: nothing here touches the filesystem or creates
//! directories.

use std::path::{Path, PathBuf};

use crate::types::PathSegment;

/// `<workspace>/<first>[/<rest>...]` — pure, no I/O.
///
/// `first` may be a [`DaemonId`](crate::DaemonId) or a plain string; each
/// element of `rest` appends one more path level, left to right. A segment
/// that is itself an absolute path follows [`PathBuf::push`] semantics.
pub fn workspace_path<S>(workspace: &Path, first: &S, rest: &[&str]) -> PathBuf
where
    S: PathSegment + ?Sized,
{
    let mut path = workspace.join(first.as_segment());
    for segment in rest {
        path.push(segment);
    }
    path
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
