//! Collision-free temporary paths for two-step renames.
use std::path::{Path, PathBuf};

/// Prefix of every generated name, so leftovers from an interrupted run are
/// easy to recognise.
const PREFIX: &str = ".baller-tmp-";

/// Return a path inside `parent` that does not exist right now.
///
/// Names are random UUIDs, so the loop almost always ends on the first
/// attempt.  Only existence is checked: nothing is created, and another
/// process could still claim the path before the caller uses it.
#[must_use]
pub fn unused_path(parent: &Path) -> PathBuf {
    loop {
        let candidate = parent.join(format!("{PREFIX}{}", uuid::Uuid::new_v4().simple()));
        // symlink_metadata so a dangling symlink also counts as taken
        if candidate.symlink_metadata().is_err() {
            return candidate;
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn path_is_inside_parent_and_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = unused_path(dir.path());
        assert_eq!(path.parent(), Some(dir.path()));
        assert!(!path.exists());
    }

    #[test]
    fn consecutive_paths_differ() {
        let dir = tempfile::tempdir().unwrap();
        let a = unused_path(dir.path());
        std::fs::create_dir(&a).unwrap();
        let b = unused_path(dir.path());
        assert_ne!(a, b);
        assert!(!b.exists());
    }

    #[test]
    fn name_is_hidden_and_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        let path = unused_path(dir.path());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(PREFIX), "unexpected name {name}");
    }
}
