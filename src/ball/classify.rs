//! Partition a directory's entries into scaffolding and user content.
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::ReservedNames;

/// The entry names of a directory at one point in time, sorted.
///
/// Classification always works on a snapshot taken before anything else
/// touches the directory, so relocation never observes its own output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    root: PathBuf,
    entries: Vec<OsString>,
}

impl Snapshot {
    /// List the immediate entries of `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read as a directory.
    pub fn take(root: &Path) -> Result<Self> {
        let mut entries = std::fs::read_dir(root)
            .with_context(|| format!("reading directory {}", root.display()))?
            .map(|entry| {
                entry
                    .map(|e| e.file_name())
                    .with_context(|| format!("reading entry in {}", root.display()))
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort();
        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    /// Build a snapshot from known entry names (sorted on construction).
    #[must_use]
    pub fn from_entries<I>(root: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut entries: Vec<OsString> = entries.into_iter().map(Into::into).collect();
        entries.sort();
        Self {
            root: root.into(),
            entries,
        }
    }

    /// Directory the snapshot was taken of.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entry names in sorted order.
    #[must_use]
    pub fn entries(&self) -> &[OsString] {
        &self.entries
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Entries owned by the scaffolding or deliberately left in place.
    pub managed: Vec<OsString>,
    /// Pre-existing entries to move into `files/`.
    pub user: Vec<OsString>,
}

/// Split `snapshot` into managed and user entries.
///
/// Pure and deterministic: the same snapshot and reserved set always yield
/// the same partition, with both halves in sorted order.
#[must_use]
pub fn classify(snapshot: &Snapshot, reserved: &ReservedNames) -> Classification {
    let (managed, user): (Vec<OsString>, Vec<OsString>) = snapshot
        .entries()
        .iter()
        .cloned()
        .partition(|name| reserved.is_reserved(name));
    Classification { managed, user }
}
