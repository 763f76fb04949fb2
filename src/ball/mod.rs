//! The directory-transformation engine.
//!
//! A *ball* is a directory whose pre-existing entries have been moved into
//! [`FILES_DIR`] and which carries the scaffolding payload alongside them.
//! Each submodule implements one step of that transformation:
//!
//! - **[`classify`]**: split a directory snapshot into scaffold and user entries
//! - **[`unused_path`]**: pick a collision-free temporary name
//! - **[`relocate`]**: move user entries into `files/`
//! - **[`metadata`]**: write and detect the `.baller` sentinel marker
//! - **[`scaffold`]**: copy the payload scripts, permissions intact
//! - **[`docs`]**: render documentation templates such as `README.md`
//! - **[`teardown`]**: reverse all of the above
pub mod classify;
pub mod docs;
pub mod metadata;
pub mod relocate;
pub mod reserved;
pub mod scaffold;
pub mod teardown;
pub mod unused_path;

use std::path::{Path, PathBuf};

pub use reserved::ReservedNames;

/// Name of the sentinel marker directory.
pub const META_DIR: &str = ".baller";

/// Name of the version file inside [`META_DIR`].
pub const VERSION_FILE: &str = "version";

/// Name of the user-content subdirectory.
pub const FILES_DIR: &str = "files";

/// Version-control directory left in place at the ball root.
pub const VCS_DIR: &str = ".git";

/// Scaffolding version stamped into every new ball.
pub const VERSION: &str = match option_env!("BALLER_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// A directory that may or may not be a ball.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    root: PathBuf,
}

impl Ball {
    /// Refer to the directory at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this ball lives in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the sentinel marker directory.
    #[must_use]
    pub fn meta_dir(&self) -> PathBuf {
        self.root.join(META_DIR)
    }

    /// Path of the user-content subdirectory.
    #[must_use]
    pub fn files_dir(&self) -> PathBuf {
        self.root.join(FILES_DIR)
    }

    /// Whether the sentinel marker exists.
    ///
    /// A dangling symlink at the marker path still counts, so a broken marker
    /// never lets a second scaffolding pass run over an existing ball.
    #[must_use]
    pub fn is_managed(&self) -> bool {
        self.meta_dir().symlink_metadata().is_ok()
    }

    /// Final path component, used as the ball's display name.
    ///
    /// Falls back to the full path when there is no final component (e.g.
    /// `/`).
    #[must_use]
    pub fn name(&self) -> String {
        self.root.file_name().map_or_else(
            || self.root.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}
