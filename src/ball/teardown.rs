//! Turn a ball back into a plain directory.
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;

use super::unused_path::unused_path;
use super::{Ball, ReservedNames};
use crate::error::{BallError, Stage};

/// What [`teardown`] put back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restored {
    /// Names moved from `files/` back to the ball root, sorted.
    pub entries: Vec<OsString>,
    /// Whether the ball had a `files/` holder at all.
    pub had_holder: bool,
}

/// Remove all scaffolding from `ball` and move its `files/` contents back.
///
/// Steps, in order:
///
/// 1. refuse unless the sentinel marker exists (nothing is touched);
/// 2. recursively delete every scaffold entry present at the root;
/// 3. rename `files/` to a temporary name, so an entry inside it that is
///    itself called `files` can be moved out;
/// 4. move each entry back to the root, refusing to overwrite;
/// 5. remove the empty temporary directory.
///
/// Nothing is rolled back on failure.
///
/// # Errors
///
/// Returns [`BallError::NotBall`] if there is no marker, or a
/// [`Stage::Destroy`] I/O error for any failed step.
pub fn teardown(ball: &Ball, reserved: &ReservedNames) -> Result<Restored, BallError> {
    if !ball.is_managed() {
        return Err(BallError::NotBall);
    }
    remove_scaffolding(ball.root(), reserved)
        .and_then(|()| restore_files(ball))
        .map_err(|e| BallError::io(Stage::Destroy, e))
}

fn remove_scaffolding(root: &Path, reserved: &ReservedNames) -> Result<()> {
    for name in reserved.scaffold_names() {
        let path = root.join(name);
        let meta = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e).with_context(|| format!("inspecting {}", path.display())),
        };
        let removed = if meta.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        removed.with_context(|| format!("removing {}", path.display()))?;
        tracing::debug!("removed {}", path.display());
    }
    Ok(())
}

fn restore_files(ball: &Ball) -> Result<Restored> {
    let root = ball.root();
    let files = ball.files_dir();
    match files.symlink_metadata() {
        Err(_) => {
            tracing::warn!("{} is missing; nothing to restore", files.display());
            return Ok(Restored::default());
        }
        Ok(meta) if !meta.is_dir() => {
            anyhow::bail!("{} is not a directory", files.display());
        }
        Ok(_) => {}
    }

    let holder = unused_path(root);
    std::fs::rename(&files, &holder)
        .with_context(|| format!("renaming {} to {}", files.display(), holder.display()))?;

    let mut entries = std::fs::read_dir(&holder)
        .with_context(|| format!("reading directory {}", holder.display()))?
        .map(|entry| {
            entry
                .map(|e| e.file_name())
                .with_context(|| format!("reading entry in {}", holder.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    entries.sort();

    for name in &entries {
        let from = holder.join(name);
        let to = root.join(name);
        if to.symlink_metadata().is_ok() {
            anyhow::bail!("refusing to overwrite {}", to.display());
        }
        std::fs::rename(&from, &to)
            .with_context(|| format!("moving {} to {}", from.display(), to.display()))?;
        tracing::debug!("restored {}", Path::new(name).display());
    }

    std::fs::remove_dir(&holder).with_context(|| format!("removing {}", holder.display()))?;
    Ok(Restored {
        entries,
        had_holder: true,
    })
}
