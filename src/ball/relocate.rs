//! Move pre-existing entries into the `files/` holder.
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::Path;

use super::Ball;
use super::unused_path::unused_path;

/// Move each entry named in `user` from the ball root into `files/`.
///
/// The holder is built under a temporary name and renamed into place last,
/// so a user entry that is itself called `files` is moved like any other.
/// Entries are renamed, never copied.
///
/// If a rename fails, entries already moved are put back and the empty
/// temporary holder is removed before the error is returned.  Rollback is
/// best effort; failures during it are logged and leave the temporary
/// holder on disk for inspection.
///
/// # Errors
///
/// Returns an error if the holder cannot be created or any rename fails.
pub fn relocate(ball: &Ball, user: &[OsString]) -> Result<()> {
    let root = ball.root();
    let holder = unused_path(root);
    std::fs::create_dir(&holder).with_context(|| format!("creating {}", holder.display()))?;
    tracing::debug!("staging user files in {}", holder.display());

    for (index, name) in user.iter().enumerate() {
        let from = root.join(name);
        let to = holder.join(name);
        if let Err(e) = std::fs::rename(&from, &to) {
            rollback(root, &holder, user.get(..index).unwrap_or_default());
            return Err(e).with_context(|| {
                format!("moving {} to {}", from.display(), to.display())
            });
        }
        tracing::debug!("moved {}", Path::new(name).display());
    }

    let files = ball.files_dir();
    if let Err(e) = std::fs::rename(&holder, &files) {
        rollback(root, &holder, user);
        return Err(e).with_context(|| format!("renaming holder to {}", files.display()));
    }
    Ok(())
}

/// Move `moved` back from `holder` to `root`, then drop the holder if empty.
fn rollback(root: &Path, holder: &Path, moved: &[OsString]) {
    for name in moved.iter().rev() {
        let from = holder.join(name);
        let to = root.join(name);
        if let Err(e) = std::fs::rename(&from, &to) {
            tracing::warn!(
                "could not restore {} to {}: {e}",
                from.display(),
                to.display()
            );
        }
    }
    if let Err(e) = std::fs::remove_dir(holder) {
        tracing::warn!("leaving {} in place: {e}", holder.display());
    }
}
