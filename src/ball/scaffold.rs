//! Copy the payload scripts into a ball.
use anyhow::{Context as _, Result};
use std::path::Path;

use super::Ball;
use crate::payload::Payload;

/// Copy the payload's `scripts/` tree into the ball root.
///
/// Nested directories (e.g. `hooks/`) are recreated and every file keeps the
/// source's permission bits.  Existing files with payload names are
/// replaced; a symlink with a payload name is removed, never written
/// through.
///
/// # Errors
///
/// Returns an error if any directory cannot be created or file cannot be
/// copied.
pub fn install_scripts(payload: &Payload, ball: &Ball) -> Result<()> {
    copy_tree(&payload.scripts_dir(), ball.root())
}

/// Recursively copy the contents of `src` into `dst`, preserving modes.
///
/// Symlinks within the source tree are *followed*, so the destination holds
/// regular files and directories only.
pub(crate) fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)
        .with_context(|| format!("creating directory {}", dst.display()))?;
    for entry in
        std::fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        unlink_non_dir(&dst_path)?;
        if src_path.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).with_context(|| {
                format!("copying {} to {}", src_path.display(), dst_path.display())
            })?;
            let perms = std::fs::metadata(&src_path)
                .with_context(|| format!("reading metadata: {}", src_path.display()))?
                .permissions();
            std::fs::set_permissions(&dst_path, perms)
                .with_context(|| format!("setting permissions: {}", dst_path.display()))?;
        }
    }
    Ok(())
}

/// Remove `path` if it is a file or a symlink, so the next write creates a
/// fresh entry instead of following a link out of the ball.
///
/// Real directories and missing paths are left alone.
pub(crate) fn unlink_non_dir(path: &Path) -> Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if !meta.is_dir() => std::fs::remove_file(path)
            .with_context(|| format!("removing {}", path.display())),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("inspecting {}", path.display())),
    }
}
