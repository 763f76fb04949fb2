//! The `.baller` sentinel marker that makes a directory a ball.
use anyhow::{Context as _, Result};

use super::{Ball, VERSION_FILE};
use crate::error::{BallError, Stage};

/// Stamp `ball` as managed by writing `.baller/version`.
///
/// Fails with [`BallError::AlreadyBall`] before touching anything if the
/// marker already exists.  The check and the creation are not atomic with
/// respect to other processes.
///
/// # Errors
///
/// Returns [`BallError::AlreadyBall`] if the marker exists, or a
/// [`Stage::Metadata`] I/O error if it cannot be written.
pub fn write_marker(ball: &Ball, version: &str) -> Result<(), BallError> {
    if ball.is_managed() {
        return Err(BallError::AlreadyBall);
    }
    create_marker(ball, version).map_err(|e| BallError::io(Stage::Metadata, e))
}

fn create_marker(ball: &Ball, version: &str) -> Result<()> {
    let meta = ball.meta_dir();
    std::fs::create_dir(&meta).with_context(|| format!("creating {}", meta.display()))?;
    let version_file = meta.join(VERSION_FILE);
    std::fs::write(&version_file, version)
        .with_context(|| format!("writing {}", version_file.display()))?;
    Ok(())
}

/// Read the scaffolding version a ball was created with.
///
/// Returns `None` for a marker without a version file.
///
/// # Errors
///
/// Returns an error if the version file exists but cannot be read.
pub fn read_version(ball: &Ball) -> Result<Option<String>> {
    let path = ball.meta_dir().join(VERSION_FILE);
    match std::fs::read_to_string(&path) {
        Ok(version) => Ok(Some(version)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
}
