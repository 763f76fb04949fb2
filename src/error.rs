//! Domain-specific error types for the ball engine.
//!
//! Core components return [`anyhow::Result`] with path-level context.  The
//! command layer catches those failures at its boundary and re-raises each
//! one as a single [`BallError`] labelled with the [`Stage`] that failed, so
//! callers see a stable, descriptive message rather than the raw I/O cause.
//!
//! # Error hierarchy
//!
//! ```text
//! CommandError              "Could not <action> ball: <reason>"
//! └── BallError
//!     ├── MissingName       InvalidArgument
//!     ├── DirectoryExists   AlreadyExists
//!     ├── AlreadyBall       AlreadyExists
//!     ├── NotBall           NotManaged
//!     ├── Io { stage, .. }  IoFailure
//!     └── NotImplemented    Unsupported
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`BallError`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was missing or empty.
    InvalidArgument,
    /// The target directory or the sentinel marker is already present.
    AlreadyExists,
    /// The target directory is not a ball.
    NotManaged,
    /// An underlying filesystem operation failed.
    IoFailure,
    /// The command exists for interface parity but does nothing yet.
    Unsupported,
}

/// The step of a command during which a filesystem failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Creating the target directory for `create`.
    Directory,
    /// Relocating pre-existing entries into `files/`.
    FilesDir,
    /// Writing the sentinel marker and version file.
    Metadata,
    /// Rendering and writing `README.md`.
    Readme,
    /// Copying the payload scripts.
    Scripts,
    /// Tearing a ball down.
    Destroy,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Directory => "directory creation",
            Self::FilesDir => "files subdirectory creation",
            Self::Metadata => "metadata creation",
            Self::Readme => "README creation",
            Self::Scripts => "scripts creation",
            Self::Destroy => "destroy",
        };
        f.write_str(label)
    }
}

/// Errors raised by ball commands.
#[derive(Error, Debug)]
pub enum BallError {
    /// `create` was called without a name.
    #[error("no name given")]
    MissingName,

    /// `create` target path is already occupied.
    #[error("Directory \"{}\" already exists", .0.display())]
    DirectoryExists(PathBuf),

    /// The directory already carries a sentinel marker.
    #[error("directory is already a ball")]
    AlreadyBall,

    /// The directory carries no sentinel marker.
    #[error("directory is not a ball")]
    NotBall,

    /// A filesystem operation failed during `stage`.
    ///
    /// The cause is kept as the error source for logging but is not part of
    /// the displayed message.
    #[error("{stage} failed")]
    Io {
        /// Step that failed.
        stage: Stage,
        /// Underlying failure with path context.
        #[source]
        source: anyhow::Error,
    },

    /// The command is a placeholder.
    #[error("{0} not yet implemented")]
    NotImplemented(&'static str),
}

impl BallError {
    /// Wrap a component failure with the stage label it occurred in.
    #[must_use]
    pub fn io(stage: Stage, source: anyhow::Error) -> Self {
        Self::Io { stage, source }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingName => ErrorKind::InvalidArgument,
            Self::DirectoryExists(_) | Self::AlreadyBall => ErrorKind::AlreadyExists,
            Self::NotBall => ErrorKind::NotManaged,
            Self::Io { .. } => ErrorKind::IoFailure,
            Self::NotImplemented(_) => ErrorKind::Unsupported,
        }
    }
}

/// A [`BallError`] attributed to the command that raised it.
#[derive(Error, Debug)]
#[error("Could not {action} ball: {source}")]
pub struct CommandError {
    /// Verb describing the command (`create`, `initialize`, ...).
    pub action: &'static str,
    /// What went wrong.
    #[source]
    pub source: BallError,
}

impl CommandError {
    /// Attribute `source` to `action`.
    #[must_use]
    pub const fn new(action: &'static str, source: BallError) -> Self {
        Self { action, source }
    }

    /// Classify the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}
