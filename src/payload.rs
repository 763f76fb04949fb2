//! The bundled scaffold payload: lifecycle scripts and documentation templates.
//!
//! The payload is read-only source data.  It is laid out as
//!
//! ```text
//! payload/
//! ├── scripts/      copied verbatim into the ball root (nested dirs included)
//! └── templates/    rendered into the ball root, minus the last extension
//! ```
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Subdirectory holding lifecycle scripts.
const SCRIPTS_DIR: &str = "scripts";

/// Subdirectory holding documentation templates.
const TEMPLATES_DIR: &str = "templates";

/// Payload directory shipped with the crate sources.
const BUILTIN_PAYLOAD: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/payload");

/// A documentation template and the file name it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template file inside `templates/`.
    pub source: PathBuf,
    /// Name of the rendered file in the ball root (e.g. `README.md`).
    pub output: OsString,
}

/// Handle to a payload directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    root: PathBuf,
}

impl Payload {
    /// Open the payload at `root`, checking that it has the expected layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` lacks a `scripts/` or `templates/` directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !is_payload_root(&root) {
            anyhow::bail!(
                "{} is not a scaffold payload (expected {SCRIPTS_DIR}/ and {TEMPLATES_DIR}/)",
                root.display()
            );
        }
        Ok(Self { root })
    }

    /// Find the payload directory.
    ///
    /// `explicit` (from a flag, env var, or config file) wins.  Otherwise the
    /// payload shipped with the crate sources is used, then one installed
    /// next to the binary under `share/baller/payload`.
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate has the payload layout.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(root) = explicit {
            return Self::open(root);
        }

        let mut candidates = vec![PathBuf::from(BUILTIN_PAYLOAD)];
        if let Ok(exe) = std::env::current_exe()
            && let Some(parent) = exe.parent()
        {
            candidates.push(parent.join("../share/baller/payload"));
        }

        for candidate in candidates {
            if is_payload_root(&candidate) {
                let root = dunce::canonicalize(&candidate)
                    .with_context(|| format!("resolving payload {}", candidate.display()))?;
                return Ok(Self { root });
            }
        }

        anyhow::bail!("cannot locate scaffold payload. Use --payload or set BALLER_PAYLOAD");
    }

    /// Payload root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory whose contents are copied into every ball.
    #[must_use]
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }

    /// Directory holding documentation templates.
    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Top-level entry names of `scripts/`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the scripts directory cannot be read.
    pub fn script_names(&self) -> Result<Vec<OsString>> {
        list_names(&self.scripts_dir())
    }

    /// Every template in `templates/`, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the templates directory cannot be read.
    pub fn templates(&self) -> Result<Vec<Template>> {
        let dir = self.templates_dir();
        Ok(list_names(&dir)?
            .into_iter()
            .map(|name| {
                let source = dir.join(&name);
                let output = Path::new(&name)
                    .file_stem()
                    .map_or_else(|| name.clone(), std::ffi::OsStr::to_os_string);
                Template { source, output }
            })
            .collect())
    }
}

fn is_payload_root(path: &Path) -> bool {
    path.join(SCRIPTS_DIR).is_dir() && path.join(TEMPLATES_DIR).is_dir()
}

fn list_names(dir: &Path) -> Result<Vec<OsString>> {
    let mut names = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .map(|entry| {
            entry
                .map(|e| e.file_name())
                .with_context(|| format!("reading entry in {}", dir.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
