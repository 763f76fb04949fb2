// Shared helpers for integration tests.
//
// Provides a temporary directory wired to a command `Context` and a fluent
// builder so each test can lay out pre-existing files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use baller::commands::Context;
use baller::config::Settings;
use baller::logging::Logger;

/// Payload shipped with the crate.
pub fn payload_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("payload")
}

/// Build a command context rooted at `cwd`.
pub fn context_for(cwd: &Path, ignore: &[&str]) -> Context {
    let settings = Settings {
        payload: Some(payload_dir()),
        username: "tester".to_string(),
        ignore: ignore.iter().map(ToString::to_string).collect(),
    };
    Context::new(&settings, cwd.to_path_buf(), Logger::new("test")).expect("build context")
}

/// Every path under `root`, relative and sorted, directories suffixed `/`.
pub fn listing(root: &Path) -> String {
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.join("\n")
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").path())
        .collect();
    entries.sort();
    for path in entries {
        let rel = path
            .strip_prefix(root)
            .expect("strip prefix")
            .to_string_lossy()
            .replace('\\', "/");
        if path.symlink_metadata().expect("metadata").is_dir() {
            out.push(format!("{rel}/"));
            walk(root, &path, out);
        } else {
            out.push(rel);
        }
    }
}

/// Observable state of one entry: file bytes (or `None` for directories)
/// and permission bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryState {
    pub contents: Option<Vec<u8>>,
    pub mode: u32,
}

/// Recursive snapshot of everything under `root`, keyed by relative path.
pub fn tree_state(root: &Path) -> BTreeMap<PathBuf, EntryState> {
    let mut state = BTreeMap::new();
    collect_state(root, root, &mut state);
    state
}

fn collect_state(root: &Path, dir: &Path, state: &mut BTreeMap<PathBuf, EntryState>) {
    for entry in std::fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        let meta = path.symlink_metadata().expect("metadata");
        let rel = path.strip_prefix(root).expect("strip prefix").to_path_buf();
        let contents = if meta.is_dir() {
            collect_state(root, &path, state);
            None
        } else {
            Some(std::fs::read(&path).expect("read file"))
        };
        state.insert(
            rel,
            EntryState {
                contents,
                mode: mode_of(&meta),
            },
        );
    }
}

#[cfg(unix)]
fn mode_of(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt as _;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_of(meta: &std::fs::Metadata) -> u32 {
    u32::from(meta.permissions().readonly())
}

/// An isolated directory backed by a [`tempfile::TempDir`].
pub struct BallTestContext {
    /// Temporary parent directory; commands run with this as their cwd.
    pub root: tempfile::TempDir,
    /// Extra names left in place by `init`.
    pub ignore: Vec<String>,
}

impl BallTestContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            ignore: Vec::new(),
        }
    }

    /// Path to the working directory.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Command context whose working directory is the temp root.
    pub fn context(&self) -> Context {
        self.context_in(self.root.path())
    }

    /// Command context whose working directory is `cwd`.
    pub fn context_in(&self, cwd: &Path) -> Context {
        let ignore: Vec<&str> = self.ignore.iter().map(String::as_str).collect();
        context_for(cwd, &ignore)
    }
}

/// Fluent builder for [`BallTestContext`].
pub struct TestContextBuilder {
    ctx: BallTestContext,
}

impl TestContextBuilder {
    /// Begin building an empty context.
    pub fn new() -> Self {
        Self {
            ctx: BallTestContext::new(),
        }
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.ctx.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }

    /// Create the directory `rel`.
    pub fn with_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.ctx.root.path().join(rel)).expect("create dir");
        self
    }

    /// Set the permission bits of `rel`.
    #[cfg(unix)]
    pub fn with_mode(self, rel: &str, mode: u32) -> Self {
        use std::os::unix::fs::PermissionsExt as _;
        std::fs::set_permissions(
            self.ctx.root.path().join(rel),
            std::fs::Permissions::from_mode(mode),
        )
        .expect("set permissions");
        self
    }

    /// Leave `name` in place during `init`.
    pub fn with_ignored(mut self, name: &str) -> Self {
        self.ctx.ignore.push(name.to_string());
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> BallTestContext {
        self.ctx
    }
}
