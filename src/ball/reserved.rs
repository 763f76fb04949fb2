//! The set of entry names owned by the scaffolding rather than the user.
use anyhow::Result;
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

use super::{FILES_DIR, META_DIR, VCS_DIR};
use crate::payload::Payload;

/// Names excluded from relocation when a directory becomes a ball.
///
/// Built once at startup and passed by reference into classification and
/// teardown.  Names fall into two roles:
///
/// - **scaffold** names are produced by scaffolding (the sentinel marker,
///   payload scripts, rendered templates) and are deleted by teardown;
/// - **ignored** names (`.git`, `LICENSE`, configured extras) are left in
///   place at the ball root and never deleted.
///
/// [`FILES_DIR`] is never reserved: a pre-existing entry with that name is
/// ordinary user content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNames {
    scaffold: BTreeSet<OsString>,
    ignored: BTreeSet<OsString>,
}

impl ReservedNames {
    /// Build a reserved set from explicit scaffold and ignored names.
    ///
    /// The sentinel marker is always a scaffold name and `.git` is always
    /// ignored.
    #[must_use]
    pub fn new<S, I>(scaffold: S, ignored: I) -> Self
    where
        S: IntoIterator,
        S::Item: Into<OsString>,
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let files = OsStr::new(FILES_DIR);
        let mut scaffold: BTreeSet<OsString> = scaffold.into_iter().map(Into::into).collect();
        scaffold.insert(META_DIR.into());
        scaffold.remove(files);

        let mut ignored: BTreeSet<OsString> = ignored.into_iter().map(Into::into).collect();
        ignored.insert(VCS_DIR.into());
        ignored.remove(files);
        ignored.retain(|name| !scaffold.contains(name));

        Self { scaffold, ignored }
    }

    /// Build the reserved set for `payload`.
    ///
    /// Scaffold names are every top-level entry of the payload's `scripts/`
    /// plus every rendered template name.  `extra_ignored` is appended to the
    /// default ignored names.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload directories cannot be listed.
    pub fn from_payload(payload: &Payload, extra_ignored: &[String]) -> Result<Self> {
        let mut scaffold = payload.script_names()?;
        scaffold.extend(payload.templates()?.into_iter().map(|t| t.output));

        let ignored = ["LICENSE".to_string()]
            .into_iter()
            .chain(extra_ignored.iter().cloned());

        Ok(Self::new(scaffold, ignored))
    }

    /// Whether `name` must not be treated as user content.
    #[must_use]
    pub fn is_reserved(&self, name: &OsStr) -> bool {
        self.is_scaffold(name) || self.ignored.contains(name)
    }

    /// Whether `name` is produced by scaffolding.
    #[must_use]
    pub fn is_scaffold(&self, name: &OsStr) -> bool {
        self.scaffold.contains(name)
    }

    /// Scaffold names in sorted order.
    pub fn scaffold_names(&self) -> impl Iterator<Item = &OsStr> {
        self.scaffold.iter().map(OsString::as_os_str)
    }

    /// Ignored names in sorted order.
    pub fn ignored_names(&self) -> impl Iterator<Item = &OsStr> {
        self.ignored.iter().map(OsString::as_os_str)
    }
}
