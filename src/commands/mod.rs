//! Top-level command orchestration.
//!
//! Each command sequences the [`ball`](crate::ball) components against a
//! directory and returns either a success message or a [`CommandError`]
//! naming the stage that failed.
pub mod create;
pub mod deploy;
pub mod destroy;
pub mod init;
pub mod update;

use anyhow::Result;
use std::path::PathBuf;

use crate::ball::classify::{Snapshot, classify};
use crate::ball::docs::{DocVars, HandlebarsRenderer, Render, write_docs};
use crate::ball::{self, Ball, ReservedNames, metadata, relocate, scaffold};
use crate::config::Settings;
use crate::error::{BallError, Stage};
use crate::logging::Logger;
use crate::payload::Payload;

/// Everything a command needs, built once at startup.
#[derive(Debug)]
pub struct Context {
    /// Directory commands resolve against (the process working directory).
    pub cwd: PathBuf,
    /// Scaffold payload to install.
    pub payload: Payload,
    /// Names excluded from relocation and removed by teardown.
    pub reserved: ReservedNames,
    /// Name rendered into generated documentation.
    pub username: String,
    /// Documentation renderer.
    pub renderer: Box<dyn Render>,
    /// Logger for stage and progress output.
    pub log: Logger,
}

impl Context {
    /// Locate the payload and compute the reserved names from `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be found or listed.
    pub fn new(settings: &Settings, cwd: PathBuf, log: Logger) -> Result<Self> {
        let payload = Payload::locate(settings.payload.as_deref())?;
        log.debug(&format!("payload: {}", payload.root().display()));
        let reserved = ReservedNames::from_payload(&payload, &settings.ignore)?;
        Ok(Self {
            cwd,
            payload,
            reserved,
            username: settings.username.clone(),
            renderer: Box::new(HandlebarsRenderer::new()),
            log,
        })
    }
}

/// Turn `target` into a ball named `name`.
///
/// Shared by `create` and `init`: relocate existing entries, stamp the
/// marker, render documentation, then install scripts.
///
/// # Errors
///
/// Returns [`BallError::AlreadyBall`] before any mutation if `target` is
/// already a ball, otherwise an I/O error labelled with the failing stage.
pub fn make_ball(ctx: &Context, target: &Ball, name: &str) -> Result<(), BallError> {
    if target.is_managed() {
        return Err(BallError::AlreadyBall);
    }

    ctx.log.stage("Relocating existing files");
    let snapshot =
        Snapshot::take(target.root()).map_err(|e| BallError::io(Stage::FilesDir, e))?;
    let classification = classify(&snapshot, &ctx.reserved);
    for clash in classification
        .managed
        .iter()
        .filter(|n| ctx.reserved.is_scaffold(n))
    {
        ctx.log.warn(&format!(
            "{} will be replaced by scaffolding",
            std::path::Path::new(clash).display()
        ));
    }
    ctx.log.debug(&format!(
        "{} entries to relocate",
        classification.user.len()
    ));
    relocate::relocate(target, &classification.user)
        .map_err(|e| BallError::io(Stage::FilesDir, e))?;

    ctx.log.stage("Writing metadata");
    metadata::write_marker(target, ball::VERSION)?;

    ctx.log.stage("Rendering documentation");
    let vars = DocVars {
        name: name.to_string(),
        username: ctx.username.clone(),
    };
    write_docs(&ctx.payload, target, ctx.renderer.as_ref(), &vars)
        .map_err(|e| BallError::io(Stage::Readme, e))?;

    ctx.log.stage("Installing scripts");
    scaffold::install_scripts(&ctx.payload, target)
        .map_err(|e| BallError::io(Stage::Scripts, e))?;

    Ok(())
}
