//! Ball scaffolding engine.
//!
//! Converts an ordinary directory into a *ball*: its existing entries move
//! into `files/`, a `.baller` marker records the scaffolding version, and a
//! rendered `README.md` plus lifecycle scripts are installed alongside.
//! `destroy` reverses the process.
//!
//! The public API is organised into layers:
//!
//! - **[`payload`]**: locate and list the scaffold payload (scripts and templates)
//! - **[`ball`]**: filesystem steps that build and tear down a ball
//! - **[`commands`]**: top-level subcommand orchestration (`create`, `init`, `destroy`, ...)
//! - **[`config`]**: TOML config file, environment and flag resolution
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod ball;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod payload;
