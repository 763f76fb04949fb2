//! Deploy command placeholder.
use super::Context;
use crate::error::{BallError, CommandError};

/// Deploy the ball in the working directory.
///
/// Not implemented yet; always fails.
///
/// # Errors
///
/// Always returns [`BallError::NotImplemented`].
pub fn run(_ctx: &Context) -> Result<String, CommandError> {
    Err(CommandError::new(
        "deploy",
        BallError::NotImplemented("deploy"),
    ))
}
