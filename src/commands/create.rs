//! Create command implementation.
use std::io::ErrorKind;

use super::{Context, make_ball};
use crate::ball::Ball;
use crate::error::{BallError, CommandError, Stage};

const ACTION: &str = "create";

/// Create a new, empty ball in a new directory called `name`.
///
/// `name` is resolved against the context's working directory.
///
/// # Errors
///
/// Returns an error if `name` is missing or empty, the directory already
/// exists, or any scaffolding stage fails.
pub fn run(ctx: &Context, name: Option<&str>) -> Result<String, CommandError> {
    let fail = |e| CommandError::new(ACTION, e);

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| fail(BallError::MissingName))?;
    let path = ctx.cwd.join(name);

    ctx.log.stage(&format!("Creating {}", path.display()));
    if let Err(e) = std::fs::create_dir(&path) {
        return Err(fail(if e.kind() == ErrorKind::AlreadyExists {
            BallError::DirectoryExists(name.into())
        } else {
            BallError::io(
                Stage::Directory,
                anyhow::Error::new(e).context(format!("creating {}", path.display())),
            )
        }));
    }

    let ball = Ball::new(path);
    let ball_name = ball.name();
    make_ball(ctx, &ball, &ball_name).map_err(fail)?;
    Ok(format!("Created \"{ball_name}\" ball"))
}
