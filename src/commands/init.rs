//! Init command implementation.
use super::{Context, make_ball};
use crate::ball::Ball;
use crate::error::CommandError;

/// Turn the working directory and its files into a ball.
///
/// # Errors
///
/// Returns an error if the directory is already a ball or any scaffolding
/// stage fails.
pub fn run(ctx: &Context) -> Result<String, CommandError> {
    let ball = Ball::new(&ctx.cwd);
    let name = ball.name();
    ctx.log
        .stage(&format!("Initializing {}", ball.root().display()));
    make_ball(ctx, &ball, &name).map_err(|e| CommandError::new("initialize", e))?;
    Ok(format!("Initialized \"{name}\" ball"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::context;
    use crate::error::ErrorKind;

    #[test]
    fn success_message_uses_directory_name() {
        let parent = tempfile::tempdir().unwrap();
        let dir = parent.path().join("dots");
        std::fs::create_dir(&dir).unwrap();
        let ctx = context(&dir);

        assert_eq!(run(&ctx).unwrap(), "Initialized \"dots\" ball");
    }

    #[test]
    fn second_init_is_already_exists() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        run(&ctx).unwrap();

        let err = run(&ctx).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(
            err.to_string(),
            "Could not initialize ball: directory is already a ball"
        );
    }
}
