//! Destroy command implementation.
use super::Context;
use crate::ball::{Ball, metadata, teardown};
use crate::error::CommandError;

/// Remove all scaffolding from the working directory and restore its files.
///
/// # Errors
///
/// Returns an error if the directory is not a ball or teardown fails.
pub fn run(ctx: &Context) -> Result<String, CommandError> {
    let ball = Ball::new(&ctx.cwd);
    let name = ball.name();

    ctx.log.stage(&format!("Destroying {}", ball.root().display()));
    match metadata::read_version(&ball) {
        Ok(Some(version)) => ctx.log.debug(&format!("ball created by baller {version}")),
        Ok(None) => {}
        Err(e) => ctx.log.debug(&format!("{e:#}")),
    }

    let restored =
        teardown::teardown(&ball, &ctx.reserved).map_err(|e| CommandError::new("destroy", e))?;
    if restored.had_holder {
        ctx.log
            .debug(&format!("restored {} entries", restored.entries.len()));
    }

    Ok(format!("Destroyed \"{name}\" ball"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::init;
    use crate::commands::test_helpers::context;
    use crate::error::ErrorKind;

    #[test]
    fn plain_directory_is_not_managed() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        let err = run(&ctx).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotManaged);
        assert_eq!(
            err.to_string(),
            "Could not destroy ball: directory is not a ball"
        );
    }

    #[test]
    fn destroy_after_init_names_directory() {
        let parent = tempfile::tempdir().unwrap();
        let dir = parent.path().join("dots");
        std::fs::create_dir(&dir).unwrap();
        let ctx = context(&dir);
        init::run(&ctx).unwrap();

        assert_eq!(run(&ctx).unwrap(), "Destroyed \"dots\" ball");
        assert!(std::fs::read_dir(&dir).unwrap().next().is_none());
    }
}
