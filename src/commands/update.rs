//! Update command placeholder.
use super::Context;
use crate::error::{BallError, CommandError};

/// Update the ball in the working directory to the latest scripts.
///
/// Not implemented yet; always fails.
///
/// # Errors
///
/// Always returns [`BallError::NotImplemented`].
pub fn run(_ctx: &Context) -> Result<String, CommandError> {
    Err(CommandError::new(
        "update",
        BallError::NotImplemented("update"),
    ))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::context;
    use crate::error::ErrorKind;

    #[test]
    fn update_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&context(dir.path())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert!(err.to_string().contains("update not yet implemented"));
    }
}
