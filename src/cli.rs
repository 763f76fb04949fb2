use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "baller",
    about = "Turn directories into managed balls and back again",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Config file (default: $XDG_CONFIG_HOME/baller/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Scaffold payload directory (overrides BALLER_PAYLOAD)
    #[arg(long, global = true)]
    pub payload: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new, empty ball in a new directory
    Create {
        /// Name of the directory to create
        name: Option<String>,
    },
    /// Initialize current directory and files as a ball
    Init,
    /// Update the current ball to the latest scripts
    Update,
    /// Remove all scaffolding and restore the original files
    #[command(visible_alias = "unball")]
    Destroy,
    /// Deploy the current ball (or update an existing deploy)
    Deploy,
    /// Print shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Print version information
    Version,
}

impl Command {
    /// Short name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Init => "init",
            Self::Update => "update",
            Self::Destroy => "destroy",
            Self::Deploy => "deploy",
            Self::Completions { .. } => "completions",
            Self::Version => "version",
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_with_name() {
        let cli = Cli::parse_from(["baller", "create", "dots"]);
        assert!(
            matches!(&cli.command, Command::Create { name: Some(n) } if n == "dots"),
            "got {:?}",
            cli.command
        );
    }

    #[test]
    fn parse_create_without_name() {
        let cli = Cli::parse_from(["baller", "create"]);
        assert!(matches!(cli.command, Command::Create { name: None }));
    }

    #[test]
    fn parse_init() {
        let cli = Cli::parse_from(["baller", "init"]);
        assert!(matches!(cli.command, Command::Init));
    }

    #[test]
    fn unball_is_an_alias_for_destroy() {
        let cli = Cli::parse_from(["baller", "unball"]);
        assert!(matches!(cli.command, Command::Destroy));
        let cli = Cli::parse_from(["baller", "destroy"]);
        assert!(matches!(cli.command, Command::Destroy));
    }

    #[test]
    fn parse_stubs() {
        assert!(matches!(
            Cli::parse_from(["baller", "update"]).command,
            Command::Update
        ));
        assert!(matches!(
            Cli::parse_from(["baller", "deploy"]).command,
            Command::Deploy
        ));
    }

    #[test]
    fn parse_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "baller",
            "init",
            "-v",
            "--payload",
            "/opt/payload",
            "--config",
            "/tmp/c.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.global.payload, Some(PathBuf::from("/opt/payload")));
        assert_eq!(cli.global.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["baller", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Command::Completions {
                shell: clap_complete::Shell::Bash
            }
        ));
    }

    #[test]
    fn command_names_are_unique() {
        let names = [
            Command::Create { name: None }.name(),
            Command::Init.name(),
            Command::Update.name(),
            Command::Destroy.name(),
            Command::Deploy.name(),
            Command::Version.name(),
        ];
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
