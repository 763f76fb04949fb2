use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use baller::cli::{Cli, Command};
use baller::commands::{self, Context};
use baller::config::Settings;
use baller::logging::{Logger, init_subscriber};

fn main() -> Result<ExitCode> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    match &args.command {
        Command::Version => {
            println!("baller {}", baller::ball::VERSION);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "baller", &mut std::io::stdout());
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let command = args.command.name();
    init_subscriber(args.verbose, command);
    let log = Logger::new(command);

    let settings = Settings::load(&args.global)?;
    let cwd = std::env::current_dir()?;
    let ctx = Context::new(&settings, cwd, log.clone())?;

    let outcome = match &args.command {
        Command::Create { name } => commands::create::run(&ctx, name.as_deref()),
        Command::Init => commands::init::run(&ctx),
        Command::Update => commands::update::run(&ctx),
        Command::Destroy => commands::destroy::run(&ctx),
        Command::Deploy => commands::deploy::run(&ctx),
        Command::Completions { .. } | Command::Version => return Ok(ExitCode::SUCCESS),
    };

    match outcome {
        Ok(msg) => {
            log.info(&msg);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log.error(&e.to_string());
            let chain = anyhow::Error::from(e);
            for cause in chain.chain().skip(2) {
                log.debug(&format!("caused by: {cause}"));
            }
            log.debug(&format!("log file: {}", log.log_path().display()));
            Ok(ExitCode::FAILURE)
        }
    }
}
