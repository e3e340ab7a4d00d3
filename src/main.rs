use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use got::InitOptions;
use got::cli::{self, Cli, Commands};
use got::commands;
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug got init)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, &args),
    };

    let Some(command) = cli.command else {
        print!("{}", cli::usage());
        return ExitCode::FAILURE;
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Init {
            path,
            initial_branch,
        } => {
            let work_dir = match path {
                Some(path) => path,
                None => env::current_dir().context("Failed to determine current directory")?,
            };
            let options = InitOptions::new().with_initial_branch(initial_branch);
            commands::init(&work_dir, &options)?;
        }
    }

    Ok(())
}

fn report_parse_error(e: clap::Error, args: &[OsString]) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        ErrorKind::InvalidSubcommand => {
            let name = args
                .get(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .unwrap_or_default();
            eprintln!("Unknown command: {name}");
            print!("{}", cli::usage());
        }
        _ => {
            let _ = e.print();
        }
    }
    ExitCode::FAILURE
}
