use crate::layout::DEFAULT_BRANCH;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// got - A simple version control system
#[derive(Parser)]
#[command(name = "got")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new repository
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<PathBuf>,
        /// Branch HEAD points at in the new repository
        #[arg(short = 'b', long, default_value = DEFAULT_BRANCH)]
        initial_branch: String,
    },
}

/// Usage text printed when no command, or an unknown one, is given
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
