use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod forms;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit values to a built-in form and report field errors.
    Check(CheckArgs),
    /// List built-in forms and their fields.
    Forms(FormsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Forms(args) => forms::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Built-in form to validate against (login, signup, todo).
    pub form: String,
    /// Values as a JSON object.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the values JSON object from a file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
    /// Treat fields the form does not declare as an error.
    #[arg(long, env = "FORMGUARD_STRICT")]
    pub strict: bool,
}

#[derive(Args, Debug, Default)]
pub struct FormsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
