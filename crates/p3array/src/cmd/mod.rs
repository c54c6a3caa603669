use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod convert;
pub mod info;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a P3 file into a C byte-array header.
    Convert(ConvertArgs),
    /// List the inferred frame headers of a P3 file.
    Info(InfoArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Convert(args) => convert::run(args, format),
        Command::Info(args) => info::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input P3 file.
    pub input: Option<PathBuf>,
    /// Output header file.
    pub output: Option<PathBuf>,
    /// Identifier for the generated array and its length constant.
    pub array_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// P3 file to inspect.
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
