// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the three positional arguments of the render bridge

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tplbridge")]
#[command(about = "Renders a template file with a JSON payload for a calling process")]
#[command(version)]
pub struct Args {
    #[arg(help = "Base directory for template and partial resolution")]
    pub basedir: PathBuf,

    #[arg(help = "Template path, either a pre-rendered temp path or relative to the base directory")]
    pub template: String,

    #[arg(help = "Path to a UTF-8 file containing a single JSON document")]
    pub data_file: PathBuf,
}

/// Outcome of argument intake. Help and version requests are not render
/// attempts and bypass the error contract entirely.
pub enum ParseOutcome {
    Run(Box<Args>),
    Informational(String),
    Invalid(String),
}

impl Args {
    /// Parse command line arguments without ever terminating the process.
    ///
    /// Invalid arguments must flow into the same stdout error contract as
    /// render failures, so clap's exit-on-error behavior is not used.
    pub fn parse_args() -> ParseOutcome {
        match Self::try_parse() {
            Ok(args) => ParseOutcome::Run(Box::new(args)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                ParseOutcome::Informational(e.to_string())
            }
            Err(e) => ParseOutcome::Invalid(format!("invalid arguments: {}", e.kind())),
        }
    }
}
