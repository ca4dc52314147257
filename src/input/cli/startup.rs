use std::error::Error;
use std::fmt;
use std::process::ExitCode;

use crate::config::explorer_config::{ConfigError, ExplorerConfig};
use crate::input::cli::args::{CliArgs, CliError, usage};

#[derive(Debug)]
pub enum StartupError {
    Cli(CliError),
    Config(ConfigError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli(err) => write!(f, "{}", err),
            Self::Config(err) => write!(f, "{}", err),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cli(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<CliError> for StartupError {
    fn from(err: CliError) -> Self {
        Self::Cli(err)
    }
}

impl From<ConfigError> for StartupError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Builds the run configuration from `argv`, program name included.
pub fn config_from_command_line(argv: &[String]) -> Result<ExplorerConfig, StartupError> {
    let args = CliArgs::parse(argv.get(1..).unwrap_or_default())?;

    Ok(ExplorerConfig::from_process_env(args)?)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Wrong argument counts get the usage line on stdout; anything else is an
/// error line on stderr.
#[must_use]
pub fn startup_error_message(program: &str, err: &StartupError) -> (OutputStream, String) {
    match err {
        StartupError::Cli(CliError::WrongArgumentCount { .. }) => {
            (OutputStream::Stdout, usage(program))
        }
        _ => (OutputStream::Stderr, format!("error: {}", err)),
    }
}

/// Prints the startup failure and exits with status 1.
pub fn report_startup_error(program: &str, err: &StartupError) -> ExitCode {
    match startup_error_message(program, err) {
        (OutputStream::Stdout, message) => println!("{}", message),
        (OutputStream::Stderr, message) => eprintln!("{}", message),
    }

    ExitCode::FAILURE
}
