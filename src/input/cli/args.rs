use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Positional arguments following the program name.
pub const ARGUMENT_NAMES: [&str; 6] = [
    "workerCount",
    "resolution",
    "minReal",
    "maxReal",
    "minImaginary",
    "maxImaginary",
];

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    WrongArgumentCount { found: usize },
    InvalidNumber { name: &'static str, value: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgumentCount { found } => write!(
                f,
                "expected {} arguments, got {}",
                ARGUMENT_NAMES.len(),
                found
            ),
            Self::InvalidNumber { name, value } => {
                write!(f, "{} must be a number, got '{}'", name, value)
            }
        }
    }
}

impl Error for CliError {}

/// Raw command-line values, parsed but not yet validated against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliArgs {
    pub worker_count: u32,
    pub resolution: u32,
    pub min_real: f64,
    pub max_real: f64,
    pub min_imag: f64,
    pub max_imag: f64,
}

#[must_use]
pub fn usage(program: &str) -> String {
    let placeholders: Vec<String> = ARGUMENT_NAMES
        .iter()
        .map(|name| format!("<{}>", name))
        .collect();

    format!("Usage: {} {}", program, placeholders.join(" "))
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

impl CliArgs {
    /// Parses the arguments after the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let [workers, resolution, min_real, max_real, min_imag, max_imag] = args else {
            return Err(CliError::WrongArgumentCount { found: args.len() });
        };

        Ok(Self {
            worker_count: parse_value(ARGUMENT_NAMES[0], workers.as_ref())?,
            resolution: parse_value(ARGUMENT_NAMES[1], resolution.as_ref())?,
            min_real: parse_value(ARGUMENT_NAMES[2], min_real.as_ref())?,
            max_real: parse_value(ARGUMENT_NAMES[3], max_real.as_ref())?,
            min_imag: parse_value(ARGUMENT_NAMES[4], min_imag.as_ref())?,
            max_imag: parse_value(ARGUMENT_NAMES[5], max_imag.as_ref())?,
        })
    }
}
