use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::actions::compute_frame::factory::{Scheduler, UnknownScheduler};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::colour_maps::kinds::{
    MandelbrotColourMapKind, UnknownColourMapKind,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::stripe_rows::{WorkerCount, WorkerCountError};
use crate::input::cli::args::CliArgs;

pub const MAX_ITERATIONS_VAR: &str = "MANDELBROT_MAX_ITERATIONS";
pub const SCHEDULER_VAR: &str = "MANDELBROT_SCHEDULER";
pub const PALETTE_VAR: &str = "MANDELBROT_PALETTE";
pub const OUTPUT_VAR: &str = "MANDELBROT_OUTPUT";

pub const DEFAULT_OUTPUT: &str = "mandelbrot.ppm";

#[derive(Debug)]
pub enum ConfigError {
    Workers(WorkerCountError),
    Resolution(ResolutionError),
    Viewport(ViewportError),
    MaxIterations(MandelbrotError),
    InvalidMaxIterations(String),
    Scheduler(UnknownScheduler),
    Palette(UnknownColourMapKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workers(err) => write!(f, "invalid worker count: {}", err),
            Self::Resolution(err) => write!(f, "invalid resolution: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::MaxIterations(err) => write!(f, "{}: {}", MAX_ITERATIONS_VAR, err),
            Self::InvalidMaxIterations(value) => {
                write!(f, "{} must be a whole number, got '{}'", MAX_ITERATIONS_VAR, value)
            }
            Self::Scheduler(err) => write!(f, "{}: {}", SCHEDULER_VAR, err),
            Self::Palette(err) => write!(f, "{}: {}", PALETTE_VAR, err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Workers(err) => Some(err),
            Self::Resolution(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::MaxIterations(err) => Some(err),
            Self::InvalidMaxIterations(_) => None,
            Self::Scheduler(err) => Some(err),
            Self::Palette(err) => Some(err),
        }
    }
}

impl From<WorkerCountError> for ConfigError {
    fn from(err: WorkerCountError) -> Self {
        Self::Workers(err)
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::MaxIterations(err)
    }
}

impl From<UnknownScheduler> for ConfigError {
    fn from(err: UnknownScheduler) -> Self {
        Self::Scheduler(err)
    }
}

impl From<UnknownColourMapKind> for ConfigError {
    fn from(err: UnknownColourMapKind) -> Self {
        Self::Palette(err)
    }
}

/// Fully validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub workers: WorkerCount,
    pub resolution: Resolution,
    pub viewport: Viewport,
    pub algorithm: MandelbrotAlgorithm,
    pub scheduler: Scheduler,
    pub palette: MandelbrotColourMapKind,
    pub output: PathBuf,
}

impl ExplorerConfig {
    /// Validates the positional arguments and reads the optional settings
    /// through `lookup`, usually [`ExplorerConfig::from_process_env`].
    pub fn from_args<F>(args: CliArgs, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let workers = WorkerCount::new(args.worker_count)?;
        let resolution = Resolution::new(args.resolution)?;
        let viewport = Viewport::new(args.min_real, args.max_real, args.min_imag, args.max_imag)?;

        let max_iterations = match lookup(MAX_ITERATIONS_VAR) {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidMaxIterations(value))?,
            None => DEFAULT_MAX_ITERATIONS,
        };
        let algorithm = MandelbrotAlgorithm::new(max_iterations)?;

        let scheduler = match lookup(SCHEDULER_VAR) {
            Some(value) => value.parse::<Scheduler>()?,
            None => Scheduler::default(),
        };

        let palette = match lookup(PALETTE_VAR) {
            Some(value) => value.parse::<MandelbrotColourMapKind>()?,
            None => MandelbrotColourMapKind::default(),
        };

        let output = lookup(OUTPUT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            workers,
            resolution,
            viewport,
            algorithm,
            scheduler,
            palette,
            output,
        })
    }

    pub fn from_process_env(args: CliArgs) -> Result<Self, ConfigError> {
        Self::from_args(args, |name| std::env::var(name).ok())
    }
}
