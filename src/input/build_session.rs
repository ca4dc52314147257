use std::error::Error;
use std::fmt;

use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::explorer::{ExplorerSession, RunViewerError};
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::factory::frame_compute_factory;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;

#[derive(Debug)]
pub enum BuildSessionError {
    FrameBuffer(FrameBufferError),
    Compute(ComputeFrameError),
}

impl fmt::Display for BuildSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
            Self::Compute(err) => write!(f, "compute error: {}", err),
        }
    }
}

impl Error for BuildSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameBuffer(err) => Some(err),
            Self::Compute(err) => Some(err),
        }
    }
}

impl From<FrameBufferError> for BuildSessionError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

impl From<ComputeFrameError> for BuildSessionError {
    fn from(err: ComputeFrameError) -> Self {
        Self::Compute(err)
    }
}

/// Failure of a whole command, generic over the surface's error type.
#[derive(Debug)]
pub enum CommandError<E: Error> {
    Build(BuildSessionError),
    Surface(E),
    Viewer(RunViewerError<E>),
}

impl<E: Error> fmt::Display for CommandError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "{}", err),
            Self::Surface(err) => write!(f, "presentation error: {}", err),
            Self::Viewer(err) => write!(f, "{}", err),
        }
    }
}

impl<E: Error + 'static> Error for CommandError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Viewer(err) => Some(err),
        }
    }
}

impl<E: Error> From<BuildSessionError> for CommandError<E> {
    fn from(err: BuildSessionError) -> Self {
        Self::Build(err)
    }
}

impl<E: Error> From<RunViewerError<E>> for CommandError<E> {
    fn from(err: RunViewerError<E>) -> Self {
        Self::Viewer(err)
    }
}

/// Allocates the frame buffer and compute strategy for a validated config.
/// Nothing is spawned until the session's first cycle.
pub fn build_session(config: &ExplorerConfig) -> Result<ExplorerSession, BuildSessionError> {
    let frame = FrameBuffer::try_new(config.resolution)?;
    let colour_map =
        mandelbrot_colour_map_factory(config.palette, config.algorithm.max_iterations());
    let compute =
        frame_compute_factory(config.scheduler, config.workers, config.algorithm, colour_map)?;

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}", config.resolution);
    println!("Viewport:   {}", config.viewport);
    println!("Workers:    {} ({})", config.workers.get(), compute.display_name());
    println!("Palette:    {}", config.palette);
    println!("Iterations: {}", config.algorithm.max_iterations());

    Ok(ExplorerSession::new(config.viewport, frame, compute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_frame::factory::Scheduler;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
    use crate::core::util::stripe_rows::WorkerCount;
    use std::path::PathBuf;

    fn config(scheduler: Scheduler) -> ExplorerConfig {
        ExplorerConfig {
            workers: WorkerCount::new(3).unwrap(),
            resolution: Resolution::new(16).unwrap(),
            viewport: Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap(),
            algorithm: MandelbrotAlgorithm::new(64).unwrap(),
            scheduler,
            palette: MandelbrotColourMapKind::FireGradient,
            output: PathBuf::from("unused.ppm"),
        }
    }

    #[test]
    fn test_session_matches_config() {
        for scheduler in [Scheduler::ScopedThreads, Scheduler::RayonPool] {
            let session = build_session(&config(scheduler)).unwrap();

            assert_eq!(session.cycles(), 0);
            assert_eq!(session.viewport(), config(scheduler).viewport);
            assert_eq!(session.frame().resolution().size(), 16);
            assert_eq!(session.compute().workers().get(), 3);
        }
    }
}
