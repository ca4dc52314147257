use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::actions::compute_frame::compute_frame_rayon_pool::RayonPoolFrameCompute;
use crate::core::actions::compute_frame::compute_frame_scoped_threads::ScopedThreadsFrameCompute;
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::ports::frame_compute::FrameCompute;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::util::stripe_rows::WorkerCount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScheduler(pub String);

impl fmt::Display for UnknownScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduler '{}', expected one of: scoped, pool", self.0)
    }
}

impl Error for UnknownScheduler {}

/// How the workers of a compute cycle are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheduler {
    /// OS threads spawned at the start of every cycle and joined at its end.
    #[default]
    ScopedThreads,
    /// A rayon pool built once and reused by every cycle.
    RayonPool,
}

impl FromStr for Scheduler {
    type Err = UnknownScheduler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scoped" => Ok(Self::ScopedThreads),
            "pool" => Ok(Self::RayonPool),
            _ => Err(UnknownScheduler(s.to_string())),
        }
    }
}

pub fn frame_compute_factory(
    scheduler: Scheduler,
    workers: WorkerCount,
    algorithm: MandelbrotAlgorithm,
    colour_map: Box<dyn MandelbrotColourMap>,
) -> Result<Box<dyn FrameCompute>, ComputeFrameError> {
    Ok(match scheduler {
        Scheduler::ScopedThreads => Box::new(ScopedThreadsFrameCompute::new(
            workers, algorithm, colour_map,
        )),
        Scheduler::RayonPool => Box::new(RayonPoolFrameCompute::new(
            workers, algorithm, colour_map,
        )?),
    })
}
