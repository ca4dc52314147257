use std::thread;
use std::time::Instant;

use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::compute_frame::ports::frame_compute::FrameCompute;
use crate::core::actions::compute_frame::render_stripe::render_stripe;
use crate::core::actions::compute_frame::report::FrameReport;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::PixelMapping;
use crate::core::util::stripe_rows::{WorkerCount, stripe_rows};

/// Recomputes `frame` for `viewport` on `workers` freshly spawned OS threads.
///
/// Rows are striped round-robin across the threads, each thread writes only
/// its own rows, and the call returns once every thread has been joined.
pub fn compute_frame_scoped_threads<Alg, CMap>(
    frame: &mut FrameBuffer,
    viewport: Viewport,
    workers: WorkerCount,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameReport, ComputeFrameError>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<u32> + Sync + ?Sized,
{
    compute_frame_on_threads(frame, viewport, workers, algorithm, colour_map, None)
}

fn worker_builder(worker_index: u32, stack_size: Option<usize>) -> thread::Builder {
    let builder = thread::Builder::new().name(format!("mandelbrot-worker-{worker_index}"));

    match stack_size {
        Some(bytes) => builder.stack_size(bytes),
        None => builder,
    }
}

fn compute_frame_on_threads<Alg, CMap>(
    frame: &mut FrameBuffer,
    viewport: Viewport,
    workers: WorkerCount,
    algorithm: &Alg,
    colour_map: &CMap,
    stack_size: Option<usize>,
) -> Result<FrameReport, ComputeFrameError>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<u32> + Sync + ?Sized,
{
    let start = Instant::now();
    let mapping = PixelMapping::new(viewport, frame.resolution());

    frame.clear();
    let stripes = stripe_rows(frame.rows_mut(), workers);

    let reports = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers.get() as usize);
        let mut spawn_error = None;

        for (assignment, stripe) in workers.assignments().zip(stripes) {
            let spawned = worker_builder(assignment.worker_index, stack_size).spawn_scoped(
                scope,
                move || render_stripe(assignment, stripe, &mapping, algorithm, colour_map),
            );

            match spawned {
                Ok(handle) => handles.push((assignment, handle)),
                Err(source) => {
                    spawn_error = Some(ComputeFrameError::Spawn {
                        worker_index: assignment.worker_index,
                        source,
                    });
                    break;
                }
            }
        }

        // join every started thread before looking at the results so no
        // panicked thread is left for the scope to re-raise
        let joined = handles
            .into_iter()
            .map(|(assignment, handle)| {
                handle.join().map_err(|_| ComputeFrameError::WorkerPanicked {
                    worker_index: assignment.worker_index,
                })
            })
            .collect::<Vec<_>>();

        match spawn_error {
            Some(err) => Err(err),
            None => joined.into_iter().collect::<Result<Vec<_>, _>>(),
        }
    })?;

    Ok(FrameReport {
        duration: start.elapsed(),
        workers: reports,
    })
}

#[derive(Debug)]
pub enum ComputeNewFrameError {
    FrameBuffer(FrameBufferError),
    Compute(ComputeFrameError),
}

impl std::fmt::Display for ComputeNewFrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
            Self::Compute(err) => write!(f, "compute error: {}", err),
        }
    }
}

impl std::error::Error for ComputeNewFrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FrameBuffer(err) => Some(err),
            Self::Compute(err) => Some(err),
        }
    }
}

/// Allocates a buffer for `resolution` and fills it in one cycle.
pub fn compute_frame<Alg, CMap>(
    viewport: Viewport,
    resolution: Resolution,
    workers: WorkerCount,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<(FrameBuffer, FrameReport), ComputeNewFrameError>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<u32> + Sync + ?Sized,
{
    let mut frame = FrameBuffer::try_new(resolution).map_err(ComputeNewFrameError::FrameBuffer)?;
    let report =
        compute_frame_scoped_threads(&mut frame, viewport, workers, algorithm, colour_map)
            .map_err(ComputeNewFrameError::Compute)?;

    Ok((frame, report))
}

/// [`FrameCompute`] that spawns a fresh set of threads every cycle.
pub struct ScopedThreadsFrameCompute<Alg, CMap> {
    workers: WorkerCount,
    algorithm: Alg,
    colour_map: CMap,
}

impl<Alg, CMap> ScopedThreadsFrameCompute<Alg, CMap> {
    pub fn new(workers: WorkerCount, algorithm: Alg, colour_map: CMap) -> Self {
        Self {
            workers,
            algorithm,
            colour_map,
        }
    }
}

impl<Alg, CMap> FrameCompute for ScopedThreadsFrameCompute<Alg, CMap>
where
    Alg: FractalAlgorithm + Send + Sync,
    CMap: ColourMap<u32> + Send + Sync,
{
    fn workers(&self) -> WorkerCount {
        self.workers
    }

    fn display_name(&self) -> &str {
        "scoped threads"
    }

    fn compute(
        &self,
        viewport: Viewport,
        frame: &mut FrameBuffer,
    ) -> Result<FrameReport, ComputeFrameError> {
        compute_frame_scoped_threads(frame, viewport, self.workers, &self.algorithm, &self.colour_map)
    }
}
