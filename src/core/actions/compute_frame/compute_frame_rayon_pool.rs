use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::compute_frame::ports::frame_compute::FrameCompute;
use crate::core::actions::compute_frame::render_stripe::render_stripe;
use crate::core::actions::compute_frame::report::{FrameReport, WorkerReport};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::PixelMapping;
use crate::core::util::stripe_rows::{WorkerCount, stripe_rows};

/// [`FrameCompute`] backed by a rayon pool that lives as long as the session.
///
/// Each cycle spawns one task per stripe into the pool and blocks in
/// `ThreadPool::scope` until all of them are done, so a new cycle never
/// overlaps the previous one.
pub struct RayonPoolFrameCompute<Alg, CMap> {
    pool: ThreadPool,
    workers: WorkerCount,
    algorithm: Alg,
    colour_map: CMap,
}

impl<Alg, CMap> RayonPoolFrameCompute<Alg, CMap> {
    pub fn new(
        workers: WorkerCount,
        algorithm: Alg,
        colour_map: CMap,
    ) -> Result<Self, ComputeFrameError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get() as usize)
            .thread_name(|index| format!("mandelbrot-worker-{index}"))
            .build()?;

        Ok(Self {
            pool,
            workers,
            algorithm,
            colour_map,
        })
    }
}

impl<Alg, CMap> FrameCompute for RayonPoolFrameCompute<Alg, CMap>
where
    Alg: FractalAlgorithm + Send + Sync,
    CMap: ColourMap<u32> + Send + Sync,
{
    fn workers(&self) -> WorkerCount {
        self.workers
    }

    fn display_name(&self) -> &str {
        "rayon pool"
    }

    fn compute(
        &self,
        viewport: Viewport,
        frame: &mut FrameBuffer,
    ) -> Result<FrameReport, ComputeFrameError> {
        let start = Instant::now();
        let mapping = PixelMapping::new(viewport, frame.resolution());
        let algorithm = &self.algorithm;
        let colour_map = &self.colour_map;
        let mut slots: Vec<Option<WorkerReport>> =
            (0..self.workers.get()).map(|_| None).collect();

        frame.clear();
        let stripes = stripe_rows(frame.rows_mut(), self.workers);

        self.pool.scope(|scope| {
            for ((assignment, stripe), slot) in self
                .workers
                .assignments()
                .zip(stripes)
                .zip(slots.iter_mut())
            {
                scope.spawn(move |_| {
                    *slot = panic::catch_unwind(AssertUnwindSafe(|| {
                        render_stripe(assignment, stripe, &mapping, algorithm, colour_map)
                    }))
                    .ok();
                });
            }
        });

        let workers = slots
            .into_iter()
            .zip(self.workers.assignments())
            .map(|(slot, assignment)| {
                slot.ok_or(ComputeFrameError::WorkerPanicked {
                    worker_index: assignment.worker_index,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FrameReport {
            duration: start.elapsed(),
            workers,
        })
    }
}
