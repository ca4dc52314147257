use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::core::actions::compute_frame::factory::{
    Scheduler, frame_compute_factory,
};
use mandelbrot_explorer::core::data::frame_buffer::FrameBuffer;
use mandelbrot_explorer::core::data::resolution::Resolution;
use mandelbrot_explorer::core::data::viewport::Viewport;
use mandelbrot_explorer::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use mandelbrot_explorer::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;
use mandelbrot_explorer::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use mandelbrot_explorer::core::util::stripe_rows::WorkerCount;

const SIZE: u32 = 256;
const MAX_ITERATIONS: u32 = 256;
const WORKER_COUNTS: [u32; 4] = [1, 2, 4, 8];

fn bench_compute_frame(c: &mut Criterion) {
    let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    let algorithm = MandelbrotAlgorithm::new(MAX_ITERATIONS).unwrap();
    let mut group = c.benchmark_group("compute_frame");

    for (scheduler, label) in [
        (Scheduler::ScopedThreads, "scoped"),
        (Scheduler::RayonPool, "pool"),
    ] {
        for workers in WORKER_COUNTS {
            let compute = frame_compute_factory(
                scheduler,
                WorkerCount::new(workers).unwrap(),
                algorithm,
                mandelbrot_colour_map_factory(MandelbrotColourMapKind::default(), MAX_ITERATIONS),
            )
            .unwrap();
            let mut frame = FrameBuffer::try_new(Resolution::new(SIZE).unwrap()).unwrap();

            group.bench_with_input(BenchmarkId::new(label, workers), &workers, |b, _| {
                b.iter(|| {
                    let report = compute.compute(black_box(viewport), &mut frame).unwrap();
                    black_box(report);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compute_frame);
criterion_main!(benches);
