use std::time::Instant;

use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::compute_frame::report::WorkerReport;
use crate::core::util::pixel_to_complex_coords::PixelMapping;
use crate::core::util::stripe_rows::{StripedRow, WorkerAssignment};

/// Body of one worker: evaluates and colours every pixel of the rows it owns.
pub fn render_stripe<Alg, CMap>(
    assignment: WorkerAssignment,
    stripe: Vec<StripedRow<'_, u32>>,
    mapping: &PixelMapping,
    algorithm: &Alg,
    colour_map: &CMap,
) -> WorkerReport
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap<u32> + ?Sized,
{
    let start = Instant::now();
    let mut report = WorkerReport::new(assignment.worker_index);

    for (y, row) in stripe {
        debug_assert!(assignment.owns_row(y), "row {y} handed to {assignment:?}");

        for (x, pixel) in row.iter_mut().enumerate() {
            let iterations = algorithm.evaluate(mapping.map(y, x as u32));
            *pixel = colour_map.map(iterations).to_argb();

            report.invocations += 1;
            report.iterations += u64::from(iterations);
        }

        report.rows += 1;
    }

    report.busy = start.elapsed();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;
    use crate::core::util::stripe_rows::{WorkerCount, stripe_rows};

    struct RowAlgorithm {}

    impl FractalAlgorithm for RowAlgorithm {
        fn max_iterations(&self) -> u32 {
            100
        }

        // rows map to imag 3, 2, 1, 0 on the test viewport
        fn evaluate(&self, c: Complex) -> u32 {
            c.imag as u32
        }
    }

    struct GreyColourMap {}

    impl ColourMap<u32> for GreyColourMap {
        fn map(&self, value: u32) -> Colour {
            Colour {
                r: value as u8,
                g: value as u8,
                b: value as u8,
            }
        }

        fn display_name(&self) -> &str {
            "Grey"
        }
    }

    #[test]
    fn test_render_stripe_only_touches_owned_rows() {
        let resolution = Resolution::new(4).unwrap();
        let viewport = Viewport::new(0.0, 3.0, 0.0, 3.0).unwrap();
        let mapping = PixelMapping::new(viewport, resolution);
        let mut data = vec![0_u32; 16];
        let workers = WorkerCount::new(2).unwrap();
        let mut stripes = stripe_rows(data.chunks_exact_mut(4), workers);
        let second = stripes.pop().unwrap();
        let assignment = workers.assignments().nth(1).unwrap();

        let report = render_stripe(assignment, second, &mapping, &RowAlgorithm {}, &GreyColourMap {});
        drop(stripes);

        let grey = |v: u8| Colour { r: v, g: v, b: v }.to_argb();
        assert_eq!(&data[0..4], &[0; 4]);
        assert_eq!(&data[4..8], &[grey(2); 4]);
        assert_eq!(&data[8..12], &[0; 4]);
        assert_eq!(&data[12..16], &[grey(0); 4]);
        assert_eq!(report.worker_index, 1);
        assert_eq!(report.rows, 2);
        assert_eq!(report.invocations, 8);
        assert_eq!(report.iterations, 8);
    }
}
