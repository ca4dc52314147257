use crate::core::actions::compute_frame::report::FrameReport;
use crate::core::data::viewport::Viewport;

/// Formats the per-cycle diagnostic lines printed after every compute cycle.
#[must_use]
pub fn frame_report_lines(cycle: u64, viewport: Viewport, report: &FrameReport) -> Vec<String> {
    let mut lines = vec![
        format!("Cycle {}: {}", cycle, viewport),
        format!("Duration:   {:?}", report.duration),
        format!("Busy total: {:?}", report.total_busy()),
    ];

    lines.extend(report.workers.iter().map(|worker| {
        format!(
            "  worker {:>2}: {} rows, {} invocations, {} iterations, busy {:?}",
            worker.worker_index, worker.rows, worker.invocations, worker.iterations, worker.busy
        )
    }));

    lines
}

pub fn print_frame_report(cycle: u64, viewport: Viewport, report: &FrameReport) {
    for line in frame_report_lines(cycle, viewport, report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_frame::report::WorkerReport;
    use std::time::Duration;

    #[test]
    fn test_one_line_per_worker_after_summary() {
        let report = FrameReport {
            duration: Duration::from_millis(5),
            workers: vec![
                WorkerReport {
                    worker_index: 0,
                    rows: 2,
                    invocations: 8,
                    iterations: 40,
                    busy: Duration::from_millis(3),
                },
                WorkerReport::new(1),
            ],
        };
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        let lines = frame_report_lines(3, viewport, &report);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Cycle 3: re [-2, 1] im [-1.5, 1.5]");
        assert_eq!(lines[1], "Duration:   5ms");
        assert_eq!(lines[2], "Busy total: 3ms");
        assert_eq!(
            lines[3],
            "  worker  0: 2 rows, 8 invocations, 40 iterations, busy 3ms"
        );
    }
}
