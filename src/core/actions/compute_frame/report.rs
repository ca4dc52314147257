use std::time::Duration;

/// What one worker did during a compute cycle. Each worker fills in its own
/// report; they are gathered only after every worker has finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkerReport {
    pub worker_index: u32,
    pub rows: u32,
    /// Calls into the escape-time kernel, one per pixel.
    pub invocations: u64,
    /// Sum of the escape counts returned by those calls.
    pub iterations: u64,
    pub busy: Duration,
}

impl WorkerReport {
    #[must_use]
    pub fn new(worker_index: u32) -> Self {
        Self {
            worker_index,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub duration: Duration,
    pub workers: Vec<WorkerReport>,
}

impl FrameReport {
    #[must_use]
    pub fn total_invocations(&self) -> u64 {
        self.workers.iter().map(|w| w.invocations).sum()
    }

    #[must_use]
    pub fn total_rows(&self) -> u32 {
        self.workers.iter().map(|w| w.rows).sum()
    }

    /// Summed time the workers spent computing; roughly the CPU time of the cycle.
    #[must_use]
    pub fn total_busy(&self) -> Duration {
        self.workers.iter().map(|w| w.busy).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_sum_over_workers() {
        let report = FrameReport {
            duration: Duration::from_millis(12),
            workers: vec![
                WorkerReport {
                    worker_index: 0,
                    rows: 3,
                    invocations: 30,
                    iterations: 700,
                    busy: Duration::from_millis(10),
                },
                WorkerReport {
                    worker_index: 1,
                    rows: 2,
                    invocations: 20,
                    iterations: 80,
                    busy: Duration::from_millis(4),
                },
            ],
        };

        assert_eq!(report.total_rows(), 5);
        assert_eq!(report.total_invocations(), 50);
        assert_eq!(report.total_busy(), Duration::from_millis(14));
    }

    #[test]
    fn test_new_worker_report_is_empty() {
        let report = WorkerReport::new(7);

        assert_eq!(report.worker_index, 7);
        assert_eq!(report.invocations, 0);
        assert_eq!(report.busy, Duration::ZERO);
    }
}
