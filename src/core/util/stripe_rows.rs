use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkerCountError {
    Zero,
}

impl fmt::Display for WorkerCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "worker count must be at least 1"),
        }
    }
}

impl Error for WorkerCountError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkerCount(NonZeroU32);

impl WorkerCount {
    pub fn new(count: u32) -> Result<Self, WorkerCountError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(WorkerCountError::Zero)
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn assignments(&self) -> impl Iterator<Item = WorkerAssignment> + use<> {
        let total_workers = self.get();

        (0..total_workers).map(move |worker_index| WorkerAssignment {
            worker_index,
            total_workers,
        })
    }
}

/// Worker `worker_index` of `total_workers` owns every row `y` with
/// `y % total_workers == worker_index`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkerAssignment {
    pub worker_index: u32,
    pub total_workers: u32,
}

impl WorkerAssignment {
    #[must_use]
    pub fn owns_row(&self, row: u32) -> bool {
        row % self.total_workers == self.worker_index
    }

    pub fn rows(&self, size: u32) -> impl Iterator<Item = u32> {
        (self.worker_index..size).step_by(self.total_workers as usize)
    }
}

/// A row of the frame handed to exactly one worker.
pub type StripedRow<'a, T> = (u32, &'a mut [T]);

/// Deals rows out round-robin: row `y` goes to worker `y % workers`.
///
/// Each worker gets mutable borrows of only its own rows, so workers can write
/// into one shared frame without locking.
pub fn stripe_rows<'a, T, I>(rows: I, workers: WorkerCount) -> Vec<Vec<StripedRow<'a, T>>>
where
    I: IntoIterator<Item = &'a mut [T]>,
{
    let total = workers.get() as usize;
    let mut stripes: Vec<Vec<StripedRow<'a, T>>> = (0..total).map(|_| Vec::new()).collect();

    for (y, row) in rows.into_iter().enumerate() {
        stripes[y % total].push((y as u32, row));
    }

    stripes
}
