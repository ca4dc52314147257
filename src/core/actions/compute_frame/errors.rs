use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ComputeFrameError {
    WorkerPanicked { worker_index: u32 },
    Spawn {
        worker_index: u32,
        source: std::io::Error,
    },
    PoolBuild(rayon::ThreadPoolBuildError),
}

impl fmt::Display for ComputeFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerPanicked { worker_index } => {
                write!(f, "worker {} panicked during frame computation", worker_index)
            }
            Self::Spawn {
                worker_index,
                source,
            } => write!(f, "could not start worker {}: {}", worker_index, source),
            Self::PoolBuild(err) => write!(f, "could not build worker pool: {}", err),
        }
    }
}

impl Error for ComputeFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WorkerPanicked { .. } => None,
            Self::Spawn { source, .. } => Some(source),
            Self::PoolBuild(err) => Some(err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for ComputeFrameError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::PoolBuild(err)
    }
}
