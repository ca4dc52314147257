use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::report::FrameReport;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::stripe_rows::WorkerCount;

/// One synchronous compute cycle: on return every cell of `frame` holds the
/// colour of `viewport` at that pixel and all workers have finished.
pub trait FrameCompute: Send {
    fn workers(&self) -> WorkerCount;

    fn display_name(&self) -> &str;

    fn compute(
        &self,
        viewport: Viewport,
        frame: &mut FrameBuffer,
    ) -> Result<FrameReport, ComputeFrameError>;
}
