use std::error::Error;
use std::fmt;

use crate::controllers::explorer::events::ViewerEvent;
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::ports::frame_compute::FrameCompute;
use crate::core::actions::compute_frame::report::FrameReport;
use crate::core::actions::zoom_viewport::zoom_viewport::{
    ZoomDirection, ZoomViewportError, zoom_viewport,
};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Frame on display, waiting for input.
    Idle,
    /// A compute cycle is running; no input is dispatched.
    Computing,
}

#[derive(Debug)]
pub enum SessionError {
    Compute(ComputeFrameError),
    Zoom(ZoomViewportError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute(err) => write!(f, "compute error: {}", err),
            Self::Zoom(err) => write!(f, "zoom error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(err) => Some(err),
            Self::Zoom(err) => Some(err),
        }
    }
}

impl From<ComputeFrameError> for SessionError {
    fn from(err: ComputeFrameError) -> Self {
        Self::Compute(err)
    }
}

impl From<ZoomViewportError> for SessionError {
    fn from(err: ZoomViewportError) -> Self {
        Self::Zoom(err)
    }
}

#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    /// A new frame was computed and should be presented.
    Recomputed(FrameReport),
    Ignored,
    Quit,
}

/// One viewing session: the current viewport, the frame buffer reused by
/// every cycle and the strategy that fills it.
///
/// Every cycle runs under `&mut self`, so a second cycle can never start
/// before the first has returned.
pub struct ExplorerSession {
    viewport: Viewport,
    frame: FrameBuffer,
    compute: Box<dyn FrameCompute>,
    state: SessionState,
    cycles: u64,
}

impl ExplorerSession {
    pub fn new(viewport: Viewport, frame: FrameBuffer, compute: Box<dyn FrameCompute>) -> Self {
        Self {
            viewport,
            frame,
            compute,
            state: SessionState::Idle,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[must_use]
    pub fn compute(&self) -> &dyn FrameCompute {
        self.compute.as_ref()
    }

    /// Recomputes the whole frame for the current viewport.
    pub fn recompute(&mut self) -> Result<FrameReport, SessionError> {
        self.state = SessionState::Computing;
        let result = self.compute.compute(self.viewport, &mut self.frame);
        self.state = SessionState::Idle;

        let report = result?;
        self.cycles += 1;
        Ok(report)
    }

    /// Zooms about the clicked pixel and recomputes. The viewport is only
    /// replaced when both the zoom and the recompute succeed.
    pub fn on_click(
        &mut self,
        click: Point,
        direction: ZoomDirection,
    ) -> Result<FrameReport, SessionError> {
        let zoomed = zoom_viewport(self.viewport, self.frame.resolution(), click, direction)?;
        let previous = std::mem::replace(&mut self.viewport, zoomed);

        self.recompute().inspect_err(|_| self.viewport = previous)
    }

    pub fn handle_event(&mut self, event: ViewerEvent) -> Result<SessionOutcome, SessionError> {
        match event {
            ViewerEvent::Quit => Ok(SessionOutcome::Quit),
            ViewerEvent::PointerClick { x, y, button } => match button.zoom_direction() {
                Some(direction) => self
                    .on_click(Point { x, y }, direction)
                    .map(SessionOutcome::Recomputed),
                None => Ok(SessionOutcome::Ignored),
            },
        }
    }
}
