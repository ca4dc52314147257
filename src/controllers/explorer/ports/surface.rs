use std::error::Error;

use crate::controllers::explorer::events::ViewerEvent;
use crate::core::data::frame_buffer::FrameBuffer;

/// Where finished frames are shown and where user input comes from.
pub trait PresentationSurface {
    type Error: Error + 'static;

    /// Shows a fully computed frame. Called once per compute cycle.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;

    /// Events received since the last poll, oldest first. Only called
    /// between compute cycles.
    fn poll_events(&mut self) -> Vec<ViewerEvent>;
}
