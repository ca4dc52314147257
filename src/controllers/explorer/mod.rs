//! Explorer controller: owns the viewport and frame of one viewing session
//! and turns pointer clicks into zoomed recomputations.
//!
//! Follows the ports & adapters split used across the crate:
//! - **Input**: [`ViewerEvent`]s polled from a [`PresentationSurface`]
//! - **Output**: the finished [`FrameBuffer`](crate::core::data::frame_buffer::FrameBuffer),
//!   handed to the same surface once per compute cycle
//! - **Core**: `compute_frame` and `zoom_viewport` actions from `core/`

pub mod diagnostics;
pub mod events;
pub mod ports;
mod run_viewer;
mod session;

pub use events::{PointerButton, ViewerEvent};
pub use ports::surface::PresentationSurface;
pub use run_viewer::{RunViewerError, run_viewer};
pub use session::{ExplorerSession, SessionError, SessionOutcome, SessionState};
