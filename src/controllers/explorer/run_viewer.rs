use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use crate::controllers::explorer::diagnostics::print_frame_report;
use crate::controllers::explorer::ports::surface::PresentationSurface;
use crate::controllers::explorer::session::{ExplorerSession, SessionError, SessionOutcome};

/// Pause between polls when the surface has nothing to report.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum RunViewerError<E: Error> {
    Session(SessionError),
    Surface(E),
}

impl<E: Error> fmt::Display for RunViewerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(err) => write!(f, "session error: {}", err),
            Self::Surface(err) => write!(f, "presentation error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for RunViewerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl<E: Error> From<SessionError> for RunViewerError<E> {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

/// Computes the first frame, then presents and dispatches events until the
/// surface reports `Quit`.
///
/// Events are only polled between cycles, so clicks made while a frame is
/// being computed are handled after it has been presented. A click that
/// cannot be zoomed into is reported and skipped.
pub fn run_viewer<S: PresentationSurface>(
    session: &mut ExplorerSession,
    surface: &mut S,
) -> Result<(), RunViewerError<S::Error>> {
    let report = session.recompute()?;
    print_frame_report(session.cycles(), session.viewport(), &report);
    surface.present(session.frame()).map_err(RunViewerError::Surface)?;

    loop {
        let events = surface.poll_events();

        if events.is_empty() {
            thread::sleep(IDLE_POLL_INTERVAL);
            continue;
        }

        for event in events {
            match session.handle_event(event) {
                Ok(SessionOutcome::Quit) => return Ok(()),
                Ok(SessionOutcome::Ignored) => {}
                Ok(SessionOutcome::Recomputed(report)) => {
                    print_frame_report(session.cycles(), session.viewport(), &report);
                    surface.present(session.frame()).map_err(RunViewerError::Surface)?;
                }
                Err(SessionError::Zoom(err)) => eprintln!("Ignoring click: {}", err),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::explorer::events::{PointerButton, ViewerEvent};
    use crate::core::actions::compute_frame::compute_frame_scoped_threads::ScopedThreadsFrameCompute;
    use crate::core::data::frame_buffer::FrameBuffer;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_maps::channel_cycle::MandelbrotChannelCycle;
    use crate::core::util::stripe_rows::WorkerCount;
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct StubSurfaceError {}

    impl fmt::Display for StubSurfaceError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubSurfaceError")
        }
    }

    impl Error for StubSurfaceError {}

    /// Replays scripted batches of events and records every presented frame.
    struct ScriptedSurface {
        batches: VecDeque<Vec<ViewerEvent>>,
        presented: Vec<Vec<u32>>,
        fail_on_present: bool,
    }

    impl ScriptedSurface {
        fn new(batches: Vec<Vec<ViewerEvent>>) -> Self {
            Self {
                batches: batches.into(),
                presented: Vec::new(),
                fail_on_present: false,
            }
        }
    }

    impl PresentationSurface for ScriptedSurface {
        type Error = StubSurfaceError;

        fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
            if self.fail_on_present {
                return Err(StubSurfaceError {});
            }
            self.presented.push(frame.as_slice().to_vec());
            Ok(())
        }

        fn poll_events(&mut self) -> Vec<ViewerEvent> {
            self.batches.pop_front().unwrap_or_else(|| vec![ViewerEvent::Quit])
        }
    }

    fn session() -> ExplorerSession {
        let compute = ScopedThreadsFrameCompute::new(
            WorkerCount::new(2).unwrap(),
            MandelbrotAlgorithm::new(64).unwrap(),
            MandelbrotChannelCycle::new(64),
        );

        ExplorerSession::new(
            Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap(),
            FrameBuffer::try_new(Resolution::new(24).unwrap()).unwrap(),
            Box::new(compute),
        )
    }

    fn click(x: i32, y: i32, button: PointerButton) -> ViewerEvent {
        ViewerEvent::PointerClick { x, y, button }
    }

    #[test]
    fn test_presents_initial_frame_then_quits() {
        let mut session = session();
        let mut surface = ScriptedSurface::new(vec![vec![ViewerEvent::Quit]]);

        run_viewer(&mut session, &mut surface).unwrap();

        assert_eq!(surface.presented.len(), 1);
        assert_eq!(session.cycles(), 1);
    }

    #[test]
    fn test_presents_once_per_zoom_cycle() {
        let mut session = session();
        let mut surface = ScriptedSurface::new(vec![
            vec![click(12, 12, PointerButton::Primary)],
            vec![],
            vec![
                click(3, 4, PointerButton::Other),
                click(5, 5, PointerButton::Secondary),
            ],
        ]);

        run_viewer(&mut session, &mut surface).unwrap();

        assert_eq!(surface.presented.len(), 3);
        assert_eq!(session.cycles(), 3);
        assert_eq!(surface.presented[2], session.frame().as_slice());
    }

    #[test]
    fn test_events_after_quit_are_dropped() {
        let mut session = session();
        let mut surface = ScriptedSurface::new(vec![vec![
            ViewerEvent::Quit,
            click(1, 1, PointerButton::Primary),
        ]]);

        run_viewer(&mut session, &mut surface).unwrap();

        assert_eq!(session.cycles(), 1);
    }

    #[test]
    fn test_out_of_frame_click_is_skipped() {
        let mut session = session();
        let viewport = session.viewport();
        let mut surface =
            ScriptedSurface::new(vec![vec![click(-5, 2, PointerButton::Primary)]]);

        run_viewer(&mut session, &mut surface).unwrap();

        assert_eq!(session.viewport(), viewport);
        assert_eq!(surface.presented.len(), 1);
    }

    #[test]
    fn test_surface_error_stops_the_viewer() {
        let mut session = session();
        let mut surface = ScriptedSurface::new(vec![]);
        surface.fail_on_present = true;

        let result = run_viewer(&mut session, &mut surface);

        assert!(matches!(result, Err(RunViewerError::Surface(_))));
    }
}
