use std::error::Error;
use std::fmt;
use std::time::Duration;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use crate::adapters::pixel_format::copy_argb_to_rgba;
use crate::controllers::explorer::events::{PointerButton, ViewerEvent};
use crate::controllers::explorer::ports::surface::PresentationSurface;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::resolution::Resolution;

const WINDOW_TITLE: &str = "Mandelbrot Fractal";

#[derive(Debug)]
pub enum PixelsSurfaceError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
}

impl fmt::Display for PixelsSurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "window error: {}", err),
            Self::Pixels(err) => write!(f, "pixels error: {}", err),
        }
    }
}

impl Error for PixelsSurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for PixelsSurfaceError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for PixelsSurfaceError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for PixelsSurfaceError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

/// A fixed-size window showing one frame pixel per framebuffer pixel.
///
/// The event loop is pumped from [`PresentationSurface::poll_events`], so
/// window events are only drained between compute cycles.
pub struct PixelsSurface {
    event_loop: EventLoop<()>,
    window: &'static Window,
    pixels: Pixels<'static>,
    cursor: Option<(f32, f32)>,
}

impl PixelsSurface {
    pub fn new(resolution: Resolution) -> Result<Self, PixelsSurfaceError> {
        let size = resolution.size();
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(size, size))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(size, size, surface_texture)?;

        Ok(Self {
            event_loop,
            window,
            pixels,
            cursor: None,
        })
    }
}

impl PresentationSurface for PixelsSurface {
    type Error = PixelsSurfaceError;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        copy_argb_to_rgba(frame.as_slice(), self.pixels.frame_mut());
        self.pixels.render()?;
        self.window.request_redraw();
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<ViewerEvent> {
        let Self {
            event_loop,
            window,
            pixels,
            cursor,
        } = self;
        let mut events = Vec::new();

        let status = event_loop.pump_events(Some(Duration::ZERO), |event, _elwt| {
            let Event::WindowEvent {
                event,
                window_id,
            } = event
            else {
                return;
            };

            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => events.push(ViewerEvent::Quit),
                WindowEvent::CursorMoved { position, .. } => {
                    *cursor = Some((position.x as f32, position.y as f32));
                }
                WindowEvent::CursorLeft { .. } => *cursor = None,
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => {
                    let Some(position) = *cursor else {
                        return;
                    };

                    // clicks on letterboxing outside the framebuffer are dropped
                    if let Ok((x, y)) = pixels.window_pos_to_pixel(position) {
                        events.push(ViewerEvent::PointerClick {
                            x: x as i32,
                            y: y as i32,
                            button: pointer_button(button),
                        });
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = pixels.render() {
                        eprintln!("Render error: {err}");
                        events.push(ViewerEvent::Quit);
                    }
                }
                _ => {}
            }
        });

        if let PumpStatus::Exit(_) = status {
            events.push(ViewerEvent::Quit);
        }

        events
    }
}
