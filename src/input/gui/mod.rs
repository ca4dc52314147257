//! Windowed input using winit for the event loop and pixels for the
//! framebuffer.

pub mod run_gui;
