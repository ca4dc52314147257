//! Input adapters: turn command lines and windows into explorer runs.

pub mod build_session;
pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
