pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::explorer_config::ExplorerConfig;
pub use controllers::explorer::{ExplorerSession, PresentationSurface, ViewerEvent, run_viewer};
pub use input::cli::commands::run_headless::RunHeadlessCommand;
pub use input::cli::startup::{config_from_command_line, report_startup_error};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui::RunGuiCommand;
