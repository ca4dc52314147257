use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::explorer::run_viewer;
use crate::input::build_session::{CommandError, build_session};
use crate::presenters::pixels::surface::{PixelsSurface, PixelsSurfaceError};

/// Opens a window on the configured viewport; left click zooms in, right
/// click zooms out, closing the window ends the run.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), CommandError<PixelsSurfaceError>> {
        let mut session = build_session(&self.config)?;
        let mut surface =
            PixelsSurface::new(self.config.resolution).map_err(CommandError::Surface)?;

        run_viewer(&mut session, &mut surface)?;

        Ok(())
    }
}
