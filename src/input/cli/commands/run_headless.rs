use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::explorer::run_viewer;
use crate::input::build_session::{CommandError, build_session};
use crate::presenters::file::ppm::PpmFilePresenter;

/// Renders one frame of the configured viewport to a PPM file.
pub struct RunHeadlessCommand {
    config: ExplorerConfig,
}

impl RunHeadlessCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), CommandError<std::io::Error>> {
        let mut session = build_session(&self.config)?;
        let mut surface = PpmFilePresenter::new(self.config.output.clone());

        run_viewer(&mut session, &mut surface)?;

        Ok(())
    }
}
