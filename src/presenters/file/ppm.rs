use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::adapters::pixel_format::argb_to_rgb_bytes;
use crate::controllers::explorer::events::ViewerEvent;
use crate::controllers::explorer::ports::surface::PresentationSurface;
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes a frame as a binary PPM (P6) image.
pub fn write_ppm(frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filepath)?);
    let size = frame.resolution().size();

    // P6 header: magic, width height, max channel value
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", size, size)?;
    writeln!(file, "255")?;
    file.write_all(&argb_to_rgb_bytes(frame.as_slice()))?;
    file.flush()
}

/// Headless surface: saves every presented frame to one PPM file and asks
/// the viewer to quit as soon as it is polled.
pub struct PpmFilePresenter {
    filepath: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    #[must_use]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}

impl PresentationSurface for PpmFilePresenter {
    type Error = std::io::Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        write_ppm(frame, &self.filepath)?;
        println!("Saved to {}", self.filepath.display());
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<ViewerEvent> {
        vec![ViewerEvent::Quit]
    }
}
