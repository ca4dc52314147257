use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

/// Cycles each channel through 0..=255 at its own rate (1, 5 and 13 steps per
/// iteration), so neighbouring escape counts get clearly different colours.
#[derive(Debug)]
pub struct MandelbrotChannelCycle {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotChannelCycle {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        // truncation to u8 is `mod 256`; 256 divides 2^32 so wrapping keeps it exact
        Colour {
            r: iterations as u8,
            g: iterations.wrapping_mul(5) as u8,
            b: iterations.wrapping_mul(13) as u8,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotChannelCycle {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::ChannelCycle
    }
}

impl MandelbrotChannelCycle {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
