use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

/// Black → red → orange → yellow → white across the iteration budget.
#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotFireGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);

        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
