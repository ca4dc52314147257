use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKind;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: u32) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
