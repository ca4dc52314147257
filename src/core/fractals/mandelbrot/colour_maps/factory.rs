use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::{
    channel_cycle::MandelbrotChannelCycle, fire_gradient::MandelbrotFireGradient,
    kinds::MandelbrotColourMapKind,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKind,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::ChannelCycle => {
            Box::new(MandelbrotChannelCycle::new(max_iterations))
        }
        MandelbrotColourMapKind::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
    }
}
