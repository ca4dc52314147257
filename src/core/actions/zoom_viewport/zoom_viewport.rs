use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scale applied to the viewport's width and height.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => 0.5,
            Self::Out => 2.0,
        }
    }
}

/// Largest relative difference allowed between the zoomed viewport's size
/// and the requested one before the zoom counts as lost to rounding.
const MAX_RELATIVE_SCALE_ERROR: f64 = 1e-3;

#[derive(Debug, PartialEq)]
pub enum ZoomViewportError {
    PixelToComplex(PixelToComplexCoordsError),
    Viewport(ViewportError),
    PrecisionExhausted { width: f64, height: f64 },
}

impl fmt::Display for ZoomViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelToComplex(err) => write!(f, "click outside the frame: {}", err),
            Self::Viewport(err) => write!(f, "zoom produced an invalid viewport: {}", err),
            Self::PrecisionExhausted { width, height } => write!(
                f,
                "cannot zoom further, viewport of width {} and height {} is at the limit of f64 precision",
                width, height
            ),
        }
    }
}

impl Error for ZoomViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelToComplex(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::PrecisionExhausted { .. } => None,
        }
    }
}

impl From<PixelToComplexCoordsError> for ZoomViewportError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::PixelToComplex(err)
    }
}

impl From<ViewportError> for ZoomViewportError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Derives the viewport after a click: recentred on the clicked point and
/// scaled by the direction's factor. `current` is left untouched.
///
/// Fails once the bounds can no longer be placed finely enough in `f64` to
/// scale the viewport by the requested factor.
pub fn zoom_viewport(
    current: Viewport,
    resolution: Resolution,
    click: Point,
    direction: ZoomDirection,
) -> Result<Viewport, ZoomViewportError> {
    let center = pixel_to_complex_coords(click, resolution, current)?;
    let factor = direction.factor();
    let width = current.width() * factor;
    let height = current.height() * factor;

    let zoomed = Viewport::centred_on(center, width, height)?;

    if !scaled_as_requested(zoomed.width(), width) || !scaled_as_requested(zoomed.height(), height)
    {
        return Err(ZoomViewportError::PrecisionExhausted {
            width: current.width(),
            height: current.height(),
        });
    }

    Ok(zoomed)
}

fn scaled_as_requested(actual: f64, requested: f64) -> bool {
    (actual - requested).abs() <= requested * MAX_RELATIVE_SCALE_ERROR
}
