use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, resolution: Resolution },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {} grid",
                    point.x, point.y, resolution
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Per-frame pixel to complex plane mapping.
///
/// Column 0 maps to `min_real` and the last column to `max_real`. Rows run
/// downwards, so row 0 maps to `max_imag` and the last row to `min_imag`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelMapping {
    min_real: f64,
    max_imag: f64,
    width: f64,
    height: f64,
    last: f64,
}

impl PixelMapping {
    #[must_use]
    pub fn new(viewport: Viewport, resolution: Resolution) -> Self {
        Self {
            min_real: viewport.min_real(),
            max_imag: viewport.max_imag(),
            width: viewport.width(),
            height: viewport.height(),
            last: f64::from(resolution.size() - 1),
        }
    }

    /// Maps an in-range `(row, col)` without bounds checks.
    ///
    /// The index is turned into a fraction of the grid first: the last row and
    /// column give exactly 1.0, so they land on the viewport edges, and the
    /// product never exceeds the (finite) span.
    #[inline]
    #[must_use]
    pub fn map(&self, row: u32, col: u32) -> Complex {
        Complex {
            real: self.min_real + f64::from(col) / self.last * self.width,
            imag: self.max_imag - f64::from(row) / self.last * self.height,
        }
    }
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    resolution: Resolution,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel_position,
            resolution,
        });
    }

    Ok(PixelMapping::new(viewport, resolution).map(pixel_position.y as u32, pixel_position.x as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_viewport() -> Viewport {
        Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left_is_min_real_max_imag() {
        let resolution = Resolution::new(200).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, resolution, classic_viewport());

        assert_eq!(result, Ok(Complex::new(-2.0, 1.5)));
    }

    #[test]
    fn test_pixel_to_complex_bottom_right_is_max_real_min_imag() {
        let resolution = Resolution::new(200).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 199, y: 199 }, resolution, classic_viewport());

        assert_eq!(result, Ok(Complex::new(1.0, -1.5)));
    }

    #[test]
    fn test_corners_of_widest_viewport_stay_finite() {
        let resolution = Resolution::new(100).unwrap();
        let viewport = Viewport::new(-5e307, 5e307, -1.0, 1.0).unwrap();

        let top_left = pixel_to_complex_coords(Point { x: 0, y: 0 }, resolution, viewport);
        let bottom_right = pixel_to_complex_coords(Point { x: 99, y: 99 }, resolution, viewport);

        assert_eq!(top_left, Ok(Complex::new(-5e307, 1.0)));
        assert_eq!(bottom_right, Ok(Complex::new(5e307, -1.0)));
    }

    #[test]
    fn test_pixel_to_complex_center_of_odd_grid() {
        let resolution = Resolution::new(101).unwrap();
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, resolution, viewport);

        assert_eq!(result, Ok(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_imaginary_axis_decreases_with_row() {
        let mapping = PixelMapping::new(classic_viewport(), Resolution::new(4).unwrap());

        assert!(mapping.map(1, 0).imag < mapping.map(0, 0).imag);
        assert_eq!(mapping.map(3, 0).real, mapping.map(0, 0).real);
    }

    #[test]
    fn test_smallest_grid_hits_both_corners() {
        let mapping = PixelMapping::new(classic_viewport(), Resolution::new(2).unwrap());

        assert_eq!(mapping.map(0, 0), Complex::new(-2.0, 1.5));
        assert_eq!(mapping.map(1, 1), Complex::new(1.0, -1.5));
    }

    #[test]
    fn test_pixel_outside_grid_fails() {
        let resolution = Resolution::new(100).unwrap();
        let point = Point { x: 100, y: 5 };

        assert_eq!(
            pixel_to_complex_coords(point, resolution, classic_viewport()),
            Err(PixelToComplexCoordsError::PointOutsideGrid { point, resolution })
        );
        assert!(pixel_to_complex_coords(Point { x: -1, y: 0 }, resolution, classic_viewport())
            .is_err());
    }
}
