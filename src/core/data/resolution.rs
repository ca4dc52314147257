use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

/// Smallest grid the pixel mapping can handle: it divides by `size - 1`.
pub const MIN_RESOLUTION: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    TooSmall { size: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { size } => write!(
                f,
                "resolution must be at least {}, got {}",
                MIN_RESOLUTION, size
            ),
        }
    }
}

impl Error for ResolutionError {}

/// Edge length of the square output grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    size: u32,
}

impl Resolution {
    pub fn new(size: u32) -> Result<Self, ResolutionError> {
        if size < MIN_RESOLUTION {
            return Err(ResolutionError::TooSmall { size });
        }

        Ok(Self { size })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of cells in the `size × size` grid.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as u32) < self.size && (point.y as u32) < self.size
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_rejects_sizes_below_two() {
        assert_eq!(Resolution::new(0), Err(ResolutionError::TooSmall { size: 0 }));
        assert_eq!(Resolution::new(1), Err(ResolutionError::TooSmall { size: 1 }));
        assert!(Resolution::new(2).is_ok());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(Resolution::new(200).unwrap().pixel_count(), 40_000);
    }

    #[test]
    fn test_contains_point() {
        let resolution = Resolution::new(10).unwrap();

        assert!(resolution.contains_point(Point { x: 0, y: 0 }));
        assert!(resolution.contains_point(Point { x: 9, y: 9 }));
        assert!(!resolution.contains_point(Point { x: 10, y: 3 }));
        assert!(!resolution.contains_point(Point { x: 3, y: -1 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(640).unwrap().to_string(), "640x640");
    }
}
