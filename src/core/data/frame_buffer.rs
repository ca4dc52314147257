use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

/// Cell value before a compute cycle writes it. Rendered pixels always carry
/// an opaque alpha byte, so they can never equal this.
pub const UNRENDERED: u32 = 0x0000_0000;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    Allocation {
        pixels: usize,
    },
    PixelOutsideBounds {
        pixel: Point,
        resolution: Resolution,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { pixels } => {
                write!(f, "could not allocate a frame buffer of {} pixels", pixels)
            }
            Self::PixelOutsideBounds { pixel, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {} frame",
                    pixel.x, pixel.y, resolution
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

pub type FrameBufferData = Vec<u32>;

/// Row-major `size × size` grid of ARGB8888 pixels, row 0 at the top.
///
/// Allocated once per session and overwritten by every compute cycle.
#[derive(Debug)]
pub struct FrameBuffer {
    resolution: Resolution,
    pixels: FrameBufferData,
}

impl FrameBuffer {
    pub fn try_new(resolution: Resolution) -> Result<Self, FrameBufferError> {
        let total = resolution.pixel_count();
        let mut pixels = FrameBufferData::new();

        pixels
            .try_reserve_exact(total)
            .map_err(|_| FrameBufferError::Allocation { pixels: total })?;
        pixels.resize(total, UNRENDERED);

        Ok(Self { resolution, pixels })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, pixel: Point) -> Result<u32, FrameBufferError> {
        if !self.resolution.contains_point(pixel) {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        let index = pixel.y as usize * self.row_len() + pixel.x as usize;
        Ok(self.pixels[index])
    }

    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u32> {
        let row_len = self.row_len();
        self.pixels.chunks_exact_mut(row_len)
    }

    /// Resets every cell to [`UNRENDERED`] without reallocating.
    pub fn clear(&mut self) {
        self.pixels.fill(UNRENDERED);
    }

    #[must_use]
    pub fn is_fully_rendered(&self) -> bool {
        self.pixels.iter().all(|&pixel| pixel != UNRENDERED)
    }

    fn row_len(&self) -> usize {
        self.resolution.size() as usize
    }
}
