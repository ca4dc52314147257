use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NotFinite,
    Empty { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => {
                write!(f, "viewport bounds and their spans must be finite numbers")
            }
            Self::Empty { width, height } => {
                write!(
                    f,
                    "viewport must have min < max on both axes, got width {} and height {}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane shown by one frame.
///
/// A viewport is never mutated: zooming builds a new one, so a compute cycle
/// always reads a consistent snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min_real: f64,
    max_real: f64,
    min_imag: f64,
    max_imag: f64,
}

impl Viewport {
    pub fn new(
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    ) -> Result<Self, ViewportError> {
        if ![min_real, max_real, min_imag, max_imag]
            .iter()
            .all(|bound| bound.is_finite())
        {
            return Err(ViewportError::NotFinite);
        }

        let width = max_real - min_real;
        let height = max_imag - min_imag;

        // finite bounds can still be too far apart to measure
        if !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::NotFinite);
        }

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::Empty { width, height });
        }

        Ok(Self {
            min_real,
            max_real,
            min_imag,
            max_imag,
        })
    }

    /// Builds the viewport of size `width × height` centred on `center`.
    pub fn centred_on(center: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        Self::new(
            center.real - width / 2.0,
            center.real + width / 2.0,
            center.imag - height / 2.0,
            center.imag + height / 2.0,
        )
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.min_real
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.max_real
    }

    #[must_use]
    pub fn min_imag(&self) -> f64 {
        self.min_imag
    }

    #[must_use]
    pub fn max_imag(&self) -> f64 {
        self.max_imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_real - self.min_real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_imag - self.min_imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.min_real + self.width() / 2.0,
            imag: self.min_imag + self.height() / 2.0,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "re [{}, {}] im [{}, {}]",
            self.min_real, self.max_real, self.min_imag, self.max_imag
        )
    }
}
