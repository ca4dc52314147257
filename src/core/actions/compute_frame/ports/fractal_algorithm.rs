use crate::core::data::complex::Complex;

/// Escape-time kernel evaluated once per pixel.
///
/// Implementations must be pure: workers call `evaluate` concurrently
/// without synchronisation.
pub trait FractalAlgorithm {
    /// Upper bound of [`FractalAlgorithm::evaluate`]; reaching it means the
    /// point is treated as inside the set.
    fn max_iterations(&self) -> u32;

    fn evaluate(&self, c: Complex) -> u32;
}
