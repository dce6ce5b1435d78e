//! The factorization collaborator seam.

use ndarray::{Array1, Array2, Array3};

use crate::cube::CubeShape;
use crate::error::Result;

/// External capability supplying an already-computed decomposition.
///
/// The selection engine never computes a decomposition itself; it asks an
/// implementation of this trait for per-factor slices and for sub-cubes
/// recombined from a chosen subset of factors. Implementations own the
/// numeric meaning of "combine" (e.g. a truncated SVD product or a sum of
/// component outer products).
pub trait Factorization {
    /// Total number of factors in the decomposition.
    fn n_factors(&self) -> usize;

    /// Dimensions of the underlying data cube.
    fn cube_shape(&self) -> CubeShape;

    /// Reconstructs the data cube from the given factor indices only.
    ///
    /// Indices are sorted, deduplicated, and already validated against
    /// [`n_factors`](Self::n_factors) by the caller. The returned cube has
    /// shape `(n_y, n_x, n_spectral)`.
    ///
    /// # Errors
    /// Returns [`Error::Combiner`](crate::Error::Combiner) for failures
    /// internal to the decomposition.
    fn combine(&self, indices: &[usize]) -> Result<Array3<f64>>;

    /// Reduces a cube to its mean spatial image, shape `(n_y, n_x)`.
    fn mean_spatial(&self, cube: &Array3<f64>) -> Array2<f64>;

    /// Reduces a cube to its mean spectrum, length `n_spectral`.
    fn mean_spectral(&self, cube: &Array3<f64>) -> Array1<f64>;

    /// Spatial map of a single factor, or `None` when no such factor exists.
    fn spatial_slice(&self, index: usize) -> Option<Array2<f64>>;

    /// Spectral vector of a single factor, or `None` when no such factor
    /// exists.
    fn spectral_slice(&self, index: usize) -> Option<Array1<f64>>;
}
