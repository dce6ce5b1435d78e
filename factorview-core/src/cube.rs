//! Cube geometry and reconstruction value types.

use ndarray::{Array1, Array2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of the underlying spatial/spectral data cube.
///
/// Fixed at construction from the shape of the input cube; the engine
/// never resizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeShape {
    /// Number of rows in the spatial map.
    pub n_y: usize,
    /// Number of columns in the spatial map.
    pub n_x: usize,
    /// Number of spectral channels.
    pub n_spectral: usize,
}

impl CubeShape {
    /// Creates a cube shape from its three dimensions.
    #[must_use]
    pub fn new(n_y: usize, n_x: usize, n_spectral: usize) -> Self {
        Self {
            n_y,
            n_x,
            n_spectral,
        }
    }

    /// Spatial dimensions as an `(n_y, n_x)` pair.
    #[must_use]
    pub fn spatial_dims(&self) -> (usize, usize) {
        (self.n_y, self.n_x)
    }
}

/// A rendered reconstruction: mean spatial image plus mean spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Mean spatial image, shape `(n_y, n_x)`.
    pub image: Array2<f64>,
    /// Mean spectrum, length `n_spectral`.
    pub spectrum: Array1<f64>,
}

impl Reconstruction {
    /// The defined reconstruction of an empty factor set: all zeros.
    #[must_use]
    pub fn zeros(shape: CubeShape) -> Self {
        Self {
            image: Array2::zeros(shape.spatial_dims()),
            spectrum: Array1::zeros(shape.n_spectral),
        }
    }
}
