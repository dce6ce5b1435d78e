//! Reconstruction of the data cube from chosen factor subsets.

use std::collections::BTreeSet;

use crate::cube::Reconstruction;
use crate::error::{Error, Result};
use crate::factorization::Factorization;
use crate::selection::SelectionSet;

/// Reconstructs the cube from the given factor indices and reduces it to a
/// spatial image and a spectrum.
///
/// An empty index set is a legitimate state ("select nothing"), so it
/// yields the zero-filled [`Reconstruction`] for the factorization's cube
/// shape without consulting the combiner. Indices are range-checked here,
/// before the combiner runs, so an out-of-range value is rejected the same
/// way for every combiner implementation.
///
/// # Errors
/// [`Error::IndexOutOfRange`] when any index falls outside
/// `[0, n_factors)`; combiner failures are propagated.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn reconstruct<F: Factorization>(
    fac: &F,
    indices: impl IntoIterator<Item = i64>,
) -> Result<Reconstruction> {
    let requested: BTreeSet<i64> = indices.into_iter().collect();
    if requested.is_empty() {
        return Ok(Reconstruction::zeros(fac.cube_shape()));
    }

    let n_factors = fac.n_factors();
    let mut valid = Vec::with_capacity(requested.len());
    for index in requested {
        if index < 0 || index >= n_factors as i64 {
            return Err(Error::IndexOutOfRange { index, n_factors });
        }
        valid.push(index as usize);
    }

    let cube = fac.combine(&valid)?;
    Ok(Reconstruction {
        image: fac.mean_spatial(&cube),
        spectrum: fac.mean_spectral(&cube),
    })
}

/// Reconstructs the "current" (selected) and "remainder" (unselected) pair
/// displayed side by side after every recomputation trigger.
///
/// # Errors
/// Same failure modes as [`reconstruct`], for either half of the pair.
pub fn reconstruct_split<F: Factorization>(
    fac: &F,
    selection: &SelectionSet,
) -> Result<(Reconstruction, Reconstruction)> {
    let current = reconstruct(fac, selection.iter())?;
    let remainder = reconstruct(fac, selection.unselected(fac.n_factors()))?;
    Ok((current, remainder))
}
