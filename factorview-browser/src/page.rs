//! Render-ready view of the currently visible page.

use ndarray::{Array1, Array2};

use factorview_core::{Factorization, PageNav, PageWindow, SelectionSet};

/// One visible factor: its per-factor data plus selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorSlot {
    /// Global factor index shown in this slot.
    pub index: usize,
    /// Checkbox label, `"Keep: <index>"`.
    pub label: String,
    /// Spatial map of the factor, shape `(n_y, n_x)`.
    pub spatial: Array2<f64>,
    /// Spectral vector of the factor, length `n_spectral`.
    pub spectral: Array1<f64>,
    /// Whether the factor is currently in the selection.
    pub checked: bool,
}

/// The visible page: a fixed number of slots, some possibly empty.
///
/// A slot is `None` when its global index runs past the factor list (short
/// final page); the view layer renders those as "no factor available".
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Global index of the first slot.
    pub first: usize,
    /// Exactly `page_size` entries, in slot order.
    pub slots: Vec<Option<FactorSlot>>,
    /// A previous page exists.
    pub has_prev: bool,
    /// A next page exists.
    pub has_next: bool,
}

impl PageView {
    /// Builds the view for the given window against the current selection.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn build<F: Factorization>(
        fac: &F,
        window: &PageWindow,
        selection: &SelectionSet,
        nav: PageNav,
    ) -> Self {
        let slots = (0..window.page_size())
            .map(|slot| {
                let index = window.global_index(slot);
                let spatial = fac.spatial_slice(index)?;
                let spectral = fac.spectral_slice(index)?;
                Some(FactorSlot {
                    index,
                    label: format!("Keep: {index}"),
                    spatial,
                    spectral,
                    checked: selection.contains(index as i64),
                })
            })
            .collect();
        Self {
            first: window.first(),
            slots,
            has_prev: nav.has_prev,
            has_next: nav.has_next,
        }
    }

    /// Number of slots actually holding a factor.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}
