//! End-to-end coverage of the browsing session over a synthetic
//! rank-1 factorization.

use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2, Array3, Axis};

use factorview_browser::{run, BrowserConfig, BrowserEvent, FactorBrowser, SessionEvent};
use factorview_core::{CubeShape, Error, Factorization, Reconstruction, Result};

/// Synthetic decomposition: factor `i` contributes the outer product of a
/// Gaussian spatial bump and a single-peaked spectrum, both scaled by
/// `i + 1` so every subset reconstructs to a distinct cube.
struct RankOneFactors {
    spatial: Vec<Array2<f64>>,
    spectral: Vec<Array1<f64>>,
    shape: CubeShape,
}

impl RankOneFactors {
    #[allow(clippy::cast_precision_loss)]
    fn generate(n_factors: usize) -> Self {
        let shape = CubeShape::new(8, 10, 32);
        let mut spatial = Vec::with_capacity(n_factors);
        let mut spectral = Vec::with_capacity(n_factors);
        for i in 0..n_factors {
            let scale = (i + 1) as f64;
            spatial.push(Array2::from_shape_fn(shape.spatial_dims(), |(y, x)| {
                let dy = y as f64 - 4.0;
                let dx = x as f64 - 5.0;
                scale * (-(dy * dy + dx * dx) / 8.0).exp()
            }));
            spectral.push(Array1::from_shape_fn(shape.n_spectral, |f| {
                let df = f as f64 - (4 * i) as f64;
                (-(df * df) / 4.0).exp()
            }));
        }
        Self {
            spatial,
            spectral,
            shape,
        }
    }
}

impl Factorization for RankOneFactors {
    fn n_factors(&self) -> usize {
        self.spatial.len()
    }

    fn cube_shape(&self) -> CubeShape {
        self.shape
    }

    fn combine(&self, indices: &[usize]) -> Result<Array3<f64>> {
        let CubeShape {
            n_y,
            n_x,
            n_spectral,
        } = self.shape;
        let mut cube = Array3::zeros((n_y, n_x, n_spectral));
        for &i in indices {
            let spatial = &self.spatial[i];
            let spectral = &self.spectral[i];
            for ((y, x, f), value) in cube.indexed_iter_mut() {
                *value += spatial[(y, x)] * spectral[f];
            }
        }
        Ok(cube)
    }

    fn mean_spatial(&self, cube: &Array3<f64>) -> Array2<f64> {
        cube.mean_axis(Axis(2)).expect("non-empty spectral axis")
    }

    fn mean_spectral(&self, cube: &Array3<f64>) -> Array1<f64> {
        cube.mean_axis(Axis(0))
            .expect("non-empty y axis")
            .mean_axis(Axis(0))
            .expect("non-empty x axis")
    }

    fn spatial_slice(&self, index: usize) -> Option<Array2<f64>> {
        self.spatial.get(index).cloned()
    }

    fn spectral_slice(&self, index: usize) -> Option<Array1<f64>> {
        self.spectral.get(index).cloned()
    }
}

#[test]
fn test_scripted_session_accepts_sorted_selection() {
    let events = [
        SessionEvent::Browse(BrowserEvent::RunScript("5:7,1".into())),
        SessionEvent::Browse(BrowserEvent::Next),
        SessionEvent::Browse(BrowserEvent::ApplyPage(vec![
            false, false, true, false, false, false,
        ])),
        SessionEvent::Accept,
    ];
    let kept = run(RankOneFactors::generate(12), BrowserConfig::default(), events)
        .unwrap()
        .expect("non-empty accepted selection");
    // Script gave {1, 5, 6, 7}; the page starting at 6 then dropped 6 and
    // 7 and kept 8.
    assert_eq!(kept, vec![1, 5, 8]);
}

#[test]
fn test_cancel_returns_no_selection() {
    let events = [
        SessionEvent::Browse(BrowserEvent::RunScript("0:3".into())),
        SessionEvent::Cancel,
    ];
    let outcome = run(RankOneFactors::generate(8), BrowserConfig::default(), events).unwrap();
    assert_eq!(outcome, None);
}

#[test]
fn test_accept_with_empty_selection_returns_none() {
    let outcome = run(
        RankOneFactors::generate(8),
        BrowserConfig::default(),
        [SessionEvent::Accept],
    )
    .unwrap();
    assert_eq!(outcome, None);
}

#[test]
fn test_unterminated_session_counts_as_cancel() {
    let events = [SessionEvent::Browse(BrowserEvent::RunScript("2".into()))];
    let outcome = run(RankOneFactors::generate(8), BrowserConfig::default(), events).unwrap();
    assert_eq!(outcome, None);
}

#[test]
fn test_selected_and_remainder_sum_to_full_cube() {
    let fac = RankOneFactors::generate(6);
    let full = factorview_core::reconstruct(&fac, 0..6).unwrap();

    let mut browser = FactorBrowser::new(RankOneFactors::generate(6)).unwrap();
    let snap = browser
        .handle(BrowserEvent::RunScript("0,2,4".into()))
        .unwrap();

    // Combination is linear, so current + remainder reproduces the full
    // reconstruction channel by channel.
    for ((y, x), &value) in full.image.indexed_iter() {
        assert_abs_diff_eq!(
            snap.current.image[(y, x)] + snap.remainder.image[(y, x)],
            value,
            epsilon = 1e-12
        );
    }
    for (f, &value) in full.spectrum.indexed_iter() {
        assert_abs_diff_eq!(
            snap.current.spectrum[f] + snap.remainder.spectrum[f],
            value,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_empty_reconstruction_is_zero_filled() {
    let fac = RankOneFactors::generate(6);
    let recon = factorview_core::reconstruct(&fac, []).unwrap();
    assert_eq!(recon, Reconstruction::zeros(fac.cube_shape()));
}

#[test]
fn test_one_past_the_end_fails_out_of_range() {
    let fac = RankOneFactors::generate(6);
    let err = factorview_core::reconstruct(&fac, [6]).unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            index: 6,
            n_factors: 6
        }
    ));
}

#[test]
fn test_rejected_script_mid_session_propagates() {
    let events = [
        SessionEvent::Browse(BrowserEvent::RunScript("1,junk".into())),
        SessionEvent::Accept,
    ];
    let result = run(RankOneFactors::generate(8), BrowserConfig::default(), events);
    assert!(matches!(result, Err(Error::InvalidToken { .. })));
}

#[test]
fn test_rerunning_a_script_changes_nothing() {
    let mut browser = FactorBrowser::new(RankOneFactors::generate(10)).unwrap();
    let first = browser
        .handle(BrowserEvent::RunScript("1,2,3,5:7".into()))
        .unwrap();
    let second = browser
        .handle(BrowserEvent::RunScript("1,2,3,5:7".into()))
        .unwrap();
    assert_eq!(first.selected_count, 6);
    assert_eq!(second.selected_count, 6);
    assert_eq!(first.current, second.current);
    assert_eq!(first.remainder, second.remainder);
}

#[test]
fn test_short_final_page_renders_empty_slots() {
    let mut browser = FactorBrowser::new(RankOneFactors::generate(8)).unwrap();
    let snap = browser.handle(BrowserEvent::Next).unwrap();
    // Window clamps to first = 2 so a full page of 6 still fits.
    assert_eq!(snap.page.first, 2);
    assert_eq!(snap.page.occupied(), 6);
    assert!(!snap.page.has_next);

    let mut small = FactorBrowser::new(RankOneFactors::generate(4)).unwrap();
    let snap = small.handle(BrowserEvent::GoTo(3)).unwrap();
    // Four factors never fill a six-slot page; the window pins to 0.
    assert_eq!(snap.page.first, 0);
    assert_eq!(snap.page.occupied(), 4);
    assert!(snap.page.slots[4].is_none());
    assert!(!snap.page.has_prev);
    assert!(!snap.page.has_next);
}
