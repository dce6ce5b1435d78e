//! Headless demo: build a synthetic factorization and drive a scripted
//! browsing session to an accepted selection.
//!
//! Run with `RUST_LOG=debug` to watch the controller handle each event.

use ndarray::{Array1, Array2, Array3, Axis};

use factorview_browser::{run, BrowserConfig, BrowserEvent, SessionEvent};
use factorview_core::{CubeShape, Factorization, Result};

/// A toy decomposition of a 50x50x800 cube: each factor pairs a linear
/// spatial ramp with a Gaussian spectral band.
struct DemoFactors {
    shape: CubeShape,
    n_factors: usize,
}

impl Factorization for DemoFactors {
    fn n_factors(&self) -> usize {
        self.n_factors
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
            let spatial = self.spatial_slice(i).expect("validated index");
            let spectral = self.spectral_slice(i).expect("validated index");
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

    #[allow(clippy::cast_precision_loss)]
    fn spatial_slice(&self, index: usize) -> Option<Array2<f64>> {
        if index >= self.n_factors {
            return None;
        }
        let scale = (index + 1) as f64;
        Some(Array2::from_shape_fn(
            self.shape.spatial_dims(),
            |(y, x)| scale * (y as f64 + 1.0) * (x as f64 + 1.0),
        ))
    }

    #[allow(clippy::cast_precision_loss)]
    fn spectral_slice(&self, index: usize) -> Option<Array1<f64>> {
        if index >= self.n_factors {
            return None;
        }
        let center = 100.0 * (index + 1) as f64;
        Some(Array1::from_shape_fn(self.shape.n_spectral, |f| {
            let df = f as f64 - center;
            30.0 * (-(df * df) / (40.0 * 40.0)).exp()
        }))
    }
}

fn main() {
    env_logger::init();

    let factors = DemoFactors {
        shape: CubeShape::new(50, 50, 800),
        n_factors: 20,
    };

    let events = [
        SessionEvent::Browse(BrowserEvent::RunScript("[0:2,5]".into())),
        SessionEvent::Browse(BrowserEvent::Next),
        SessionEvent::Browse(BrowserEvent::ApplyPage(vec![
            true, false, false, false, false, false,
        ])),
        SessionEvent::Accept,
    ];

    match run(factors, BrowserConfig::default(), events) {
        Ok(Some(kept)) => println!("kept factors: {kept:?}"),
        Ok(None) => println!("no factors kept"),
        Err(err) => eprintln!("session failed: {err}"),
    }
}
