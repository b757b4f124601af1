//! # Bases
//! Grid points of the solver's bases, taken from `funspace`
//!
//! - `FourierR2c`, periodic in x, see [`fourier_r2c()`]
//! - `Chebyshev`, bounded in z, see [`chebyshev()`]
//!
//! The coordinates of `funspace` live on the reference intervals
//! \[0, 2pi) and \[-1, 1\]; [`Grid`] maps them onto the physical domain.
use crate::error::{Error, Result};
pub use funspace::chebyshev;
pub use funspace::fourier_r2c;
pub use funspace::{BaseSpace, Space1};
use ndarray::Array1;
use std::f64::consts::PI;

/// Grid points of the simulated domain
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Horizontal (periodic) coordinates
    pub x: Array1<f64>,
    /// Vertical coordinates
    pub z: Array1<f64>,
}

impl Grid {
    /// Fourier grid with `nx` points on \[x_l, x_r) and Chebyshev
    /// grid with `nz` points on \[z_b, z_t\]
    ///
    /// # Errors
    /// Less than two points in one direction.
    pub fn new(
        nx: usize,
        nz: usize,
        x_interval: (f64, f64),
        z_interval: (f64, f64),
    ) -> Result<Self> {
        if nx < 2 || nz < 2 {
            return Err(Error::shape("at least 2 grid points", (nx, nz)));
        }
        let [x] = Space1::new(&fourier_r2c::<f64>(nx)).coords();
        let [z] = Space1::new(&chebyshev::<f64>(nz)).coords();
        Ok(Self {
            x: map_periodic(&x, x_interval),
            z: map_bounded(&z, z_interval),
        })
    }
}

/// Map \[0, 2pi) onto \[lo, hi)
fn map_periodic(x: &Array1<f64>, (lo, hi): (f64, f64)) -> Array1<f64> {
    x.mapv(|xi| lo + xi / (2. * PI) * (hi - lo))
}

/// Map the Chebyshev nodes onto \[lo, hi\], keeping their order
fn map_bounded(z: &Array1<f64>, (lo, hi): (f64, f64)) -> Array1<f64> {
    z.mapv(|zi| lo + (zi + 1.) / 2. * (hi - lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(16, 17, (-0.3, 1.2), (-1.2, 0.3)).unwrap();
        assert_eq!(grid.x.len(), 16);
        assert_eq!(grid.z.len(), 17);
        let x_min = grid.x.fold(f64::INFINITY, |a, b| a.min(*b));
        let x_max = grid.x.fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        assert!((x_min + 0.3).abs() < 1e-12);
        assert!(x_max < 1.2);
        // Gauss-Lobatto points include the end points
        let z_min = grid.z.fold(f64::INFINITY, |a, b| a.min(*b));
        let z_max = grid.z.fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        assert!((z_min + 1.2).abs() < 1e-12);
        assert!((z_max - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_grid_too_small() {
        assert!(Grid::new(1, 16, (0., 1.), (-1., 0.)).is_err());
    }
}
