//! Spatial window and temporal ramp of the boundary forcing
use crate::profiles::steps::tanh_step_scalar;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};

/// Smooth window, approximately one in \[left, right\] and zero outside
/// $$
/// f(x) = \frac{1}{2}(\tanh(s(x-l))+1) \cdot \frac{1}{2}(\tanh(s(r-x))+1)
/// $$
pub fn forcing_window<S>(x: &ArrayBase<S, Ix1>, slope: f64, left: f64, right: f64) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    x.mapv(|xi| forcing_window_scalar(xi, slope, left, right))
}

/// Scalar version of [`forcing_window`]
pub fn forcing_window_scalar(x: f64, slope: f64, left: f64, right: f64) -> f64 {
    tanh_step_scalar(x, 1., slope, left) * tanh_step_scalar(x, 1., -slope, right)
}

/// Temporal ramp over `n_t` oscillation periods
/// $$
/// f(t) = \frac{1}{2}(\tanh(4 t / (n_T T) - 2) + 1)
/// $$
pub fn ramp(t: f64, n_t: f64, period: f64) -> f64 {
    0.5 * ((4. * t / (n_t * period) - 2.).tanh() + 1.)
}

/// Shape of the forcing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowKind {
    /// No window, force along the whole boundary
    Full,
    /// Tanh window spanning `win_lams` horizontal wavelengths
    Tanh {
        /// Slope of window edges
        slope: f64,
        /// Number of horizontal wavelengths that fit into the window
        win_lams: f64,
    },
}

impl Default for WindowKind {
    fn default() -> Self {
        Self::Tanh {
            slope: 15.,
            win_lams: 1.,
        }
    }
}

/// Left and right edge of the forcing window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEdges {
    /// Left edge \[m\]
    pub left: f64,
    /// Right edge \[m\]
    pub right: f64,
}

impl WindowEdges {
    /// Place the window next to the display domain.
    ///
    /// A buffer of half the window width avoids wrapping around the
    /// periodic boundary. If half of the window plus the buffer fits
    /// to the left of the display domain, the window is centered at
    /// `x_0`. Otherwise it is put as far left as the buffer allows.
    pub fn place(lam_x: f64, win_lams: f64, dis_buff_x: f64, x_0: f64) -> Self {
        let win_width = lam_x * win_lams;
        let buff = 0.5 * win_width;
        if 0.5 * win_width + buff < dis_buff_x {
            Self {
                left: x_0 - lam_x / 2.0,
                right: x_0 + lam_x / 2.0,
            }
        } else {
            let left = x_0 + buff;
            Self {
                left,
                right: left + lam_x,
            }
        }
    }

    /// Center of the window
    pub fn center(&self) -> f64 {
        0.5 * (self.left + self.right)
    }
}
