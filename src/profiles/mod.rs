//! # Vertical profiles
//! Background stratification, sponge layer and Rayleigh friction
//! are all 1-D arrays over the vertical coordinate. They enter
//! the equations as non-constant coefficients `BP`, `SL` and `RF`.
//!
//! Every variant implements [`BuildProfile`], so the caller does not
//! need to know which one was selected in the switchboard.
//!
//! # Example
//! Staircase stratification with one mixed layer
//! ```
//! use ndarray::Array1;
//! use stratwave::profiles::{BuildProfile, BackgroundProfile, StaircaseProfile};
//!
//! let z = Array1::linspace(-0.5, 0., 100);
//! let bp = BackgroundProfile::from(StaircaseProfile::default());
//! let n2 = bp.build(&z);
//! assert_eq!(n2.len(), z.len());
//! ```
use ndarray::Array1;

/// Profile evaluated on a set of sample coordinates
#[enum_dispatch]
pub trait BuildProfile {
    /// Evaluate profile at coordinates `z`
    fn build(&self, z: &Array1<f64>) -> Array1<f64>;
}

pub mod background;
pub mod damping;
pub mod initial;
pub mod steps;
pub use background::{BackgroundProfile, StaircaseProfile, UniformProfile};
pub use damping::{BottomRamp, DampingProfile, NoDamping};
pub use steps::{cosh2, tanh_bump, tanh_step};
