//! Damping layers at the bottom of the domain
//!
//! Sponge layer (`SL`) and Rayleigh friction (`RF`) absorb the
//! downward propagating waves before they reflect. Both share
//! the same ramp shape; the switchboard decides which of them
//! is active.
//!
//! For a description of Rayleigh friction, see Jablonowski and
//! Williamson 2011 section 13.4.5.1
use super::steps::tanh_step;
use super::BuildProfile;
use ndarray::Array1;

/// Selectable damping profiles
#[enum_dispatch(BuildProfile)]
#[derive(Debug, Clone, PartialEq)]
pub enum DampingProfile {
    /// Layer is switched off, coefficient zero everywhere
    Off(NoDamping),
    /// Ramp towards `max_coeff` at the bottom
    BottomRamp(BottomRamp),
}

impl Default for DampingProfile {
    fn default() -> Self {
        Self::Off(NoDamping)
    }
}

impl DampingProfile {
    /// True if the layer contributes anything
    pub fn is_active(&self) -> bool {
        matches!(self, Self::BottomRamp(_))
    }
}

/// Null profile
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoDamping;

impl BuildProfile for NoDamping {
    fn build(&self, z: &Array1<f64>) -> Array1<f64> {
        Array1::zeros(z.raw_dim())
    }
}

/// Smooth ramp from 0 above the layer to `max_coeff` below it.
/// The ramp is centered halfway down the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomRamp {
    /// Bottom boundary of the layer \[m\]
    pub bottom: f64,
    /// Top boundary of the layer \[m\]
    pub top: f64,
    /// Slope of the ramp
    pub slope: f64,
    /// Coefficient reached at the end of the ramp
    pub max_coeff: f64,
}

impl BottomRamp {
    /// Layer below `top` with a given `thickness`
    pub fn new(top: f64, thickness: f64, slope: f64, max_coeff: f64) -> Self {
        Self {
            bottom: top - thickness,
            top,
            slope,
            max_coeff,
        }
    }

    /// Center of the ramp
    pub fn center(&self) -> f64 {
        let height = (self.top - self.bottom).abs();
        self.top - height / 2.0
    }

    /// Thickness of the layer
    pub fn thickness(&self) -> f64 {
        (self.top - self.bottom).abs()
    }
}

impl BuildProfile for BottomRamp {
    fn build(&self, z: &Array1<f64>) -> Array1<f64> {
        tanh_step(z, self.max_coeff, -self.slope, self.center())
    }
}
