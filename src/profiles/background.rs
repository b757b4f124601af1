//! Background stratification profiles `BP`
//!
//! The profile multiplies the characteristic stratification,
//! i.e. the buoyancy frequency is `N0*BP`.
use super::steps::{tanh_bump, tanh_step};
use super::BuildProfile;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Width of the pseudo delta bumps in the staircase region \[m\]
const STEP_WIDTH: f64 = 0.05;

/// Selectable background profiles
#[enum_dispatch(BuildProfile)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundProfile {
    /// Constant stratification
    Uniform(UniformProfile),
    /// Layered stratification
    Staircase(StaircaseProfile),
}

impl Default for BackgroundProfile {
    fn default() -> Self {
        Self::Uniform(UniformProfile::default())
    }
}

/// Constant stratification, `BP = 1`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniformProfile {}

impl BuildProfile for UniformProfile {
    fn build(&self, z: &Array1<f64>) -> Array1<f64> {
        Array1::ones(z.raw_dim())
    }
}

/// Staircase of `n` steps between `z_b` and `z_t`.
///
/// Above `z_t` the profile tends to `n_1`, below `z_b` to `n_2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaircaseProfile {
    /// Number of steps
    pub n: usize,
    /// Bottom of staircase region \[m\]
    pub z_b: f64,
    /// Top of staircase region \[m\]
    pub z_t: f64,
    /// Steepness of the steps
    pub slope: f64,
    /// Stratification above the staircase
    pub n_1: f64,
    /// Stratification below the staircase
    pub n_2: f64,
}

impl Default for StaircaseProfile {
    fn default() -> Self {
        Self {
            n: 1,
            z_b: -0.38,
            z_t: -0.2,
            slope: 120.,
            n_1: 0.95,
            n_2: 1.05,
        }
    }
}

impl StaircaseProfile {
    /// Height of the pseudo delta bumps, midway between `n_1` and `n_2`
    pub fn bump_height(&self) -> f64 {
        self.n_1.max(self.n_2) - 0.5 * (self.n_1 - self.n_2).abs()
    }

    /// Centers of the steps
    pub fn step_centers(&self) -> Vec<f64> {
        if self.n == 0 {
            return vec![];
        }
        let height = (self.z_t - self.z_b) / self.n as f64;
        (0..self.n)
            .map(|i| self.z_b + height / 2.0 + i as f64 * height)
            .collect()
    }
}

impl BuildProfile for StaircaseProfile {
    fn build(&self, z: &Array1<f64>) -> Array1<f64> {
        // upper stratification
        let mut values = tanh_step(z, self.n_1, self.slope, self.z_t);
        // + lower stratification
        values += &tanh_step(z, self.n_2, -self.slope, self.z_b);
        // + steps
        let bump_h = self.bump_height();
        for c_i in self.step_centers() {
            values += &tanh_bump(z, bump_h, self.slope, c_i, STEP_WIDTH);
        }
        values
    }
}
