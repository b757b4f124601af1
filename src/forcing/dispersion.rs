//! Dispersion relation of internal gravity waves
//!
//! Non-linear system of 3 equations with 6 unknowns, 3 of them
//! have to be specified:
//! 1. characteristic stratification `N0`
//! 2. characteristic wavenumber `k` *or* horizontal wavelength `lam_x`
//! 3. oscillation frequency `omega`
//!
//! The remaining quantities follow from Cushman-Roisin and Beckers ch. 13.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Independent input that fixes the spatial scale of the wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WaveScale {
    /// Characteristic wavenumber \[m^-1\]
    Wavenumber(f64),
    /// Horizontal wavelength \[m\]
    Wavelength(f64),
}

impl Default for WaveScale {
    fn default() -> Self {
        Self::Wavenumber(45.)
    }
}

/// Wave parameters derived from the dispersion relation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Characteristic stratification \[rad s^-1\]
    pub n_0: f64,
    /// Oscillation frequency \[rad s^-1\]
    pub omega: f64,
    /// Characteristic wavenumber \[m^-1\]
    pub k: f64,
    /// Angle of beam w.r.t. the horizontal \[rad\]
    pub theta: f64,
    /// Horizontal wavenumber \[m^-1\]
    pub k_x: f64,
    /// Vertical wavenumber \[m^-1\]
    pub k_z: f64,
    /// Horizontal wavelength \[m\]
    pub lam_x: f64,
    /// Vertical wavelength \[m\]
    pub lam_z: f64,
    /// Oscillation period \[s\]
    pub period: f64,
}

impl WaveParameters {
    /// Derive parameters from `N0`, wavenumber `k` and frequency `omega`
    ///
    /// # Errors
    /// `omega > N0` or non-positive input.
    pub fn from_wavenumber(n_0: f64, k: f64, omega: f64) -> Result<Self> {
        let theta = beam_angle(n_0, omega)?;
        check_positive("k", k)?;
        // k_x = k*cos(theta)
        let k_x = k * omega / n_0;
        Ok(Self::complete(n_0, k, omega, theta, k_x))
    }

    /// Derive parameters from `N0`, horizontal wavelength `lam_x` and frequency `omega`
    ///
    /// # Errors
    /// `omega > N0` or non-positive input.
    pub fn from_wavelength(n_0: f64, lam_x: f64, omega: f64) -> Result<Self> {
        let theta = beam_angle(n_0, omega)?;
        check_positive("lam_x", lam_x)?;
        let k_x = 2. * PI / lam_x;
        let k = k_x * n_0 / omega;
        Ok(Self::complete(n_0, k, omega, theta, k_x))
    }

    /// Derive parameters from either wave scale
    ///
    /// # Errors
    /// See [`WaveParameters::from_wavenumber`]
    pub fn new(n_0: f64, scale: WaveScale, omega: f64) -> Result<Self> {
        match scale {
            WaveScale::Wavenumber(k) => Self::from_wavenumber(n_0, k, omega),
            WaveScale::Wavelength(lam_x) => Self::from_wavelength(n_0, lam_x, omega),
        }
    }

    fn complete(n_0: f64, k: f64, omega: f64, theta: f64, k_x: f64) -> Self {
        let k_z = k * theta.sin();
        Self {
            n_0,
            omega,
            k,
            theta,
            k_x,
            k_z,
            lam_x: 2. * PI / k_x,
            lam_z: 2. * PI / k_z,
            period: 2. * PI / omega,
        }
    }

    /// Frequency recovered from beam angle, `N0 cos(theta)`
    pub fn omega_from_theta(&self) -> f64 {
        self.n_0 * self.theta.cos()
    }
}

/// theta = arccos(omega/N0), eq. 13.6
fn beam_angle(n_0: f64, omega: f64) -> Result<f64> {
    check_positive("N_0", n_0)?;
    check_positive("omega", omega)?;
    let ratio = omega / n_0;
    if ratio > 1. {
        return Err(Error::domain("omega/N_0", ratio));
    }
    Ok(ratio.acos())
}

fn check_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0. {
        Ok(())
    } else {
        Err(Error::domain(what, value))
    }
}
