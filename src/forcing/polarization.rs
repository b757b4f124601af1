//! Polarization relation, Cushman-Roisin and Beckers eq. (13.7)
//!
//! Gives the amplitude of each field for a plane wave of
//! vertical velocity amplitude `A*g*omega/N0^2`. The signs are
//! part of the forcing substitutions, see [`super::ForcingExpressions`].
use super::dispersion::WaveParameters;
use num_complex::Complex;
use std::fmt;
use std::str::FromStr;

/// Fields of the Boussinesq system which are forced at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Horizontal velocity
    U,
    /// Vertical velocity
    W,
    /// Buoyancy
    B,
    /// Pressure
    P,
}

impl Field {
    /// Fields for which a coefficient exists
    pub const FORCED: [Field; 3] = [Field::U, Field::W, Field::B];

    /// Name of field as used in the equations
    pub fn name(self) -> &'static str {
        match self {
            Field::U => "u",
            Field::W => "w",
            Field::B => "b",
            Field::P => "p",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u" => Ok(Field::U),
            "w" => Ok(Field::W),
            "b" => Ok(Field::B),
            "p" => Ok(Field::P),
            _ => Err(format!("Unknown field {:?}", s)),
        }
    }
}

/// Forcing amplitude of each field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarization {
    /// Horizontal velocity
    pub u: f64,
    /// Vertical velocity
    pub w: f64,
    /// Buoyancy
    pub b: f64,
    /// Pressure, not used for the boundary forcing
    pub p: Option<f64>,
}

impl Polarization {
    /// Coefficients for forcing amplitude modifier `amp` and gravity `g`
    /// $$
    /// u = A g \omega k_z / (N_0^2 k_x), \quad w = A g \omega / N_0^2, \quad b = A g
    /// $$
    pub fn new(amp: f64, g: f64, wave: &WaveParameters) -> Self {
        let n0_sq = wave.n_0.powi(2);
        Self {
            u: amp * (g * wave.omega * wave.k_z) / (n0_sq * wave.k_x),
            w: amp * (g * wave.omega) / n0_sq,
            b: amp * g,
            p: None,
        }
    }

    /// Coefficient of `field`, `None` for pressure
    pub fn coefficient(&self, field: Field) -> Option<f64> {
        match field {
            Field::U => Some(self.u),
            Field::W => Some(self.w),
            Field::B => Some(self.b),
            Field::P => self.p,
        }
    }

    /// Forcing value of `field` at a single point, including the signs of
    /// the substitutions `fu`, `fw` and `fb`. `envelope` is the product of
    /// spatial window and temporal ramp.
    ///
    /// Evaluated via the phase $e^{i(k_x x + k_z z - \omega t)}$.
    pub fn forcing_at(
        &self,
        field: Field,
        wave: &WaveParameters,
        x: f64,
        z: f64,
        t: f64,
        envelope: f64,
    ) -> Option<f64> {
        let phase = Complex::new(0., wave.k_x * x + wave.k_z * z - wave.omega * t).exp();
        let value = match field {
            Field::U => -self.u * phase.im,
            Field::W => self.w * phase.im,
            Field::B => -self.b * phase.re,
            Field::P => -self.p? * phase.im,
        };
        Some(value * envelope)
    }
}
