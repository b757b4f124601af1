//! # Boundary forcing
//! Plane internal wave forced at the top boundary.
//!
//! Contains
//! - the dispersion relation, see [`WaveParameters`]
//! - the polarization relation, see [`Polarization`]
//! - spatial window and temporal ramp, see [`window`]
//! - the substitutions which are handed to the solver, see [`ForcingExpressions`]
//!
//! # Example
//! ```
//! use stratwave::forcing::{BoundaryForcing, Field};
//!
//! let forcing = BoundaryForcing::default().build(9.81, 0.0, 0.0).unwrap();
//! let w = forcing.polarization.coefficient(Field::W).unwrap();
//! assert!((w - 1.3872e-3).abs() < 1e-6);
//! ```
pub mod dispersion;
pub mod polarization;
pub mod window;
use crate::error::Result;
pub use dispersion::{WaveParameters, WaveScale};
pub use polarization::{Field, Polarization};
use serde::{Deserialize, Serialize};
pub use window::{forcing_window, ramp, WindowEdges, WindowKind};

/// Window substitution of a tanh window
const WINDOW_TANH: &str =
    "(1/2)*(tanh(slope*(x-left_edge))+1)*(1/2)*(tanh(slope*(-x+right_edge))+1)";
/// Window substitution without window
const WINDOW_FULL: &str = "1";
/// Ramp substitution
const RAMP: &str = "(1/2)*(tanh(4*t/(nT*T) - 2) + 1)";

/// Boundary forcing settings of the switchboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryForcing {
    /// Characteristic stratification \[rad s^-1\]
    pub n_0: f64,
    /// Wavenumber or horizontal wavelength
    pub scale: WaveScale,
    /// Oscillation frequency \[rad s^-1\]
    pub omega: f64,
    /// Forcing amplitude modifier
    pub amplitude: f64,
    /// Forcing amplitude ramp (number of oscillations)
    pub n_t: f64,
    /// Spatial window
    pub window: WindowKind,
}

impl Default for BoundaryForcing {
    fn default() -> Self {
        Self {
            n_0: 1.0,
            scale: WaveScale::default(),
            omega: 0.7071,
            amplitude: 2.0e-4,
            n_t: 3.0,
            window: WindowKind::default(),
        }
    }
}

impl BoundaryForcing {
    /// Derive all forcing quantities.
    ///
    /// * `g` - Acceleration due to gravity
    ///
    /// * `dis_buff_x` - Display buffer to the left of the display domain
    ///
    /// * `x_0` - Left edge of the display domain
    ///
    /// # Errors
    /// Out of domain wave parameters, see [`WaveParameters::new`]
    pub fn build(&self, g: f64, dis_buff_x: f64, x_0: f64) -> Result<Forcing> {
        let wave = WaveParameters::new(self.n_0, self.scale, self.omega)?;
        let polarization = Polarization::new(self.amplitude, g, &wave);
        let (slope, edges) = match self.window {
            WindowKind::Full => (0., None),
            WindowKind::Tanh { slope, win_lams } => (
                slope,
                Some(WindowEdges::place(wave.lam_x, win_lams, dis_buff_x, x_0)),
            ),
        };
        Ok(Forcing {
            wave,
            polarization,
            amplitude: self.amplitude,
            n_t: self.n_t,
            slope,
            edges,
            expressions: ForcingExpressions::new(&self.window),
        })
    }
}

/// Derived boundary forcing
#[derive(Debug, Clone, PartialEq)]
pub struct Forcing {
    /// Wave parameters
    pub wave: WaveParameters,
    /// Polarization coefficients
    pub polarization: Polarization,
    /// Forcing amplitude modifier
    pub amplitude: f64,
    /// Forcing amplitude ramp (number of oscillations)
    pub n_t: f64,
    /// Slope of window edges (zero without window)
    pub slope: f64,
    /// Window edges, `None` if forcing along the whole boundary
    pub edges: Option<WindowEdges>,
    /// Substitutions
    pub expressions: ForcingExpressions,
}

impl Forcing {
    /// Window evaluated along `x`
    pub fn window_array(&self, x: &ndarray::Array1<f64>) -> ndarray::Array1<f64> {
        match &self.edges {
            Some(e) => forcing_window(x, self.slope, e.left, e.right),
            None => ndarray::Array1::ones(x.raw_dim()),
        }
    }

    /// Value of `field` at the top boundary, at position `x` and time `t`
    pub fn value_at(&self, field: Field, x: f64, z: f64, t: f64) -> Option<f64> {
        let win = match &self.edges {
            Some(e) => window::forcing_window_scalar(x, self.slope, e.left, e.right),
            None => 1.,
        };
        let envelope = win * ramp(t, self.n_t, self.wave.period);
        self.polarization
            .forcing_at(field, &self.wave, x, z, t, envelope)
    }
}

/// Substitutions for the boundary forcing, see C-R & B eq 13.7
#[derive(Debug, Clone, PartialEq)]
pub struct ForcingExpressions {
    /// Spatial window
    pub window: String,
    /// Temporal ramp
    pub ramp: String,
    /// Horizontal velocity
    pub fu: String,
    /// Vertical velocity
    pub fw: String,
    /// Buoyancy
    pub fb: String,
    /// Pressure (not used)
    pub fp: String,
}

impl ForcingExpressions {
    /// Substitutions for a given window shape
    pub fn new(window: &WindowKind) -> Self {
        let window = match window {
            WindowKind::Full => WINDOW_FULL,
            WindowKind::Tanh { .. } => WINDOW_TANH,
        };
        Self {
            window: window.to_owned(),
            ramp: RAMP.to_owned(),
            fu: "-BFu*sin(kx*x + kz*z - omega*t)*window*ramp".to_owned(),
            fw: " BFw*sin(kx*x + kz*z - omega*t)*window*ramp".to_owned(),
            fb: "-BFb*cos(kx*x + kz*z - omega*t)*window*ramp".to_owned(),
            fp: "-BFp*sin(kx*x + kz*z - omega*t)*window*ramp".to_owned(),
        }
    }

    /// Substitutions as (name, expression) pairs, pressure excluded
    pub fn substitutions(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("window", self.window.as_str()),
            ("ramp", self.ramp.as_str()),
            ("fu", self.fu.as_str()),
            ("fw", self.fw.as_str()),
            ("fb", self.fb.as_str()),
        ]
    }
}
