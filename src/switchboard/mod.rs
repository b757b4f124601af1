//! # Switchboard
//! All settings of an experiment, read from a yaml file.
//!
//! Every section falls back to its defaults, so an empty file
//! is a valid switchboard. Physics modules are selected by their
//! `kind`, an unknown kind is a configuration error.
//!
//! # Example
//! ```
//! use stratwave::switchboard::Switchboard;
//!
//! let sb = Switchboard::from_yaml(
//!     "
//! simulation:
//!   n_x: 128
//! modules:
//!   background:
//!     kind: staircase
//!     n: 2
//! ",
//! )
//! .unwrap();
//! assert_eq!(sb.simulation.n_x, 128);
//! assert_eq!(sb.simulation.n_z, 512);
//! ```
pub mod domain;
pub mod experiment;
mod problem_io;
use crate::equations::TermSwitches;
use crate::error::Result;
use crate::forcing::BoundaryForcing;
use crate::profiles::{BackgroundProfile, BottomRamp};
pub use domain::{Domain, Geometry};
pub use experiment::{Experiment, Problem};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings of an experiment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Switchboard {
    /// Resolution and stop conditions
    pub simulation: Simulation,
    /// Simulated and displayed domain
    pub domain: Domain,
    /// Physical parameters
    pub physics: Physics,
    /// Terms in the equations of motion
    pub terms: TermSwitches,
    /// Sponge layer and Rayleigh friction
    pub damping: Damping,
    /// Selected physics modules
    pub modules: Modules,
    /// Snapshot files
    pub snapshots: Snapshots,
    /// Adaptive time stepping
    pub cfl: Cfl,
    /// Flow property logged during the run
    pub flow: FlowProperty,
    /// Frames
    pub plotting: Plotting,
}

impl Switchboard {
    /// Parse switchboard from a yaml string
    ///
    /// # Errors
    /// Malformed yaml, unknown fields or unknown module kinds
    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Read switchboard from a yaml file
    ///
    /// # Errors
    /// File can not be read, see also [`Switchboard::from_yaml`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = std::fs::read_to_string(path.as_ref())?;
        log::info!("Read switchboard {:?}", path.as_ref());
        Self::from_yaml(&s)
    }

    /// Serialize switchboard, all defaults filled in
    ///
    /// # Errors
    /// Serialization fails
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Resolution and stop conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Simulation {
    /// Number of grid points in x
    pub n_x: usize,
    /// Number of grid points in z
    pub n_z: usize,
    /// Dealias factor
    pub dealias: f64,
    /// Stop after this many oscillation periods
    pub stop_n_periods: f64,
    /// Stop after this wall time \[minutes\]
    pub stop_wall_time: f64,
    /// Stop after this many iterations, unlimited if not set
    pub stop_iteration: Option<u64>,
    /// Stop at this simulation time \[s\]
    pub stop_sim_time: f64,
    /// Use `stop_sim_time` instead of `stop_n_periods`
    pub use_stop_sim_time: bool,
    /// Initial time step size \[s\]
    pub dt: f64,
    /// Adaptive time stepping
    pub adapt_dt: bool,
    /// Restart file of the solver
    pub restart_file: String,
    /// Amplitude of the initial buoyancy perturbation
    pub noise_amplitude: f64,
    /// Seed of the initial buoyancy perturbation
    pub noise_seed: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            n_x: 256,
            n_z: 512,
            dealias: 1.5,
            stop_n_periods: 1.,
            stop_wall_time: 60.,
            stop_iteration: None,
            stop_sim_time: 3.,
            use_stop_sim_time: true,
            dt: 0.125,
            adapt_dt: true,
            restart_file: "restart.h5".to_owned(),
            noise_amplitude: 0.,
            noise_seed: 42,
        }
    }
}

/// Physical parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Physics {
    /// Viscosity \[m^2/s\]
    pub nu: f64,
    /// Thermal diffusivity \[m^2/s\]
    pub kappa: f64,
    /// Acceleration due to gravity \[m/s^2\]
    pub g: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            nu: 1.0e-6,
            kappa: 1.4e-7,
            g: 9.81,
        }
    }
}

impl Physics {
    /// Prandtl number, about 7 for water at 20 C
    pub fn prandtl(&self) -> f64 {
        self.nu / self.kappa
    }
}

/// Damping layers at the bottom of the domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Damping {
    /// Use sponge layer
    pub use_sponge: bool,
    /// Use Rayleigh friction
    pub use_rayleigh_friction: bool,
    /// Sponge layer settings
    pub sponge: DampingLayer,
    /// Rayleigh friction settings
    pub rayleigh_friction: DampingLayer,
}

/// Settings of a single damping layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DampingLayer {
    /// Thickness of layer \[m\], one vertical wavelength if not set
    pub thickness: Option<f64>,
    /// Slope of the ramp
    pub slope: f64,
    /// Coefficient reached at the end of the ramp
    pub max_coeff: f64,
}

impl Default for DampingLayer {
    fn default() -> Self {
        Self {
            thickness: None,
            slope: 20.,
            max_coeff: 0.6,
        }
    }
}

impl DampingLayer {
    /// Layer ramp below `top`
    ///
    /// * `top` - Top of layer
    ///
    /// * `lam_z` - Vertical wavelength, the default thickness
    pub fn ramp(&self, top: f64, lam_z: f64) -> BottomRamp {
        let thickness = self.thickness.unwrap_or(lam_z);
        BottomRamp::new(top, thickness, self.slope, self.max_coeff)
    }
}

/// Selected physics modules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Modules {
    /// Background stratification
    pub background: BackgroundProfile,
    /// Boundary forcing
    pub forcing: BoundaryForcing,
}

/// Snapshot files written by the solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Snapshots {
    /// Directory of wave field snapshots
    pub dir: String,
    /// Simulation time between writes \[s\]
    pub snap_dt: f64,
    /// Writes per file
    pub max_writes: usize,
    /// Record background profile
    pub take_bp_snaps: bool,
    /// Record sponge layer
    pub take_sl_snaps: bool,
    /// Record Rayleigh friction
    pub take_rf_snaps: bool,
    /// Directory of vertical profiles, relative to `dir`
    pub vp_dir: String,
    /// Record energy flux terms separately
    pub take_ef_comp: bool,
    /// Record total energy flux
    pub take_ef_snaps: bool,
    /// Directory of auxiliary snapshots, relative to `dir`
    pub aux_dir: String,
}

impl Default for Snapshots {
    fn default() -> Self {
        Self {
            dir: "snapshots".to_owned(),
            snap_dt: 0.25,
            max_writes: 50,
            take_bp_snaps: true,
            take_sl_snaps: true,
            take_rf_snaps: true,
            vp_dir: "vp_snapshots".to_owned(),
            take_ef_comp: false,
            take_ef_snaps: false,
            aux_dir: "aux_snapshots".to_owned(),
        }
    }
}

/// Settings of the CFL condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cfl {
    /// Iterations between updates of dt
    pub cadence: usize,
    /// Safety factor
    pub safety: f64,
    /// Maximum relative increase of dt
    pub max_change: f64,
    /// Maximum relative decrease of dt
    pub min_change: f64,
    /// Upper bound of dt \[s\]
    pub max_dt: f64,
    /// Relative change below which dt is kept
    pub threshold: f64,
}

impl Default for Cfl {
    fn default() -> Self {
        Self {
            cadence: 10,
            safety: 1.,
            max_change: 1.5,
            min_change: 0.5,
            max_dt: 0.125,
            threshold: 0.05,
        }
    }
}

/// Flow property, its maximum is logged during the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowProperty {
    /// Iterations between evaluations
    pub cadence: usize,
    /// Expression
    pub property: String,
    /// Name of property
    pub name: String,
}

impl Default for FlowProperty {
    fn default() -> Self {
        Self {
            cadence: 10,
            property: "(kx*u + kz*w)/omega".to_owned(),
            name: "Lin_Criterion".to_owned(),
        }
    }
}

/// Frame settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Plotting {
    /// Plot b, p, u and w instead of w only
    pub plot_all_variables: bool,
    /// Number of ticks on the color bar
    pub n_clrbar_ticks: usize,
    /// Font size, recorded in the frame metadata
    pub font_size: f64,
    /// Size of a panel \[inch\]
    pub scale: f64,
    /// Pixels per inch
    pub dpi: f64,
    /// Frames per second of an animation
    pub fps: f64,
}

impl Default for Plotting {
    fn default() -> Self {
        Self {
            plot_all_variables: false,
            n_clrbar_ticks: 3,
            font_size: 12.,
            scale: 2.5,
            dpi: 100.,
            fps: 20.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forcing::{WaveScale, WindowKind};
    use crate::profiles::StaircaseProfile;

    #[test]
    fn test_empty_is_default() {
        let sb = Switchboard::from_yaml("{}").unwrap();
        assert_eq!(sb, Switchboard::default());
        assert!((sb.physics.prandtl() - 7.142857).abs() < 1e-5);
    }

    #[test]
    fn test_select_modules() {
        let sb = Switchboard::from_yaml(
            "
modules:
  background:
    kind: staircase
    n: 3
    n_1: 1.0
  forcing:
    scale:
      kind: wavelength
      value: 0.25
    window:
      kind: full
",
        )
        .unwrap();
        match &sb.modules.background {
            BackgroundProfile::Staircase(s) => {
                assert_eq!(s.n, 3);
                assert_eq!(s.n_1, 1.0);
                assert_eq!(s.n_2, StaircaseProfile::default().n_2);
            }
            _ => panic!("Expected staircase profile"),
        }
        assert_eq!(sb.modules.forcing.scale, WaveScale::Wavelength(0.25));
        assert_eq!(sb.modules.forcing.window, WindowKind::Full);
    }

    #[test]
    fn test_unknown_module() {
        let res = Switchboard::from_yaml(
            "
modules:
  background:
    kind: foran_v2
",
        );
        assert!(matches!(res, Err(crate::error::Error::Config(_))));
        assert!(Switchboard::from_yaml("no_section: 1").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut sb = Switchboard::default();
        sb.damping.use_rayleigh_friction = true;
        sb.damping.rayleigh_friction.thickness = Some(0.2);
        let back = Switchboard::from_yaml(&sb.to_yaml().unwrap()).unwrap();
        assert_eq!(back, sb);
    }

    #[test]
    fn test_damping_layer_default_thickness() {
        let layer = DampingLayer::default();
        let ramp = layer.ramp(-1.0, 0.3);
        assert!((ramp.bottom + 1.3).abs() < 1e-12);
        let layer = DampingLayer {
            thickness: Some(0.1),
            ..DampingLayer::default()
        };
        assert!((layer.ramp(-1.0, 0.3).bottom + 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_misspelled_section_key() {
        assert!(Switchboard::from_yaml("damping: {use_spong: true}").is_err());
        assert!(Switchboard::from_yaml("simulation: {nx: 64}").is_err());
        let res = Switchboard::from_yaml(
            "
modules:
  background:
    kind: staircase
    nn: 3
",
        );
        assert!(matches!(res, Err(crate::error::Error::Config(_))));
        assert!(Switchboard::from_yaml("modules: {background: {kind: uniform}}").is_ok());
    }
}
