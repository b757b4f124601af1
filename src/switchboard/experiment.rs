//! Assemble an experiment from its switchboard
//!
//! [`Experiment`] holds every derived quantity, [`Problem`] is what
//! is handed to the solver: named parameters, non-constant
//! coefficients, substitutions, equations and boundary conditions.
use super::{Geometry, Switchboard};
use crate::bases::Grid;
use crate::equations::{
    boundary_conditions, energy_flux_tasks, equations_of_motion, vertical_profile_tasks,
    BoundaryCondition, Equation, SnapshotTask,
};
use crate::error::Result;
use crate::forcing::{Field, Forcing};
use crate::profiles::initial::random_perturbation;
use crate::profiles::{BackgroundProfile, BuildProfile, DampingProfile};
use ndarray::{Array1, Array2};

/// Fully derived experiment
#[derive(Debug, Clone)]
pub struct Experiment {
    /// Settings
    pub switchboard: Switchboard,
    /// Simulated and displayed domain
    pub geometry: Geometry,
    /// Boundary forcing
    pub forcing: Forcing,
    /// Background stratification
    pub background: BackgroundProfile,
    /// Sponge layer
    pub sponge: DampingProfile,
    /// Rayleigh friction
    pub rayleigh_friction: DampingProfile,
    /// Equations of motion
    pub equations: Vec<Equation>,
    /// Boundary conditions
    pub boundary_conditions: Vec<BoundaryCondition>,
    /// Vertical profile snapshot tasks
    pub profile_tasks: Vec<SnapshotTask>,
    /// Energy flux snapshot tasks
    pub energy_flux_tasks: Vec<SnapshotTask>,
    /// Simulation time at which the solver stops \[s\]
    pub stop_sim_time: f64,
    /// Simulation time added on restart \[s\]
    pub restart_add_time: f64,
}

impl Experiment {
    /// Derive the experiment.
    ///
    /// The sponge layer has priority over Rayleigh friction
    /// when the domain is extended. Both layers start at the
    /// bottom of the unextended domain.
    ///
    /// # Errors
    /// Wave parameters or domain lengths out of range
    pub fn from_switchboard(switchboard: Switchboard) -> Result<Self> {
        let mut geometry = switchboard.domain.derive()?;
        let forcing = switchboard.modules.forcing.build(
            switchboard.physics.g,
            geometry.dis_buff_x,
            geometry.x_0,
        )?;
        let lam_z = forcing.wave.lam_z;
        let damping = &switchboard.damping;

        let (sponge, rayleigh_friction) = {
            let top = geometry.abs_div;
            let sponge = if damping.use_sponge {
                DampingProfile::from(damping.sponge.ramp(top, lam_z))
            } else {
                DampingProfile::default()
            };
            let rf = if damping.use_rayleigh_friction {
                DampingProfile::from(damping.rayleigh_friction.ramp(top, lam_z))
            } else {
                DampingProfile::default()
            };
            (sponge, rf)
        };
        match (&sponge, &rayleigh_friction) {
            (DampingProfile::BottomRamp(layer), _) | (_, DampingProfile::BottomRamp(layer)) => {
                geometry.extend_bottom(layer.thickness());
            }
            _ => (),
        }

        let equations = equations_of_motion(&switchboard.terms);
        let snaps = &switchboard.snapshots;
        let profile_tasks =
            vertical_profile_tasks(snaps.take_bp_snaps, snaps.take_sl_snaps, snaps.take_rf_snaps);
        let energy_flux_tasks = energy_flux_tasks(snaps.take_ef_comp, snaps.take_ef_snaps);

        let sim = &switchboard.simulation;
        let stop_sim_time = if sim.use_stop_sim_time {
            sim.stop_sim_time
        } else {
            sim.stop_n_periods * forcing.wave.period
        };

        Ok(Self {
            background: switchboard.modules.background.clone(),
            geometry,
            forcing,
            sponge,
            rayleigh_friction,
            equations,
            boundary_conditions: boundary_conditions(),
            profile_tasks,
            energy_flux_tasks,
            stop_sim_time,
            restart_add_time: stop_sim_time,
            switchboard,
        })
    }

    /// Stop time of the solver, extended when continuing from a restart file
    pub fn solver_stop_time(&self, restart: bool) -> f64 {
        if restart {
            self.stop_sim_time + self.restart_add_time
        } else {
            self.stop_sim_time
        }
    }

    /// Grid of the simulated domain
    ///
    /// # Errors
    /// Less than two grid points in a direction
    pub fn grid(&self) -> Result<Grid> {
        let sim = &self.switchboard.simulation;
        Grid::new(
            sim.n_x,
            sim.n_z,
            self.geometry.x_interval(),
            self.geometry.z_interval(),
        )
    }

    /// Named scalar parameters of the solver
    pub fn parameters(&self) -> Vec<(String, f64)> {
        let physics = &self.switchboard.physics;
        let wave = &self.forcing.wave;
        let (left, right) = match &self.forcing.edges {
            Some(e) => (e.left, e.right),
            None => self.geometry.x_interval(),
        };
        let mut parameters = vec![
            ("NU", physics.nu),
            ("KA", physics.kappa),
            ("N0", wave.n_0),
        ];
        for field in Field::FORCED {
            if let Some(c) = self.forcing.polarization.coefficient(field) {
                parameters.push((bf_name(field), c));
            }
        }
        parameters.extend([
            ("kx", wave.k_x),
            ("kz", wave.k_z),
            ("omega", wave.omega),
            ("grav", physics.g),
            ("T", wave.period),
            ("nT", self.forcing.n_t),
            ("slope", self.forcing.slope),
            ("left_edge", left),
            ("right_edge", right),
        ]);
        parameters
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect()
    }

    /// Build the solver problem on the simulation grid
    ///
    /// # Errors
    /// Invalid grid size
    pub fn problem(&self) -> Result<Problem> {
        let grid = self.grid()?;
        let sim = &self.switchboard.simulation;
        let substitutions = self
            .forcing
            .expressions
            .substitutions()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Ok(Problem {
            parameters: self.parameters(),
            bp: self.background.build(&grid.z),
            sl: self.sponge.build(&grid.z),
            rf: self.rayleigh_friction.build(&grid.z),
            window: self.forcing.window_array(&grid.x),
            initial_b: random_perturbation(&grid.x, &grid.z, sim.noise_amplitude, sim.noise_seed),
            substitutions,
            equations: self.equations.iter().map(ToString::to_string).collect(),
            boundary_conditions: self
                .boundary_conditions
                .iter()
                .map(ToString::to_string)
                .collect(),
            grid,
        })
    }

    /// Log the derived quantities
    pub fn log_summary(&self) {
        let wave = &self.forcing.wave;
        let geo = &self.geometry;
        log::info!("Background profile: {:?}", self.background);
        log::info!(
            "N0 = {:.4}, omega = {:.4}, theta = {:.4} rad",
            wave.n_0,
            wave.omega,
            wave.theta
        );
        log::info!(
            "k = {:.4}, kx = {:.4}, kz = {:.4}, lam_x = {:.4}, lam_z = {:.4}, T = {:.4}",
            wave.k,
            wave.k_x,
            wave.k_z,
            wave.lam_x,
            wave.lam_z,
            wave.period
        );
        match &self.forcing.edges {
            Some(e) => log::info!("Forcing window [{:.4}, {:.4}]", e.left, e.right),
            None => log::info!("Forcing along the whole boundary"),
        }
        log::info!(
            "Simulated domain x = [{:.4}, {:.4}], z = [{:.4}, {:.4}], absorbing layer below {:.4}",
            geo.x_sim_0,
            geo.x_sim_f,
            geo.z_sim_f,
            geo.z_sim_0,
            geo.abs_div
        );
        log::info!(
            "Sponge layer: {}, Rayleigh friction: {}",
            self.sponge.is_active(),
            self.rayleigh_friction.is_active()
        );
        log::info!("Stop simulation time: {:.4} s", self.stop_sim_time);
        for eq in &self.equations {
            log::debug!("{}: {}", eq.name, eq);
        }
    }
}

fn bf_name(field: Field) -> &'static str {
    match field {
        Field::U => "BFu",
        Field::W => "BFw",
        Field::B => "BFb",
        Field::P => "BFp",
    }
}

/// Everything the solver needs to set up the initial value problem
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Grid of the simulated domain
    pub grid: Grid,
    /// Named scalar parameters
    pub parameters: Vec<(String, f64)>,
    /// Background profile
    pub bp: Array1<f64>,
    /// Sponge layer
    pub sl: Array1<f64>,
    /// Rayleigh friction
    pub rf: Array1<f64>,
    /// Forcing window along x
    pub window: Array1<f64>,
    /// Initial buoyancy
    pub initial_b: Array2<f64>,
    /// Substitutions (name, expression)
    pub substitutions: Vec<(String, String)>,
    /// Equations of motion
    pub equations: Vec<String>,
    /// Boundary conditions
    pub boundary_conditions: Vec<String>,
}

impl Problem {
    /// Value of a named parameter
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| *v)
    }

    /// Non-constant coefficients (name, profile)
    pub fn ncc(&self) -> [(&'static str, &Array1<f64>); 3] {
        [("BP", &self.bp), ("SL", &self.sl), ("RF", &self.rf)]
    }
}
