//! # `stratwave`: Internal waves in a 2-D stratified Boussinesq fluid
//!
//! # Dependencies
//! - cargo >= v1.56
//! - `hdf5` (sudo apt-get install -y libhdf5-dev)
//!
//! # Details
//!
//! `stratwave` configures experiments in which a plane internal wave is
//! forced at the top boundary of a stratified fluid, and post-processes
//! their output. Time integration is left to an external spectral solver;
//! this library derives everything the solver is handed:
//!
//! - wave parameters from the dispersion and polarization relations,
//! see [`forcing`]
//! - background stratification, sponge layer and Rayleigh friction
//! profiles, see [`profiles`]
//! - equations of motion, boundary conditions and snapshot tasks,
//! see [`equations`]
//!
//! All settings are collected in a yaml [`switchboard`]. Physics modules,
//! e.g. the background profile, are selected there by name.
//!
//! # Example
//! Derive an experiment and write the setup of the solver
//! ```no_run
//! use stratwave::switchboard::{Experiment, Switchboard};
//!
//! let sb = Switchboard::load("switchboard.yaml").unwrap();
//! let experiment = Experiment::from_switchboard(sb).unwrap();
//! experiment.log_summary();
//! let problem = experiment.problem().unwrap();
//! problem.write_unwrap("setup.h5");
//! ```
//!
//! ## Postprocess the output
//!
//! The solver's snapshot files are read with [`io::SnapshotFile`].
//! Frames of the wave field are rendered by
//!
//! `stratwave frames switchboard.yaml EXP_NAME snapshots/*.h5`
//!
//! ## Documentation
//!
//! Download and run:
//!
//! `cargo doc --open`
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate enum_dispatch;
pub mod bases;
pub mod equations;
pub mod error;
pub mod forcing;
pub mod io;
pub mod plot;
pub mod profiles;
pub mod switchboard;
pub mod types;
pub use error::{Error, Result};
