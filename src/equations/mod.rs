//! # Equations of motion
//! 2-D Boussinesq equations in the syntax of the external
//! spectral solver. Non-linear terms are on the RHS.
//!
//! Variables: `p, b, u, w, bz, uz, wz`. Parameters:
//! `NU, KA, N0` and the non-constant coefficients `BP, SL, RF`.
//!
//! Individual terms can be switched off from the switchboard,
//! see [`TermSwitches`].
pub mod boundary_conditions;
pub mod diagnostics;
pub use boundary_conditions::{boundary_conditions, BoundaryCondition};
pub use diagnostics::{energy_flux_tasks, vertical_profile_tasks, SnapshotTask};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terms in the equations of motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TermSwitches {
    /// Momentum diffusion
    pub viscous_term: bool,
    /// Pressure gradient
    pub pressure_term: bool,
    /// Non-linear advection
    pub advection_term: bool,
    /// Buoyancy in vertical momentum
    pub buoyancy_term: bool,
    /// Buoyancy diffusion
    pub diffusivity_term: bool,
}

impl Default for TermSwitches {
    fn default() -> Self {
        Self {
            viscous_term: true,
            pressure_term: true,
            advection_term: true,
            buoyancy_term: true,
            diffusivity_term: true,
        }
    }
}

/// Single equation `lhs = rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// Name of equation
    pub name: &'static str,
    /// Linear terms
    pub lhs: String,
    /// Non-linear terms
    pub rhs: String,
}

impl Equation {
    fn new(name: &'static str, lhs: Vec<&str>, rhs: Vec<&str>) -> Self {
        Self {
            name,
            lhs: join_terms(&lhs),
            rhs: join_terms(&rhs),
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// Join signed terms, e.g. \["dt(u)", "- NU*dz(uz)"\] -> "dt(u) - NU*dz(uz)"
fn join_terms(terms: &[&str]) -> String {
    if terms.is_empty() {
        return "0".to_owned();
    }
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            out.push_str(term.trim_start_matches("+ "));
        } else {
            out.push(' ');
            out.push_str(term);
        }
    }
    out
}

/// Build the seven equations of motion
pub fn equations_of_motion(terms: &TermSwitches) -> Vec<Equation> {
    // Mass conservation
    let eq1_mc = Equation::new("mass conservation", vec!["dx(u)", "+ wz"], vec![]);

    // Equation of state (in terms of buoyancy)
    let mut lhs = vec!["dt(b)"];
    if terms.diffusivity_term {
        lhs.push("- KA*(dx(dx(b)) + dz(bz))");
    }
    let mut rhs = vec!["- ((N0*BP)**2)*w"];
    if terms.advection_term {
        rhs.push("- (u*dx(b) + w*bz)");
    }
    let eq2_es = Equation::new("equation of state", lhs, rhs);

    // Horizontal momentum
    let mut lhs = vec!["dt(u)"];
    if terms.viscous_term {
        lhs.push("- SL*NU*dx(dx(u))");
        lhs.push("- NU*dz(uz)");
    }
    if terms.pressure_term {
        lhs.push("+ dx(p)");
    }
    lhs.push("+ RF*u");
    let mut rhs = vec![];
    if terms.advection_term {
        rhs.push("- (u*dx(u) + w*uz)");
    }
    let eq3_hm = Equation::new("horizontal momentum", lhs, rhs);

    // Vertical momentum
    let mut lhs = vec!["dt(w)"];
    if terms.viscous_term {
        lhs.push("- SL*NU*dx(dx(w))");
        lhs.push("- NU*dz(wz)");
    }
    if terms.pressure_term {
        lhs.push("+ dz(p)");
    }
    lhs.push("+ RF*w");
    if terms.buoyancy_term {
        lhs.push("- b");
    }
    let mut rhs = vec![];
    if terms.advection_term {
        rhs.push("- (u*dx(w) + w*wz)");
    }
    let eq4_vm = Equation::new("vertical momentum", lhs, rhs);

    // Required for solving differential equations in Chebyshev dimension
    let eq5_bz = Equation::new("bz", vec!["bz", "- dz(b)"], vec![]);
    let eq6_uz = Equation::new("uz", vec!["uz", "- dz(u)"], vec![]);
    let eq7_wz = Equation::new("wz", vec!["wz", "- dz(w)"], vec![]);

    vec![eq1_mc, eq2_es, eq3_hm, eq4_vm, eq5_bz, eq6_uz, eq7_wz]
}
