//! Collection of boundary conditions
//!
//! The Fourier basis in x enforces periodic boundaries automatically.
//! Along z, `left` is the bottom and `right` the top of the domain.
//! The top is forced with the substitutions `fu`, `fw` and `fb`,
//! the bottom is a solid wall.
use std::fmt;

/// Boundary condition with optional mode condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryCondition {
    /// Condition, e.g. "left(u) = 0"
    pub expr: &'static str,
    /// Only applied for modes satisfying this, e.g. "(nx != 0)"
    pub condition: Option<&'static str>,
}

impl BoundaryCondition {
    const fn new(expr: &'static str) -> Self {
        Self {
            expr,
            condition: None,
        }
    }

    const fn with_condition(expr: &'static str, condition: &'static str) -> Self {
        Self {
            expr,
            condition: Some(condition),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.condition {
            Some(c) => write!(f, "{} if {}", self.expr, c),
            None => write!(f, "{}", self.expr),
        }
    }
}

/// Return boundary conditions of the forced problem.
///
/// The condition on w is redundant in the constant mode,
/// there the gauge pressure is set to zero instead.
pub fn boundary_conditions() -> Vec<BoundaryCondition> {
    vec![
        BoundaryCondition::new("left(u) = 0"),
        BoundaryCondition::new("right(u) = right(fu)"),
        BoundaryCondition::with_condition("left(w) = 0", "(nx != 0)"),
        BoundaryCondition::new("right(w) = right(fw)"),
        BoundaryCondition::new("left(b) = 0"),
        BoundaryCondition::new("right(b) = right(fb)"),
        BoundaryCondition::with_condition("left(p) = 0", "(nx == 0)"),
    ]
}
