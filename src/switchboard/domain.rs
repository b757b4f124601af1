//! Simulated and displayed domain
//!
//! The upper left corner of the display domain is always (0, 0).
//! The simulated domain extends `dis_buff_x` to the left and
//! `dis_buff_z` above it. A damping layer is appended below the
//! simulated domain.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Domain settings of the switchboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Domain {
    /// Width of simulated domain \[m\]
    pub l_x: f64,
    /// Height of simulated domain without damping layer \[m\]
    pub l_z: f64,
    /// Display exactly the simulated domain
    pub dis_eq_sim: bool,
    /// Width of displayed domain \[m\]
    pub l_x_dis: f64,
    /// Height of displayed domain \[m\]
    pub l_z_dis: f64,
    /// Simulated domain left of display domain \[m\]
    pub dis_buff_x: f64,
    /// Simulated domain above display domain \[m\]
    pub dis_buff_z: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            l_x: 1.0,
            l_z: 1.0,
            dis_eq_sim: false,
            l_x_dis: 0.5,
            l_z_dis: 0.5,
            dis_buff_x: 0.0,
            dis_buff_z: 0.0,
        }
    }
}

impl Domain {
    /// Corners of display and simulated domain, before any
    /// damping layer is appended
    ///
    /// # Errors
    /// A simulated or displayed length is not positive
    pub fn derive(&self) -> Result<Geometry> {
        let (l_x_dis, l_z_dis, dis_buff_x, dis_buff_z) = if self.dis_eq_sim {
            (self.l_x, self.l_z, 0., 0.)
        } else {
            (self.l_x_dis, self.l_z_dis, self.dis_buff_x, self.dis_buff_z)
        };
        for (what, value) in [
            ("l_x", self.l_x),
            ("l_z", self.l_z),
            ("l_x_dis", l_x_dis),
            ("l_z_dis", l_z_dis),
        ] {
            if !(value > 0. && value.is_finite()) {
                return Err(Error::domain(what, value));
            }
        }
        let (x_0, z_0) = (0., 0.);
        let x_sim_0 = x_0 - dis_buff_x;
        let z_sim_0 = z_0 + dis_buff_z;
        let x_sim_f = x_sim_0 + self.l_x;
        let z_sim_f = z_sim_0 - self.l_z;
        if !self.dis_eq_sim && (l_x_dis > self.l_x || l_z_dis > self.l_z) {
            log::warn!(
                "Display domain ({}, {}) exceeds simulated domain ({}, {})",
                l_x_dis,
                l_z_dis,
                self.l_x,
                self.l_z
            );
        }
        Ok(Geometry {
            l_x: self.l_x,
            l_z: self.l_z,
            l_x_dis,
            l_z_dis,
            dis_buff_x,
            dis_buff_z,
            dis_eq_sim: self.dis_eq_sim,
            x_0,
            z_0,
            x_sim_0,
            z_sim_0,
            x_sim_f,
            z_sim_f,
            abs_div: z_sim_f,
        })
    }
}

/// Derived corners of the domain
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Width of simulated domain \[m\]
    pub l_x: f64,
    /// Height of simulated domain, including damping layer \[m\]
    pub l_z: f64,
    /// Width of displayed domain \[m\]
    pub l_x_dis: f64,
    /// Height of displayed domain \[m\]
    pub l_z_dis: f64,
    /// Simulated domain left of display domain \[m\]
    pub dis_buff_x: f64,
    /// Simulated domain above display domain \[m\]
    pub dis_buff_z: f64,
    /// Display equals simulated domain
    pub dis_eq_sim: bool,
    /// Left edge of display domain
    pub x_0: f64,
    /// Top edge of display domain
    pub z_0: f64,
    /// Left edge of simulated domain
    pub x_sim_0: f64,
    /// Top edge of simulated domain
    pub z_sim_0: f64,
    /// Right edge of simulated domain
    pub x_sim_f: f64,
    /// Bottom edge of simulated domain
    pub z_sim_f: f64,
    /// Dividing line between wave field and damping layer
    pub abs_div: f64,
}

impl Geometry {
    /// Append a damping layer of `thickness` at the bottom
    pub fn extend_bottom(&mut self, thickness: f64) {
        self.l_z += thickness;
        self.z_sim_f = self.abs_div - thickness;
        if self.dis_eq_sim {
            self.l_z_dis = self.l_z;
        }
    }

    /// Interval of the periodic direction
    pub fn x_interval(&self) -> (f64, f64) {
        (self.x_sim_0, self.x_sim_f)
    }

    /// Interval of the bounded direction, bottom to top
    pub fn z_interval(&self) -> (f64, f64) {
        (self.z_sim_f, self.z_sim_0)
    }

    /// Horizontal display limits
    pub fn x_limits(&self) -> (f64, f64) {
        (self.x_0, self.x_0 + self.l_x_dis)
    }

    /// Vertical display limits, bottom to top
    pub fn z_limits(&self) -> (f64, f64) {
        (self.z_0 - self.l_z_dis, self.z_0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(result: f64, expected: f64) {
        let dif = (result - expected).abs();
        if dif > 1e-12 {
            panic!("Large difference of values, got {} expected {}.", result, expected)
        }
    }

    #[test]
    fn test_derive_with_buffer() {
        let domain = Domain {
            l_x: 1.5,
            l_z: 1.0,
            dis_buff_x: 0.3,
            dis_buff_z: 0.3,
            ..Domain::default()
        };
        let geo = domain.derive().unwrap();
        approx_eq(geo.x_sim_0, -0.3);
        approx_eq(geo.z_sim_0, 0.3);
        approx_eq(geo.x_sim_f, 1.2);
        approx_eq(geo.z_sim_f, -0.7);
        approx_eq(geo.abs_div, -0.7);
        assert_eq!(geo.x_limits(), (0., 0.5));
        assert_eq!(geo.z_limits(), (-0.5, 0.));
    }

    #[test]
    fn test_dis_eq_sim() {
        let domain = Domain {
            dis_eq_sim: true,
            dis_buff_x: 0.3,
            ..Domain::default()
        };
        let mut geo = domain.derive().unwrap();
        approx_eq(geo.x_sim_0, 0.);
        approx_eq(geo.l_x_dis, 1.);
        geo.extend_bottom(0.25);
        approx_eq(geo.l_z, 1.25);
        approx_eq(geo.l_z_dis, 1.25);
        approx_eq(geo.z_sim_f, -1.25);
        approx_eq(geo.abs_div, -1.);
        assert_eq!(geo.z_interval(), (-1.25, 0.));
    }

    #[test]
    fn test_extend_keeps_display() {
        let mut geo = Domain::default().derive().unwrap();
        geo.extend_bottom(0.2);
        approx_eq(geo.l_z_dis, 0.5);
        approx_eq(geo.z_sim_f, -1.2);
    }

    #[test]
    fn test_non_positive_display_size() {
        let domain = Domain {
            l_z_dis: 0.,
            ..Domain::default()
        };
        assert!(matches!(domain.derive(), Err(Error::Domain { .. })));
        let domain = Domain {
            l_x: -1.,
            ..Domain::default()
        };
        assert!(domain.derive().is_err());
        // displayed size is ignored when it equals the simulated domain
        let domain = Domain {
            dis_eq_sim: true,
            l_z_dis: 0.,
            ..Domain::default()
        };
        assert!(domain.derive().is_ok());
    }
}
