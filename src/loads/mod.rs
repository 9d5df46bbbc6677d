//! Loads applied to members: point loads and uniformly distributed loads.

mod distributed;
mod point_load;

pub use distributed::Udl;
pub use point_load::Pl;

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};
use crate::math::Vec6;

/// A load applied to a single member, transverse to its local axis:
/// positive magnitude acts in the member's local +y direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Load {
    /// Concentrated transverse load at distance `d` from the start joint.
    Pl(Pl),
    /// Uniformly distributed transverse load over `[d1, d2]`.
    Udl(Udl),
}

impl Load {
    /// Beam number this load is attached to.
    pub fn beam_number(&self) -> i64 {
        match self {
            Load::Pl(p) => p.beam_number,
            Load::Udl(u) => u.beam_number,
        }
    }

    /// Validate the load's span position against the member's length.
    pub fn validate(&self, length: f64) -> FrameResult<()> {
        match self {
            Load::Pl(p) => p.validate(length),
            Load::Udl(u) => u.validate(length),
        }
    }

    /// Equivalent (fixed-end) nodal force vector in local coordinates,
    /// `[u1, v1, theta1, u2, v2, theta2]`.
    pub fn equivalent_nodal_forces(&self, length: f64) -> Vec6 {
        match self {
            Load::Pl(p) => p.equivalent_nodal_forces(length),
            Load::Udl(u) => u.equivalent_nodal_forces(length),
        }
    }

    /// This load's contribution to shear at station `x` along the member
    ///: the jump/ramp it introduces, *not* including the
    /// member's end shear.
    pub fn shear_contribution(&self, x: f64) -> f64 {
        match self {
            Load::Pl(p) => p.shear_contribution(x),
            Load::Udl(u) => u.shear_contribution(x),
        }
    }

    /// This load's contribution to bending moment at station `x`,
    /// not including the member's end moment/shear terms.
    pub fn moment_contribution(&self, x: f64) -> f64 {
        match self {
            Load::Pl(p) => p.moment_contribution(x),
            Load::Udl(u) => u.moment_contribution(x),
        }
    }
}

fn validate_station(d: f64, length: f64, beam_number: i64, label: &str) -> FrameResult<()> {
    if !d.is_finite() || d < 0.0 || d > length {
        return Err(FrameError::InvalidLoad(format!(
            "{label} at {d} on member {beam_number} lies outside [0, {length}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beam_number_dispatch() {
        let l = Load::Pl(Pl::new(1, 5.0, 2.0));
        assert_eq!(l.beam_number(), 1);
    }
}
