//! Concentrated transverse load on a member.

use serde::{Deserialize, Serialize};

use super::validate_station;
use crate::error::FrameResult;
use crate::math::Vec6;

/// A concentrated transverse load `magnitude` at distance `d` from the
/// member's start joint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pl {
    pub beam_number: i64,
    pub magnitude: f64,
    pub d: f64,
}

impl Pl {
    pub fn new(beam_number: i64, magnitude: f64, d: f64) -> Self {
        Self {
            beam_number,
            magnitude,
            d,
        }
    }

    pub fn validate(&self, length: f64) -> FrameResult<()> {
        validate_station(self.d, length, self.beam_number, "point load")
    }

    /// Work-equivalent nodal load vector for a point load on a
    /// fixed-fixed beam, closed form - no discretisation needed. Ready
    /// to add directly into the global load vector.
    pub fn equivalent_nodal_forces(&self, length: f64) -> Vec6 {
        let p = self.magnitude;
        let a = self.d;
        let b = length - a;
        let l2 = length * length;
        let l3 = l2 * length;

        let v1 = p * b * b * (3.0 * a + b) / l3;
        let m1 = p * a * b * b / l2;
        let v2 = p * a * a * (a + 3.0 * b) / l3;
        let m2 = -p * a * a * b / l2;

        Vec6::new(0.0, v1, m1, 0.0, v2, m2)
    }

    /// Shear jump of `-magnitude` once the station passes `d`.
    pub fn shear_contribution(&self, x: f64) -> f64 {
        if x > self.d {
            -self.magnitude
        } else {
            0.0
        }
    }

    /// Moment contribution `-magnitude * (x - d)` once the station
    /// passes `d`.
    pub fn moment_contribution(&self, x: f64) -> f64 {
        if x > self.d {
            -self.magnitude * (x - self.d)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn midspan_point_load_symmetric_reactions() {
        let pl = Pl::new(1, 100.0, 2.5);
        let f = pl.equivalent_nodal_forces(5.0);
        // Midspan point load on a fixed-fixed beam: V1 = V2 = P/2,
        // M1 = M2 in magnitude = P*L/8.
        assert_relative_eq!(f[1], 50.0, epsilon = 1e-9);
        assert_relative_eq!(f[4], 50.0, epsilon = 1e-9);
        assert_relative_eq!(f[2].abs(), 100.0 * 5.0 / 8.0, epsilon = 1e-9);
        assert_relative_eq!(f[2].abs(), f[5].abs(), epsilon = 1e-9);
    }

    #[test]
    fn shear_contribution_jumps_at_load_point() {
        let pl = Pl::new(1, 10.0, 2.0);
        assert_relative_eq!(pl.shear_contribution(1.0), 0.0);
        assert_relative_eq!(pl.shear_contribution(3.0), -10.0);
    }

    #[test]
    fn validate_rejects_out_of_span() {
        let pl = Pl::new(1, 10.0, 6.0);
        assert!(pl.validate(5.0).is_err());
    }
}
