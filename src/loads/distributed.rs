//! Uniformly distributed transverse load on a member, possibly clipped
//! to a sub-span `[d1, d2]`.

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};
use crate::math::Vec6;

/// A uniformly distributed transverse load of intensity `magnitude`
/// (force per unit length) acting over `[d1, d2]` measured from the
/// member's start joint. Full-span loads set `d1 = 0, d2 = length`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Udl {
    pub beam_number: i64,
    pub magnitude: f64,
    pub d1: f64,
    pub d2: f64,
}

impl Udl {
    pub fn new(beam_number: i64, magnitude: f64, d1: f64, d2: f64) -> Self {
        Self {
            beam_number,
            magnitude,
            d1,
            d2,
        }
    }

    pub fn validate(&self, length: f64) -> FrameResult<()> {
        if !self.d1.is_finite() || !self.d2.is_finite() || self.d1 < 0.0 || self.d2 > length || self.d1 >= self.d2 {
            return Err(FrameError::InvalidLoad(format!(
                "distributed load [{}, {}] on member {} is not a valid sub-span of [0, {}]",
                self.d1, self.d2, self.beam_number, length
            )));
        }
        Ok(())
    }

    /// Work-equivalent nodal load vector for a UDL clipped to `[d1, d2]`,
    /// obtained by integrating the point-load work-equivalent load
    /// formulas over the loaded sub-span in closed form. Ready to add
    /// directly into the global load vector.
    pub fn equivalent_nodal_forces(&self, length: f64) -> Vec6 {
        let w = self.magnitude;
        let l = length;
        let l2 = l * l;
        let l3 = l2 * l;

        let f_v1 = |x: f64| l3 * x - l * x.powi(3) + x.powi(4) / 2.0;
        let f_m1 = |x: f64| l2 * x * x / 2.0 - (2.0 * l / 3.0) * x.powi(3) + x.powi(4) / 4.0;
        let f_v2 = |x: f64| l * x.powi(3) - x.powi(4) / 2.0;
        let f_m2 = |x: f64| l * x.powi(3) / 3.0 - x.powi(4) / 4.0;

        let v1_total = (w / l3) * (f_v1(self.d2) - f_v1(self.d1));
        let m1_total = (w / l2) * (f_m1(self.d2) - f_m1(self.d1));
        let v2_total = (w / l3) * (f_v2(self.d2) - f_v2(self.d1));
        let m2_total = (w / l2) * (f_m2(self.d2) - f_m2(self.d1));

        Vec6::new(0.0, v1_total, m1_total, 0.0, v2_total, -m2_total)
    }

    /// Shear contribution: `-magnitude` times however much of the span
    /// up to `x` is loaded.
    pub fn shear_contribution(&self, x: f64) -> f64 {
        let covered = (x - self.d1).clamp(0.0, self.d2 - self.d1);
        -self.magnitude * covered
    }

    /// Moment contribution from the portion of the load already passed
    /// at station `x`.
    pub fn moment_contribution(&self, x: f64) -> f64 {
        if x <= self.d1 {
            return 0.0;
        }
        if x <= self.d2 {
            let a = x - self.d1;
            return -self.magnitude * a * a / 2.0;
        }
        let width = self.d2 - self.d1;
        let centroid = (self.d1 + self.d2) / 2.0;
        -self.magnitude * width * (x - centroid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_span_udl_matches_textbook_fixed_end_forces() {
        let u = Udl::new(1, 10.0, 0.0, 5.0);
        let f = u.equivalent_nodal_forces(5.0);
        assert_relative_eq!(f[1], 25.0, epsilon = 1e-9); // w*L/2
        assert_relative_eq!(f[4], 25.0, epsilon = 1e-9);
        assert_relative_eq!(f[2].abs(), 10.0 * 25.0 / 12.0, epsilon = 1e-9); // w*L^2/12
        assert_relative_eq!(f[2].abs(), f[5].abs(), epsilon = 1e-9);
    }

    #[test]
    fn static_equivalence_total_force_matches_applied_load() {
        let u = Udl::new(1, 4.0, 1.0, 3.0);
        let f = u.equivalent_nodal_forces(6.0);
        let total_applied = 4.0 * (3.0 - 1.0);
        assert_relative_eq!(f[1] + f[4], total_applied, epsilon = 1e-9);
    }

    #[test]
    fn validate_rejects_inverted_span() {
        let u = Udl::new(1, 1.0, 3.0, 1.0);
        assert!(u.validate(5.0).is_err());
    }

    #[test]
    fn moment_contribution_continuous_across_span_end() {
        let u = Udl::new(1, 2.0, 1.0, 3.0);
        let just_inside = u.moment_contribution(3.0 - 1e-9);
        let just_outside = u.moment_contribution(3.0 + 1e-9);
        assert_relative_eq!(just_inside, just_outside, epsilon = 1e-6);
    }
}
