//! Free-vibration (undamped, unloaded) eigenanalysis.

use crate::config::Config;
use crate::elements::{Joint, Member};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;
use crate::{assembler, math};
use crate::results::{ModalSolution, VibrationMode};

use super::expand_mode_shape;

/// Solve the generalised eigenproblem `K_ff phi = omega^2 M_ff phi`
/// for natural frequencies and mode shapes. Loads and
/// `config` are accepted for signature symmetry with the other analysis
/// entry points but unused — free vibration is independent of applied
/// load and has no iterative/sampling knobs.
pub fn solve(
    joints: &[Joint],
    members: &[Member],
    _loads: &[Load],
    _config: &Config,
) -> FrameResult<ModalSolution> {
    let prepared = super::prepare(joints, members)?;
    let mass = assembler::assemble_mass(members, &prepared.geoms, &prepared.dof);

    let k_part = assembler::partition_matrix(&prepared.k, &prepared.dof);
    let m_part = assembler::partition_matrix(&mass, &prepared.dof);

    let pairs = math::generalized_eigen_smallest_positive(&k_part.ff, &m_part.ff)
        .ok_or_else(|| FrameError::EigenSolverFailed("modal: K_ff is not symmetric positive-definite".into()))?;

    let modes = pairs
        .into_iter()
        .map(|(omega_sq, mut phi)| {
            math::sign_normalize(&mut phi);
            VibrationMode {
                frequency_hz: omega_sq.sqrt() / (2.0 * std::f64::consts::PI),
                shape: expand_mode_shape(joints, &prepared.dof, &phi),
            }
        })
        .collect();

    Ok(ModalSolution { modes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SupportCode;

    #[test]
    fn fixed_fixed_beam_lowest_mode_is_positive_and_finite() {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
            Joint::new(2, 5.0, 0.0, SupportCode::FixedSupport),
        ];
        let members = std::vec![Member::new(1, 1, 2, 0.09, 2e8, 6.75e-4, 2400.0)];
        let config = Config::default();

        let sol = solve(&joints, &members, &[], &config).unwrap();
        assert!(!sol.modes.is_empty());
        assert!(sol.modes[0].frequency_hz > 0.0);
        assert!(sol.modes[0].frequency_hz.is_finite());

        for pair in sol.modes.windows(2) {
            assert!(pair[0].frequency_hz <= pair[1].frequency_hz);
        }
    }

    #[test]
    fn mode_shapes_are_zero_at_fixed_supports() {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
            Joint::new(2, 5.0, 0.0, SupportCode::FixedSupport),
        ];
        let members = std::vec![Member::new(1, 1, 2, 0.09, 2e8, 6.75e-4, 2400.0)];
        let config = Config::default();

        let sol = solve(&joints, &members, &[], &config).unwrap();
        for mode in &sol.modes {
            let support = mode.shape.iter().find(|d| d.joint_number == 1).unwrap();
            assert_eq!(support.u, 0.0);
            assert_eq!(support.v, 0.0);
            assert_eq!(support.theta, 0.0);
        }
    }
}
