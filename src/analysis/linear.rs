//! First-order (linear elastic) response.

use crate::assembler::{self, PartitionedMatrix};
use crate::config::Config;
use crate::dof::DofMap;
use crate::elements::{Joint, Member};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;
use crate::math;
use crate::results::LinearSolution;

use super::{member_distributions, member_end_forces, node_displacements, reactions};

/// Solve the first-order linear elastic response of a planar frame:
///
/// 1. Build `K_ff`, `K_fc`, `K_cf`, `K_cc` and `F_f`, `F_c`.
/// 2. Solve `K_ff u_f = F_f` (`u_c = 0` — no support settlement
///    modelled).
/// 3. Compute `R = K_cf u_f - F_c`.
/// 4. Reconstruct per-member local end forces and sampled internal-force
///    distributions.
///
/// A singular `K_ff` maps to [`FrameError::UnderConstrained`]; non-finite
/// or otherwise invalid geometry is caught eagerly by [`crate::model::Model`]
/// construction, before this function is ever called.
pub fn solve(
    joints: &[Joint],
    members: &[Member],
    loads: &[Load],
    config: &Config,
) -> FrameResult<LinearSolution> {
    let prepared = super::prepare(joints, members)?;
    let f = assembler::assemble_load_vector(members, &prepared.geoms, loads, &prepared.dof);

    let u = solve_displacement(&prepared.k, &f, &prepared.dof)?;
    let r_c = compute_reactions(&prepared.k, &f, &u, &prepared.dof);

    let end_forces = member_end_forces(members, &prepared.geoms, loads, &prepared.dof, &u);
    let member_forces = member_distributions(members, &prepared.geoms, loads, &end_forces, config);

    Ok(LinearSolution {
        displacements: node_displacements(joints, &prepared.dof, &u),
        reactions: reactions(joints, &prepared.dof, &r_c),
        member_forces,
    })
}

/// Solve `K_ff u_f = F_f` (`u_c = 0`) and return the full displacement
/// vector (free block solved, constrained block zero). Shared by linear
/// and second-order analysis, which differ only in which effective
/// stiffness matrix `k` they pass in.
pub(crate) fn solve_displacement(k: &math::Mat, f: &math::Vec, dof: &DofMap) -> FrameResult<math::Vec> {
    let PartitionedMatrix { ff, .. } = assembler::partition_matrix(k, dof);
    let (f_f, _f_c) = assembler::partition_vector(f, dof);

    let u_f = math::solve_linear_system(&ff, &f_f).ok_or(FrameError::UnderConstrained)?;

    let mut u = math::Vec::zeros(dof.total());
    for i in 0..dof.n_free {
        u[i] = u_f[i];
    }
    Ok(u)
}

/// `R_c = K_cf u_f - F_c` (the `K_cc u_c` term vanishes since `u_c = 0`).
pub(crate) fn compute_reactions(k: &math::Mat, f: &math::Vec, u: &math::Vec, dof: &DofMap) -> math::Vec {
    let PartitionedMatrix { cf, .. } = assembler::partition_matrix(k, dof);
    let (_f_f, f_c) = assembler::partition_vector(f, dof);
    let u_f = u.rows(0, dof.n_free).into_owned();
    &cf * &u_f - f_c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SupportCode;
    use crate::loads::Pl;
    use approx::assert_relative_eq;

    #[test]
    fn cantilever_tip_load_matches_closed_form_deflection() {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
            Joint::new(2, 10.0, 0.0, SupportCode::RigidJoint),
        ];
        let members = std::vec![Member::new(1, 1, 2, 0.01, 2e11, 8e-6, 0.0)];
        let loads = std::vec![Load::Pl(Pl::new(1, -1000.0, 10.0))];
        let config = Config::new(100);

        let sol = solve(&joints, &members, &loads, &config).unwrap();
        let tip = sol.displacements.iter().find(|d| d.joint_number == 2).unwrap();

        // Cantilever tip deflection: P L^3 / (3 E I).
        let p = -1000.0_f64;
        let l = 10.0_f64;
        let e = 2e11_f64;
        let i = 8e-6_f64;
        let expected = p * l.powi(3) / (3.0 * e * i);
        assert_relative_eq!(tip.v, expected, epsilon = 1e-6, max_relative = 1e-6);
    }

    #[test]
    fn singular_model_reports_under_constrained() {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::RigidJoint),
            Joint::new(2, 10.0, 0.0, SupportCode::RigidJoint),
        ];
        let members = std::vec![Member::new(1, 1, 2, 0.01, 2e11, 8e-6, 0.0)];
        let config = Config::default();

        let err = solve(&joints, &members, &[], &config).unwrap_err();
        assert!(matches!(err, FrameError::UnderConstrained));
    }

    #[test]
    fn reactions_balance_applied_load() {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
            Joint::new(2, 10.0, 0.0, SupportCode::RigidJoint),
        ];
        let members = std::vec![Member::new(1, 1, 2, 0.01, 2e11, 8e-6, 0.0)];
        let loads = std::vec![Load::Pl(Pl::new(1, -1000.0, 10.0))];
        let config = Config::default();

        let sol = solve(&joints, &members, &loads, &config).unwrap();
        let r = sol.reactions.iter().find(|r| r.joint_number == 1).unwrap();
        assert_relative_eq!(r.fy, 1000.0, epsilon = 1e-6);
    }
}
