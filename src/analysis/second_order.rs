//! Second-order (P-Delta) response via geometric-stiffness fixed-point
//! iteration.

use crate::assembler::{self, PartitionedMatrix};
use crate::config::Config;
use crate::elements::{Joint, Member};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;
use crate::math;
use crate::results::SecondOrderSolution;

use super::{axial_forces, linear, member_distributions, member_end_forces, node_displacements, reactions};

/// Solve the second-order response by fixed-point iteration on member
/// axial force:
///
/// 1. Baseline linear solve gives `N^0`.
/// 2. Assemble `Kg(N^k)` and solve `(K - Kg(N^k))_ff u_f = F_f`, the
///    updated effective tangent stiffness.
/// 3. Recover `N^{k+1}` from the resulting member end forces.
/// 4. Repeat until the relative infinity-norm change in `N` falls below
///    `config.tolerance`, or `config.max_iterations` is exhausted.
///
/// Non-convergence is not fatal: the last iterate is returned with
/// `converged = false`. A singular `(K - Kg)_ff` — the axial force has
/// reached or passed the member's buckling load within the iteration —
/// is fatal and reported as [`FrameError::BucklingReached`].
pub fn solve(
    joints: &[Joint],
    members: &[Member],
    loads: &[Load],
    config: &Config,
) -> FrameResult<SecondOrderSolution> {
    let prepared = super::prepare(joints, members)?;
    let f = assembler::assemble_load_vector(members, &prepared.geoms, loads, &prepared.dof);

    let u0 = linear::solve_displacement(&prepared.k, &f, &prepared.dof)?;
    let end_forces0 = member_end_forces(members, &prepared.geoms, loads, &prepared.dof, &u0);
    let mut n = axial_forces(&end_forces0);

    let mut u = u0;
    let mut converged = false;
    let mut iterations = 0;

    for iter in 0..config.max_iterations {
        iterations = iter + 1;

        let kg = assembler::assemble_geometric_stiffness(members, &prepared.geoms, &prepared.dof, &n);
        let k_eff = &prepared.k - &kg;

        let PartitionedMatrix { ff, .. } = assembler::partition_matrix(&k_eff, &prepared.dof);
        let (f_f, _f_c) = assembler::partition_vector(&f, &prepared.dof);
        let u_f = match math::solve_linear_system(&ff, &f_f) {
            Some(u_f) => u_f,
            None => {
                log::warn!(
                    "second-order iteration {}: effective stiffness singular, buckling load reached",
                    iterations
                );
                return Err(FrameError::BucklingReached);
            }
        };

        let mut u_next = math::Vec::zeros(prepared.dof.total());
        for i in 0..prepared.dof.n_free {
            u_next[i] = u_f[i];
        }

        let end_forces = member_end_forces(members, &prepared.geoms, loads, &prepared.dof, &u_next);
        let n_next = axial_forces(&end_forces);

        let mut max_diff = 0.0_f64;
        let mut max_abs = 0.0_f64;
        for (beam, &value) in &n_next {
            let prev = n.get(beam).copied().unwrap_or(0.0);
            max_diff = max_diff.max((value - prev).abs());
            max_abs = max_abs.max(value.abs());
        }
        let residual = max_diff / max_abs.max(1.0);
        log::debug!(
            "second-order iteration {}: relative residual {:.3e}",
            iterations,
            residual
        );

        u = u_next;
        n = n_next;

        if residual < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "second-order iteration did not converge after {} iterations",
            iterations
        );
    }

    let kg = assembler::assemble_geometric_stiffness(members, &prepared.geoms, &prepared.dof, &n);
    let k_eff = &prepared.k - &kg;
    let r_c = linear::compute_reactions(&k_eff, &f, &u, &prepared.dof);

    let end_forces = member_end_forces(members, &prepared.geoms, loads, &prepared.dof, &u);
    let member_forces = member_distributions(members, &prepared.geoms, loads, &end_forces, config);

    Ok(SecondOrderSolution {
        displacements: node_displacements(joints, &prepared.dof, &u),
        reactions: reactions(joints, &prepared.dof, &r_c),
        member_forces,
        converged,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SupportCode;
    use crate::loads::Pl;

    /// A two-member L-frame (fixed column + cantilevered beam) develops
    /// member axial force through frame action, unlike a single straight
    /// member under a transverse load alone.
    fn l_frame() -> (std::vec::Vec<Joint>, std::vec::Vec<Member>) {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
            Joint::new(2, 0.0, 4.0, SupportCode::RigidJoint),
            Joint::new(3, 4.0, 4.0, SupportCode::RigidJoint),
        ];
        let members = std::vec![
            Member::new(1, 1, 2, 0.01, 2e11, 8e-5, 0.0),
            Member::new(2, 2, 3, 0.01, 2e11, 8e-5, 0.0),
        ];
        (joints, members)
    }

    #[test]
    fn converges_for_a_lightly_loaded_l_frame() {
        let (joints, members) = l_frame();
        let loads = std::vec![Load::Pl(Pl::new(2, -20000.0, 4.0))];
        let config = Config::default();

        let sol = solve(&joints, &members, &loads, &config).unwrap();
        assert!(sol.converged);
        assert!(sol.iterations >= 1);
    }

    #[test]
    fn second_order_amplifies_beyond_linear_for_l_frame_sway() {
        let (joints, members) = l_frame();
        let loads = std::vec![Load::Pl(Pl::new(2, -80000.0, 4.0))];
        let config = Config::default();

        let linear_sol = super::super::linear::solve(&joints, &members, &loads, &config).unwrap();
        let second_sol = solve(&joints, &members, &loads, &config).unwrap();

        let linear_tip = linear_sol.displacements.iter().find(|d| d.joint_number == 3).unwrap();
        let second_tip = second_sol.displacements.iter().find(|d| d.joint_number == 3).unwrap();
        assert!(second_tip.v.abs() >= linear_tip.v.abs());
    }
}
