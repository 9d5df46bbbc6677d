//! Elastic (linear) buckling eigenanalysis.

use crate::config::Config;
use crate::elements::{Joint, Member};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;
use crate::{assembler, math};
use crate::results::{BucklingSolution, Mode};

use super::{axial_forces, expand_mode_shape, linear, member_end_forces};

/// Solve the elastic buckling eigenproblem `K_ff phi = lambda Kg,ff(N0)
/// phi`, where `N0` is the member axial-force state from a
/// baseline linear analysis under the given loads.
///
/// Because the engine's second-order tangent stiffness is `K - Kg(N)`,
/// a member buckles exactly when its actual axial force `N` equals its
/// geometric-stiffness reference force such that `K = Kg(N)`. Writing
/// `N = lambda * N0` makes `lambda` the load factor
/// by which the baseline state must be scaled to reach that point, which
/// is exactly the eigenvalue of `K_ff phi = lambda Kg,ff(N0) phi` — no
/// sign flip on `N0` is needed; a lowest eigenvalue `lambda > 0` under a
/// compressive baseline state is the critical load factor.
///
/// Returns every buckling mode with a positive load factor, ascending;
/// `modes[0]` is the critical mode. A `Kg,ff(N0)` with no positive
/// eigenvalues (e.g. an unloaded or all-tension baseline state) yields an
/// empty mode list rather than an error.
pub fn solve(joints: &[Joint], members: &[Member], loads: &[Load], _config: &Config) -> FrameResult<BucklingSolution> {
    let prepared = super::prepare(joints, members)?;
    let f = assembler::assemble_load_vector(members, &prepared.geoms, loads, &prepared.dof);

    let u0 = linear::solve_displacement(&prepared.k, &f, &prepared.dof)?;
    let end_forces0 = member_end_forces(members, &prepared.geoms, loads, &prepared.dof, &u0);
    let n0 = axial_forces(&end_forces0);

    let kg = assembler::assemble_geometric_stiffness(members, &prepared.geoms, &prepared.dof, &n0);

    let PartitionedMatrices { k_ff, kg_ff } = partition(&prepared.k, &kg, &prepared.dof);

    let pairs = math::generalized_eigen_smallest_positive(&k_ff, &kg_ff)
        .ok_or_else(|| FrameError::EigenSolverFailed("buckling: K_ff is not symmetric positive-definite".into()))?;

    let modes = pairs
        .into_iter()
        .map(|(lambda, mut phi)| {
            math::sign_normalize(&mut phi);
            Mode {
                eigenvalue: lambda,
                shape: expand_mode_shape(joints, &prepared.dof, &phi),
            }
        })
        .collect();

    Ok(BucklingSolution { modes })
}

struct PartitionedMatrices {
    k_ff: math::Mat,
    kg_ff: math::Mat,
}

fn partition(k: &math::Mat, kg: &math::Mat, dof: &crate::dof::DofMap) -> PartitionedMatrices {
    let k_part = assembler::partition_matrix(k, dof);
    let kg_part = assembler::partition_matrix(kg, dof);
    PartitionedMatrices {
        k_ff: k_part.ff,
        kg_ff: kg_part.ff,
    }
}
