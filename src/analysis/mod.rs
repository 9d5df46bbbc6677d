//! Analysis entry points: first-order linear response, second-order
//! (P-Delta) response, elastic buckling eigenanalysis, and free-
//! vibration eigenanalysis.
//!
//! Every entry point is a pure function of `(joints, members, loads,
//! config)` producing a fresh result: no interior
//! mutability, no suspension points, no reading of a hidden global
//! configuration.

pub mod buckling;
pub mod linear;
pub mod modal;
pub mod second_order;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::distributions;
use crate::dof::DofMap;
use crate::elements::{Joint, Member, MemberGeometry};
use crate::error::FrameResult;
use crate::loads::Load;
use crate::math::{self, Mat, Vec6};
use crate::results::{MemberForces, NodeDisplacement, Reactions};

/// Which structural analysis produced a result. Useful for a caller
/// dispatching over results; adds a first-class `Buckling` variant
/// alongside the more familiar `Linear`/`PDelta`/`Modal` split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisType {
    Linear,
    SecondOrder,
    Buckling,
    Modal,
}

/// Everything derived once from `(joints, members)` that every analysis
/// entry point needs: validated geometry, DOF numbering, and the
/// elastic stiffness matrix (independent of axial force).
pub(crate) struct Prepared {
    pub geoms: HashMap<i64, MemberGeometry>,
    pub dof: DofMap,
    pub k: Mat,
}

pub(crate) fn prepare(joints: &[Joint], members: &[Member]) -> FrameResult<Prepared> {
    let geoms = crate::assembler::member_geometries(joints, members)?;
    let dof = DofMap::build(joints);
    let k = crate::assembler::assemble_stiffness(members, &geoms, &dof);
    Ok(Prepared { geoms, dof, k })
}

/// Recover every member's local end-force vector `[N1, V1, M1, N2, V2,
/// M2]` and local end-displacement vector from a full displacement
/// vector `u`: `d_local = T d_global`,
/// `f_local = k_e d_local - f_eq,local`.
pub(crate) fn member_end_forces(
    members: &[Member],
    geoms: &HashMap<i64, MemberGeometry>,
    loads: &[Load],
    dof: &DofMap,
    u: &math::Vec,
) -> HashMap<i64, (Vec6, Vec6)> {
    let mut out = HashMap::with_capacity(members.len());
    for m in members {
        let g = &geoms[&m.beam_number];
        let s = dof.joint_dofs(m.start);
        let e = dof.joint_dofs(m.end);
        let d_global = Vec6::new(u[s[0]], u[s[1]], u[s[2]], u[e[0]], u[e[1]], u[e[2]]);
        let t = math::rotation_matrix(g.c, g.s);
        let d_local = t * d_global;

        let ke = math::local_elastic_stiffness(m.e, m.area, m.i, g.length);
        let mut f_eq_local = Vec6::zeros();
        for load in loads.iter().filter(|l| l.beam_number() == m.beam_number) {
            f_eq_local += load.equivalent_nodal_forces(g.length);
        }
        let f_local = ke * d_local - f_eq_local;
        out.insert(m.beam_number, (f_local, d_local));
    }
    out
}

/// Build per-member sampled internal-force/deflection distributions
/// from the end-force/displacement map produced by
/// [`member_end_forces`].
pub(crate) fn member_distributions(
    members: &[Member],
    geoms: &HashMap<i64, MemberGeometry>,
    loads: &[Load],
    end_forces: &HashMap<i64, (Vec6, Vec6)>,
    config: &Config,
) -> std::vec::Vec<MemberForces> {
    members
        .iter()
        .map(|m| {
            let g = &geoms[&m.beam_number];
            let (f_local, d_local) = end_forces[&m.beam_number];
            let member_loads: std::vec::Vec<&Load> =
                loads.iter().filter(|l| l.beam_number() == m.beam_number).collect();
            distributions::member_forces(m.beam_number, g.length, f_local, d_local, &member_loads, config)
        })
        .collect()
}

/// Expand joint displacements from the full DOF vector into
/// [`NodeDisplacement`] records, one per joint, in joint input order.
pub(crate) fn node_displacements(joints: &[Joint], dof: &DofMap, u: &math::Vec) -> std::vec::Vec<NodeDisplacement> {
    joints
        .iter()
        .map(|j| {
            let d = dof.joint_dofs(j.number);
            NodeDisplacement {
                joint_number: j.number,
                u: u[d[0]],
                v: u[d[1]],
                theta: u[d[2]],
            }
        })
        .collect()
}

/// Expand constrained-DOF reactions into [`Reactions`] records, one per
/// restrained joint, in joint input order.
pub(crate) fn reactions(joints: &[Joint], dof: &DofMap, r_c: &math::Vec) -> std::vec::Vec<Reactions> {
    joints
        .iter()
        .filter(|j| j.support.num_restrained() > 0)
        .map(|j| {
            let d = dof.joint_dofs(j.number);
            let get = |global: usize| -> f64 {
                if dof.is_free(global) {
                    0.0
                } else {
                    r_c[global - dof.n_free]
                }
            };
            Reactions {
                joint_number: j.number,
                fx: get(d[0]),
                fy: get(d[1]),
                mz: get(d[2]),
            }
        })
        .collect()
}

/// Extract member normal (axial) force, tension positive, from each
/// member's local end-force vector: `N = -f_local[0]`. This is what
/// drives the geometric stiffness in second-order and buckling analysis.
pub(crate) fn axial_forces(end_forces: &HashMap<i64, (Vec6, Vec6)>) -> HashMap<i64, f64> {
    end_forces.iter().map(|(&beam, (f, _))| (beam, -f[0])).collect()
}

/// Expand a free-DOF eigenvector into [`NodeDisplacement`] records
/// across every joint, in input order, zero at constrained DOFs.
pub(crate) fn expand_mode_shape(
    joints: &[Joint],
    dof: &DofMap,
    phi_f: &math::Vec,
) -> std::vec::Vec<NodeDisplacement> {
    joints
        .iter()
        .map(|j| {
            let d = dof.joint_dofs(j.number);
            let get = |global: usize| -> f64 {
                if dof.is_free(global) {
                    phi_f[global]
                } else {
                    0.0
                }
            };
            NodeDisplacement {
                joint_number: j.number,
                u: get(d[0]),
                v: get(d[1]),
                theta: get(d[2]),
            }
        })
        .collect()
}
