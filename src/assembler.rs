//! Global assembly: scatter-adds element matrices/loads into global
//! `K`, `Kg(N)`, `M`, `F`, and partitions them by [`DofMap`].

use std::collections::HashMap;

use crate::dof::DofMap;
use crate::elements::{Joint, Member, MemberGeometry};
use crate::loads::Load;
use crate::math::{self, Mat, Vec};

/// Geometry for every member, keyed by beam number, computed once from
/// the joint coordinates at model-preparation time.
pub fn member_geometries(
    joints: &[Joint],
    members: &[Member],
) -> crate::error::FrameResult<HashMap<i64, MemberGeometry>> {
    let by_number: HashMap<i64, &Joint> = joints.iter().map(|j| (j.number, j)).collect();
    let mut out = HashMap::with_capacity(members.len());
    for m in members {
        let start = by_number
            .get(&m.start)
            .ok_or(crate::error::FrameError::JointNotFound(m.start))?;
        let end = by_number
            .get(&m.end)
            .ok_or(crate::error::FrameError::JointNotFound(m.end))?;
        let geom = MemberGeometry::from_coords(start.coords(), end.coords(), m.beam_number)?;
        out.insert(m.beam_number, geom);
    }
    Ok(out)
}

/// The 6 global DOF indices touched by a member, in local DOF order
/// `[u1, v1, theta1, u2, v2, theta2]`.
fn member_dofs(member: &Member, dof: &DofMap) -> [usize; 6] {
    let s = dof.joint_dofs(member.start);
    let e = dof.joint_dofs(member.end);
    [s[0], s[1], s[2], e[0], e[1], e[2]]
}

fn scatter_add(target: &mut Mat, local: &math::Mat6, dofs: &[usize; 6]) {
    for r in 0..6 {
        for c in 0..6 {
            target[(dofs[r], dofs[c])] += local[(r, c)];
        }
    }
}

fn scatter_add_vec(target: &mut Vec, local: &math::Vec6, dofs: &[usize; 6]) {
    for r in 0..6 {
        target[dofs[r]] += local[r];
    }
}

/// Assemble the global elastic stiffness matrix.
pub fn assemble_stiffness(members: &[Member], geoms: &HashMap<i64, MemberGeometry>, dof: &DofMap) -> Mat {
    let n = dof.total();
    let mut k = Mat::zeros(n, n);
    for m in members {
        let g = &geoms[&m.beam_number];
        let ke = math::local_elastic_stiffness(m.e, m.area, m.i, g.length);
        let t = math::rotation_matrix(g.c, g.s);
        let ke_global = t.transpose() * ke * t;
        scatter_add(&mut k, &ke_global, &member_dofs(m, dof));
    }
    k
}

/// Assemble the global geometric stiffness matrix for the given member
/// normal forces (tension positive), keyed by beam number. Members
/// absent from `axial_forces` are treated as carrying zero axial force.
pub fn assemble_geometric_stiffness(
    members: &[Member],
    geoms: &HashMap<i64, MemberGeometry>,
    dof: &DofMap,
    axial_forces: &HashMap<i64, f64>,
) -> Mat {
    let n = dof.total();
    let mut kg = Mat::zeros(n, n);
    for m in members {
        let g = &geoms[&m.beam_number];
        let n_force = axial_forces.get(&m.beam_number).copied().unwrap_or(0.0);
        let kge = math::local_geometric_stiffness(n_force, g.length);
        let t = math::rotation_matrix(g.c, g.s);
        let kge_global = t.transpose() * kge * t;
        scatter_add(&mut kg, &kge_global, &member_dofs(m, dof));
    }
    kg
}

/// Assemble the global consistent mass matrix.
pub fn assemble_mass(members: &[Member], geoms: &HashMap<i64, MemberGeometry>, dof: &DofMap) -> Mat {
    let n = dof.total();
    let mut mass = Mat::zeros(n, n);
    for m in members {
        let g = &geoms[&m.beam_number];
        let me = math::local_consistent_mass(m.mass_per_length(), g.length);
        let t = math::rotation_matrix(g.c, g.s);
        let me_global = t.transpose() * me * t;
        scatter_add(&mut mass, &me_global, &member_dofs(m, dof));
    }
    mass
}

/// Assemble the global equivalent nodal force vector from member loads.
pub fn assemble_load_vector(
    members: &[Member],
    geoms: &HashMap<i64, MemberGeometry>,
    loads: &[Load],
    dof: &DofMap,
) -> Vec {
    let n = dof.total();
    let mut f = Vec::zeros(n);
    let members_by_number: HashMap<i64, &Member> = members.iter().map(|m| (m.beam_number, m)).collect();
    for load in loads {
        let Some(m) = members_by_number.get(&load.beam_number()) else {
            continue;
        };
        let g = &geoms[&m.beam_number];
        let fe_local = load.equivalent_nodal_forces(g.length);
        let t = math::rotation_matrix(g.c, g.s);
        let fe_global = t.transpose() * fe_local;
        scatter_add_vec(&mut f, &fe_global, &member_dofs(m, dof));
    }
    f
}

/// A matrix split into free/constrained blocks, `[[ff, fc], [cf, cc]]`.
pub struct PartitionedMatrix {
    pub ff: Mat,
    pub fc: Mat,
    pub cf: Mat,
    pub cc: Mat,
}

/// Split a global matrix into free/constrained blocks per `dof`'s
/// free-leading ordering.
pub fn partition_matrix(mat: &Mat, dof: &DofMap) -> PartitionedMatrix {
    let nf = dof.n_free;
    let nc = dof.n_constrained;
    PartitionedMatrix {
        ff: mat.view((0, 0), (nf, nf)).into_owned(),
        fc: mat.view((0, nf), (nf, nc)).into_owned(),
        cf: mat.view((nf, 0), (nc, nf)).into_owned(),
        cc: mat.view((nf, nf), (nc, nc)).into_owned(),
    }
}

/// Split a global vector into free/constrained blocks.
pub fn partition_vector(vec: &Vec, dof: &DofMap) -> (Vec, Vec) {
    let nf = dof.n_free;
    let nc = dof.n_constrained;
    (
        vec.rows(0, nf).into_owned(),
        vec.rows(nf, nc).into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SupportCode;

    fn simple_model() -> (std::vec::Vec<Joint>, std::vec::Vec<Member>) {
        let joints = std::vec![
            Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
            Joint::new(2, 5.0, 0.0, SupportCode::RigidJoint),
        ];
        let members = std::vec![Member::new(1, 1, 2, 0.01, 2e11, 8e-6, 7850.0)];
        (joints, members)
    }

    #[test]
    fn global_stiffness_is_symmetric() {
        let (joints, members) = simple_model();
        let geoms = member_geometries(&joints, &members).unwrap();
        let dof = DofMap::build(&joints);
        let k = assemble_stiffness(&members, &geoms, &dof);
        for r in 0..k.nrows() {
            for c in 0..k.ncols() {
                assert!((k[(r, c)] - k[(c, r)]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn partition_reconstructs_total_dof_count() {
        let (joints, members) = simple_model();
        let geoms = member_geometries(&joints, &members).unwrap();
        let dof = DofMap::build(&joints);
        let k = assemble_stiffness(&members, &geoms, &dof);
        let p = partition_matrix(&k, &dof);
        assert_eq!(p.ff.nrows(), dof.n_free);
        assert_eq!(p.cc.nrows(), dof.n_constrained);
    }
}
