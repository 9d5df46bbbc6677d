//! Degree-of-freedom numbering: partitions the 3 DOFs/joint into a
//! free-leading, constrained-trailing ordering.

use std::collections::HashMap;

use crate::elements::Joint;

/// Maps joint numbers and local DOF indices (0=u, 1=v, 2=theta) to a
/// global DOF index, ordered so every free DOF precedes every
/// constrained DOF. Within each block, joints keep their input order.
#[derive(Debug, Clone)]
pub struct DofMap {
    /// Number of free DOFs (`n_f`); global indices `0..n_f`.
    pub n_free: usize,
    /// Number of constrained DOFs (`n_c`); global indices `n_f..n_f+n_c`.
    pub n_constrained: usize,
    /// `joint_number -> [global_dof; 3]`.
    by_joint: HashMap<i64, [usize; 3]>,
}

impl DofMap {
    /// Build the map from an ordered joint list, preserving input order
    /// within each of the free/constrained blocks.
    pub fn build(joints: &[Joint]) -> Self {
        let mut free_slots = Vec::new();
        let mut constrained_slots = Vec::new();

        for (idx, joint) in joints.iter().enumerate() {
            let restrained = joint.support.restrained();
            for local in 0..3 {
                if restrained[local] {
                    constrained_slots.push((idx, local));
                } else {
                    free_slots.push((idx, local));
                }
            }
        }

        let n_free = free_slots.len();
        let n_constrained = constrained_slots.len();

        let mut by_joint: HashMap<i64, [usize; 3]> =
            joints.iter().map(|j| (j.number, [0usize; 3])).collect();

        for (global, (idx, local)) in free_slots.into_iter().enumerate() {
            by_joint.get_mut(&joints[idx].number).unwrap()[local] = global;
        }
        for (offset, (idx, local)) in constrained_slots.into_iter().enumerate() {
            by_joint.get_mut(&joints[idx].number).unwrap()[local] = n_free + offset;
        }

        Self {
            n_free,
            n_constrained,
            by_joint,
        }
    }

    /// Total number of DOFs, `n_free + n_constrained`.
    pub fn total(&self) -> usize {
        self.n_free + self.n_constrained
    }

    /// Global DOF index for `(joint_number, local)` where `local` is
    /// 0=u, 1=v, 2=theta.
    pub fn global_index(&self, joint_number: i64, local: usize) -> usize {
        self.by_joint[&joint_number][local]
    }

    /// The three global DOF indices for a joint, in `[u, v, theta]` order.
    pub fn joint_dofs(&self, joint_number: i64) -> [usize; 3] {
        self.by_joint[&joint_number]
    }

    /// `true` if the global DOF index falls in the free block.
    pub fn is_free(&self, global: usize) -> bool {
        global < self.n_free
    }
}
