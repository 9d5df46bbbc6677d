//! The model: the validated input boundary — joints,
//! members, and loads gathered into the structure that every analysis
//! entry point consumes by reference.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::assembler;
use crate::dof::DofMap;
use crate::elements::{Joint, Member, MemberGeometry};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;

/// A validated planar frame model: joints, members, and the span loads
/// applied to them.
///
/// Construction validates eagerly: duplicate joint/beam
/// numbers, non-finite coordinates, non-positive section properties,
/// dangling joint/member references, and out-of-span load positions all
/// abort at [`Model::new`] rather than surfacing mid-analysis. Joints
/// and members reference each other purely by number — never by owning
/// pointer — so the model stays a plain, acyclic data
/// structure and mesh refinement (see [`crate::mesh`]) is a pure
/// function over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub joints: std::vec::Vec<Joint>,
    pub members: std::vec::Vec<Member>,
    pub loads: std::vec::Vec<Load>,
}

impl Model {
    /// Build and eagerly validate a model from its three input-boundary
    /// collections.
    pub fn new(
        joints: std::vec::Vec<Joint>,
        members: std::vec::Vec<Member>,
        loads: std::vec::Vec<Load>,
    ) -> FrameResult<Self> {
        let mut seen_joints = HashSet::with_capacity(joints.len());
        for j in &joints {
            if !j.is_finite() {
                return Err(FrameError::InvalidGeometry(format!(
                    "joint {} has non-finite coordinates",
                    j.number
                )));
            }
            if !seen_joints.insert(j.number) {
                return Err(FrameError::DuplicateJoint(j.number));
            }
        }

        let joint_numbers: HashSet<i64> = joints.iter().map(|j| j.number).collect();
        let mut seen_members = HashSet::with_capacity(members.len());
        for m in &members {
            m.validate()?;
            if !joint_numbers.contains(&m.start) {
                return Err(FrameError::JointNotFound(m.start));
            }
            if !joint_numbers.contains(&m.end) {
                return Err(FrameError::JointNotFound(m.end));
            }
            if !seen_members.insert(m.beam_number) {
                return Err(FrameError::DuplicateMember(m.beam_number));
            }
        }

        // Computing geometry eagerly both validates member lengths and
        // gives us member lengths for load-span validation below.
        let geoms = assembler::member_geometries(&joints, &members)?;

        for load in &loads {
            let beam = load.beam_number();
            let length = geoms
                .get(&beam)
                .map(|g| g.length)
                .ok_or(FrameError::MemberNotFound(beam))?;
            load.validate(length)?;
        }

        Ok(Self {
            joints,
            members,
            loads,
        })
    }

    /// Per-member geometry (length, direction cosines), keyed by beam
    /// number.
    pub fn geometries(&self) -> FrameResult<HashMap<i64, MemberGeometry>> {
        assembler::member_geometries(&self.joints, &self.members)
    }

    /// Build the DOF numbering for this model's joints.
    pub fn dof_map(&self) -> DofMap {
        DofMap::build(&self.joints)
    }

    /// Look up a joint by number.
    pub fn joint(&self, number: i64) -> Option<&Joint> {
        self.joints.iter().find(|j| j.number == number)
    }

    /// Look up a member by beam number.
    pub fn member(&self, beam_number: i64) -> Option<&Member> {
        self.members.iter().find(|m| m.beam_number == beam_number)
    }
}
