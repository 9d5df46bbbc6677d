//! frame2d - a planar (2-D) frame/truss structural analysis engine
//!
//! This library provides first-order linear elastic analysis, second-order
//! (P-Delta) response via geometric-stiffness iteration, elastic buckling
//! eigenanalysis, and free-vibration eigenanalysis of planar frames built
//! from prismatic Euler-Bernoulli beam-column elements:
//! - First-order linear static analysis
//! - Second-order (P-Delta) analysis via fixed-point iteration
//! - Elastic (linear) buckling eigenanalysis
//! - Free-vibration (modal) eigenanalysis
//! - Mesh refinement and JSON model persistence
//!
//! Every analysis entry point is a pure function of `(joints, members,
//! loads, config)`: no hidden mutable state, no interior analysis cache.
//!
//! ## Example
//! ```rust
//! use frame2d::prelude::*;
//!
//! // A cantilever: fixed at the base, free at the tip.
//! let joints = vec![
//!     Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
//!     Joint::new(2, 10.0, 0.0, SupportCode::RigidJoint),
//! ];
//! let members = vec![Member::new(1, 1, 2, 0.01, 2e11, 8e-6, 7850.0)];
//! let loads = vec![Load::Pl(Pl::new(1, -1000.0, 10.0))];
//!
//! let model = Model::new(joints, members, loads).unwrap();
//! let config = Config::default();
//!
//! let solution = analysis::linear::solve(&model.joints, &model.members, &model.loads, &config).unwrap();
//! let tip = solution.displacements.iter().find(|d| d.joint_number == 2).unwrap();
//! assert!(tip.v < 0.0);
//! ```

pub mod analysis;
pub mod assembler;
pub mod config;
pub mod distributions;
pub mod dof;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod mesh;
pub mod model;
pub mod persistence;
pub mod results;

/// Re-exports of the common public types, mirroring the crate's module
/// layout rather than flattening it: input model types stay distinct
/// from analysis result types.
pub mod prelude {
    pub use crate::analysis::{self, AnalysisType};
    pub use crate::config::{Config, SolverMode};
    pub use crate::elements::{Joint, Member, MemberGeometry, SupportCode};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{Load, Pl, Udl};
    pub use crate::mesh;
    pub use crate::model::Model;
    pub use crate::persistence::{self, ModelDocument};
    pub use crate::results::{
        BucklingSolution, LinearSolution, MemberForces, Mode, NodeDisplacement, Reactions,
        SecondOrderSolution, ModalSolution, VibrationMode,
    };
}
