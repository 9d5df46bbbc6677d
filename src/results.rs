//! Result types returned by the analysis entry points.

use serde::{Deserialize, Serialize};

/// Displacement of a single joint, `[u, v, theta]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    pub joint_number: i64,
    pub u: f64,
    pub v: f64,
    pub theta: f64,
}

/// Support reaction at a single (restrained) joint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    pub joint_number: i64,
    pub fx: f64,
    pub fy: f64,
    pub mz: f64,
}

/// Member-level internal-force and deflection distributions, sampled at
/// `Config.stations()` equally spaced stations along the member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberForces {
    pub beam_number: i64,
    /// Station positions along the member, `0..=length`.
    pub x: std::vec::Vec<f64>,
    /// Axial force N(x), tension positive.
    pub axial: std::vec::Vec<f64>,
    /// Shear force V(x).
    pub shear: std::vec::Vec<f64>,
    /// Bending moment M(x).
    pub moment: std::vec::Vec<f64>,
    /// Transverse deflection v(x) in local coordinates.
    pub deflection: std::vec::Vec<f64>,
}

/// Result of a first-order linear elastic analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSolution {
    pub displacements: std::vec::Vec<NodeDisplacement>,
    pub reactions: std::vec::Vec<Reactions>,
    pub member_forces: std::vec::Vec<MemberForces>,
}

/// Result of a second-order (P-Delta) analysis.
///
/// `converged = false` is a non-fatal diagnostic: the last iterate is
/// still returned so a caller can inspect how far the iteration got
/// before giving up or a member reaching its buckling load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondOrderSolution {
    pub displacements: std::vec::Vec<NodeDisplacement>,
    pub reactions: std::vec::Vec<Reactions>,
    pub member_forces: std::vec::Vec<MemberForces>,
    pub converged: bool,
    pub iterations: usize,
}

/// A single buckling or vibration mode: an eigenvalue paired with the
/// joint displacement pattern that realises it (sign-normalised,
/// unit-scaled - not a physical displacement).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mode {
    /// Buckling load factor (dimensionless) or angular-frequency-squared
    /// eigenvalue, depending on the analysis.
    pub eigenvalue: f64,
    pub shape: std::vec::Vec<NodeDisplacement>,
}

/// Result of an elastic buckling eigenanalysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucklingSolution {
    /// Modes ordered ascending by load factor; `modes[0]` is the lowest
    /// (critical) buckling mode.
    pub modes: std::vec::Vec<Mode>,
}

/// A single natural-vibration mode with its frequency in Hz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibrationMode {
    pub frequency_hz: f64,
    pub shape: std::vec::Vec<NodeDisplacement>,
}

/// Result of a free-vibration eigenanalysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalSolution {
    /// Modes ordered ascending by frequency.
    pub modes: std::vec::Vec<VibrationMode>,
}
