//! Error types for the frame analysis engine

use thiserror::Error;

/// Main error type for frame analysis operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Joint {0} not found in model")]
    JointNotFound(i64),

    #[error("Member {0} not found in model")]
    MemberNotFound(i64),

    #[error("Duplicate joint number {0}")]
    DuplicateJoint(i64),

    #[error("Duplicate beam number {0}")]
    DuplicateMember(i64),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid load: {0}")]
    InvalidLoad(String),

    #[error("Model is under-constrained: stiffness matrix is singular on the free block")]
    UnderConstrained,

    #[error("Second-order iteration did not converge after {iterations} iterations")]
    UnconvergedSecondOrder { iterations: usize },

    #[error("Axial load reached or exceeded the lowest buckling load during second-order iteration")]
    BucklingReached,

    #[error("Eigenvalue solver failed: {0}")]
    EigenSolverFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for frame analysis operations
pub type FrameResult<T> = Result<T, FrameError>;
