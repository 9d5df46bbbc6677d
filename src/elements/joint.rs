//! Joint (node) element - a point in the plane with a support condition

use serde::{Deserialize, Serialize};

/// Support condition at a joint, drawn from the closed set of codes used
/// by planar frame/truss analysis.
///
/// The `restrained()` array is `[u, v, theta]`: `true` means the
/// corresponding DOF is constrained to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportCode {
    /// No restraint - joint is free to translate and rotate.
    RigidJoint,
    /// Translations restrained, rotation free.
    HingedSupport,
    /// All three DOFs restrained.
    FixedSupport,
    /// Vertical translation restrained only (rolls along local X).
    RollerX,
    /// Horizontal translation restrained only (rolls along local Y).
    RollerY,
    /// Horizontal translation and rotation restrained, vertical free.
    Glided,
    /// Same restraint pattern as [`SupportCode::RollerX`]; kept distinct
    /// because the source material names it separately (a roller that
    /// also behaves as a hinge at that joint).
    RollerXHinge,
}

impl SupportCode {
    /// Restrained DOFs as `[u, v, theta]`; `true` = constrained.
    pub fn restrained(&self) -> [bool; 3] {
        match self {
            SupportCode::RigidJoint => [false, false, false],
            SupportCode::HingedSupport => [true, true, false],
            SupportCode::FixedSupport => [true, true, true],
            SupportCode::RollerX => [false, true, false],
            SupportCode::RollerY => [true, false, false],
            SupportCode::Glided => [false, true, true],
            SupportCode::RollerXHinge => [false, true, false],
        }
    }

    /// Number of restrained DOFs (0-3).
    pub fn num_restrained(&self) -> usize {
        self.restrained().iter().filter(|&&r| r).count()
    }
}

/// A joint: identity is the user-chosen `number`, unique and positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Joint {
    /// User-chosen joint number (unique, positive).
    pub number: i64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Support condition.
    pub support: SupportCode,
}

impl Joint {
    /// Create a new joint.
    pub fn new(number: i64, x: f64, y: f64, support: SupportCode) -> Self {
        Self {
            number,
            x,
            y,
            support,
        }
    }

    /// Coordinates as `[x, y]`.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Distance to another joint.
    pub fn distance_to(&self, other: &Joint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
