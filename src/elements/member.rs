//! Member element - a prismatic 2-D beam-column

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// A prismatic 2-D beam-column member connecting two joints by number.
///
/// Identity is the `beam_number`; joints are referenced by number, never
/// by owning pointer, so the model stays a plain directed graph over an
/// ordered joint array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Member {
    /// Unique, positive beam number.
    pub beam_number: i64,
    /// Start joint number.
    pub start: i64,
    /// End joint number.
    pub end: i64,
    /// Cross-sectional area (> 0).
    pub area: f64,
    /// Young's modulus (> 0).
    pub e: f64,
    /// Second moment of area (> 0).
    pub i: f64,
    /// Density (>= 0), used for the consistent mass matrix.
    pub density: f64,
}

impl Member {
    /// Create a new member; does not validate (use [`Member::validate`]).
    pub fn new(beam_number: i64, start: i64, end: i64, area: f64, e: f64, i: f64, density: f64) -> Self {
        Self {
            beam_number,
            start,
            end,
            area,
            e,
            i,
            density,
        }
    }

    /// Reject non-positive section/material properties and coincident
    /// end joints.
    pub fn validate(&self) -> FrameResult<()> {
        if self.start == self.end {
            return Err(FrameError::InvalidGeometry(format!(
                "member {} has coincident start/end joint {}",
                self.beam_number, self.start
            )));
        }
        if !(self.area > 0.0) || !self.area.is_finite() {
            return Err(FrameError::InvalidGeometry(format!(
                "member {} has non-positive area {}",
                self.beam_number, self.area
            )));
        }
        if !(self.e > 0.0) || !self.e.is_finite() {
            return Err(FrameError::InvalidGeometry(format!(
                "member {} has non-positive Young's modulus {}",
                self.beam_number, self.e
            )));
        }
        if !(self.i > 0.0) || !self.i.is_finite() {
            return Err(FrameError::InvalidGeometry(format!(
                "member {} has non-positive moment of inertia {}",
                self.beam_number, self.i
            )));
        }
        if self.density < 0.0 || !self.density.is_finite() {
            return Err(FrameError::InvalidGeometry(format!(
                "member {} has invalid density {}",
                self.beam_number, self.density
            )));
        }
        Ok(())
    }

    /// Mass per unit length, `rho * A`.
    pub fn mass_per_length(&self) -> f64 {
        self.density * self.area
    }
}

/// Geometry derived from a member's two joints: length and direction
/// cosines. Computed once at model-preparation time and reused by the
/// assembler and by member-level reconstruction.
#[derive(Debug, Clone, Copy)]
pub struct MemberGeometry {
    /// Member length (> 0).
    pub length: f64,
    /// Direction cosine along global X.
    pub c: f64,
    /// Direction cosine along global Y.
    pub s: f64,
}

impl MemberGeometry {
    /// Compute from two joint coordinates.
    pub fn from_coords(start: [f64; 2], end: [f64; 2], beam_number: i64) -> FrameResult<Self> {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];
        let length = (dx * dx + dy * dy).sqrt();
        if !(length > 0.0) || !length.is_finite() {
            return Err(FrameError::InvalidGeometry(format!(
                "member {beam_number} has zero or non-finite length"
            )));
        }
        Ok(Self {
            length,
            c: dx / length,
            s: dy / length,
        })
    }
}
