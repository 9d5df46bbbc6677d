//! Process-wide numerical configuration
//!
//! `Config` is a plain value threaded explicitly through every analysis
//! call; it is never read from inside the assembler or solver kernels as
//! a hidden global. A process-wide default is kept only for the
//! convenience of a surrounding presentation layer that wants a single
//! knob (mirroring the original application's `config.py` singleton).

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Eigenvalue/linear-solve numerical backend selection.
///
/// The native backend is always dense `nalgebra`; `Sparse` and `Auto` are
/// accepted for forward compatibility with a sparse backend but currently
/// resolve to the same dense computation (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverMode {
    /// Choose dense or sparse based on model size (currently always dense).
    Auto,
    /// Force the dense nalgebra backend.
    Dense,
    /// Request a sparse backend (currently falls back to dense).
    Sparse,
}

impl Default for SolverMode {
    fn default() -> Self {
        Self::Auto
    }
}

/// Numerical configuration shared by all analysis entry points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of segments per member used to discretise distributed loads
    /// into equivalent nodal forces and to sample internal-force
    /// distributions. Must be >= 2. This is a sampling/output-accuracy
    /// knob and is distinct from mesh-refinement subdivision, which
    /// changes the DOFs actually solved (see [`crate::mesh`]).
    pub segments: usize,
    /// Maximum fixed-point iterations for second-order (P-Delta) analysis.
    pub max_iterations: usize,
    /// Relative convergence tolerance for second-order iteration.
    pub tolerance: f64,
    /// Linear-algebra backend selection.
    pub solver: SolverMode,
}

impl Config {
    /// Create a config with the given segment count and default iteration
    /// settings.
    pub fn new(segments: usize) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// Set the maximum number of second-order iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the second-order convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the solver backend.
    pub fn with_solver(mut self, solver: SolverMode) -> Self {
        self.solver = solver;
        self
    }

    /// Number of sampling stations along a member (`segments + 1`).
    pub fn stations(&self) -> usize {
        self.segments + 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segments: 20,
            max_iterations: 25,
            tolerance: 1e-6,
            solver: SolverMode::Auto,
        }
    }
}

static GLOBAL_CONFIG: OnceLock<std::sync::Mutex<Config>> = OnceLock::new();

fn global_cell() -> &'static std::sync::Mutex<Config> {
    GLOBAL_CONFIG.get_or_init(|| std::sync::Mutex::new(Config::default()))
}

impl Config {
    /// Read the process-wide default configuration.
    ///
    /// Intended for a surrounding presentation layer; core analysis
    /// functions never call this implicitly.
    pub fn global() -> Config {
        *global_cell().lock().unwrap()
    }

    /// Replace the process-wide default configuration.
    ///
    /// Takes effect on the next call that reads [`Config::global`]; it
    /// must never be mutated while an analysis using it is in flight.
    pub fn set_global(config: Config) {
        *global_cell().lock().unwrap() = config;
    }
}
