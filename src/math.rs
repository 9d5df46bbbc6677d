//! Mathematical core: element matrices, assembly primitives, and the
//! generalised eigenvalue technique shared by buckling and modal analysis.

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

/// Dense global matrix type.
pub type Mat = DMatrix<f64>;
/// Dense global vector type.
pub type Vec = DVector<f64>;
/// 6x6 matrix for a planar beam-column element (3 DOFs per node).
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element local force/displacement vector.
pub type Vec6 = SVector<f64, 6>;

/// Local elastic stiffness matrix for a planar prismatic beam-column
/// element.
///
/// DOF order: `[u1, v1, theta1, u2, v2, theta2]`.
pub fn local_elastic_stiffness(e: f64, a: f64, i: f64, l: f64) -> Mat6 {
    let l2 = l * l;
    let l3 = l2 * l;

    let k = e * a / l;
    let a12 = 12.0 * e * i / l3;
    let a6 = 6.0 * e * i / l2;
    let a4 = 4.0 * e * i / l;
    let a2 = 2.0 * e * i / l;

    #[rustfmt::skip]
    let data = [
        k,    0.0,   0.0,   -k,    0.0,   0.0,
        0.0,  a12,   a6,    0.0,   -a12,  a6,
        0.0,  a6,    a4,    0.0,   -a6,   a2,
        -k,   0.0,   0.0,   k,     0.0,   0.0,
        0.0,  -a12,  -a6,   0.0,   a12,   -a6,
        0.0,  a6,    a2,    0.0,   -a6,   a4,
    ];
    Mat6::from_row_slice(&data)
}

/// Local geometric stiffness matrix, scaled by member normal force `n`
/// (tension positive). Non-zero only in the bending block; zero when
/// `n` is (numerically) zero.
pub fn local_geometric_stiffness(n: f64, l: f64) -> Mat6 {
    if n.abs() < 1e-12 {
        return Mat6::zeros();
    }
    let c = n / (30.0 * l);
    let l2 = l * l;

    #[rustfmt::skip]
    let data = [
        0.0,  0.0,        0.0,        0.0,  0.0,        0.0,
        0.0,  36.0 * c,   3.0*l*c,    0.0,  -36.0 * c,  3.0*l*c,
        0.0,  3.0*l*c,    4.0*l2*c,   0.0,  -3.0*l*c,   -l2*c,
        0.0,  0.0,        0.0,        0.0,  0.0,        0.0,
        0.0,  -36.0 * c,  -3.0*l*c,   0.0,  36.0 * c,   -3.0*l*c,
        0.0,  3.0*l*c,    -l2*c,      0.0,  -3.0*l*c,   4.0*l2*c,
    ];
    Mat6::from_row_slice(&data)
}

/// Local consistent mass matrix: axial part
/// `(m_bar*L/6)[[2,1],[1,2]]` on the axial DOFs, bending part the
/// standard Hermite-derived consistent-mass matrix on the bending DOFs.
pub fn local_consistent_mass(mass_per_length: f64, l: f64) -> Mat6 {
    let m = mass_per_length;
    let l2 = l * l;

    let axial = m * l / 6.0;
    let b = m * l / 420.0;

    #[rustfmt::skip]
    let data = [
        2.0*axial, 0.0,           0.0,          axial,     0.0,           0.0,
        0.0,       156.0*b,       22.0*l*b,     0.0,       54.0*b,        -13.0*l*b,
        0.0,       22.0*l*b,      4.0*l2*b,     0.0,       13.0*l*b,      -3.0*l2*b,
        axial,     0.0,           0.0,          2.0*axial, 0.0,           0.0,
        0.0,       54.0*b,        13.0*l*b,     0.0,       156.0*b,       -22.0*l*b,
        0.0,       -13.0*l*b,     -3.0*l2*b,    0.0,       -22.0*l*b,     4.0*l2*b,
    ];
    Mat6::from_row_slice(&data)
}

/// Local-to-global rotation matrix, block-diagonal on two 3x3 rotations
/// of `(u, v, theta)` at each end. `(c, s)` is the member's direction
/// cosine along global X/Y.
pub fn rotation_matrix(c: f64, s: f64) -> Mat6 {
    #[rustfmt::skip]
    let data = [
        c,    s,    0.0,  0.0,  0.0,  0.0,
        -s,   c,    0.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  1.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  0.0,  c,    s,    0.0,
        0.0,  0.0,  0.0,  -s,   c,    0.0,
        0.0,  0.0,  0.0,  0.0,  0.0,  1.0,
    ];
    Mat6::from_row_slice(&data)
}

/// Solve a dense linear system via LU decomposition.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

/// Solve the generalised symmetric eigenproblem `a x = lambda b x` where
/// `a` is symmetric positive-definite, via the Cholesky-transform
/// technique: factor `a = L L^T`, form `c = L^-1 b L^-T` (symmetric),
/// solve the standard eigenproblem on `c`, and recover
/// `lambda_i = 1 / mu_i` for every `mu_i > 0`.
///
/// Returns `(lambda, phi)` pairs sorted ascending by `lambda`, filtering
/// out non-positive `mu` (which correspond to non-positive or spurious
/// `lambda`). `phi` is expressed in the same (reduced) coordinate space
/// as `a`/`b`.
///
/// Grounded on the Cholesky-transform generalised eigensolver in
/// `examples/aecs4u-calculix/crates/ccx-solver/src/backend/native.rs`.
pub fn generalized_eigen_smallest_positive(a: &Mat, b: &Mat) -> Option<std::vec::Vec<(f64, Vec)>> {
    let chol = nalgebra::linalg::Cholesky::new(a.clone())?;
    let l = chol.l();
    let l_inv = l.clone().try_inverse()?;
    let l_inv_t = l_inv.transpose();

    let c = &l_inv * b * &l_inv_t;
    // Symmetrize to guard against floating point asymmetry from the
    // matrix products above.
    let c = (&c + c.transpose()) * 0.5;

    let eigen = nalgebra::linalg::SymmetricEigen::new(c);

    let mut pairs: std::vec::Vec<(f64, Vec)> = std::vec::Vec::new();
    for idx in 0..eigen.eigenvalues.len() {
        let mu = eigen.eigenvalues[idx];
        if mu > 1e-12 {
            let psi = eigen.eigenvectors.column(idx).into_owned();
            let phi = &l_inv_t * psi;
            pairs.push((1.0 / mu, phi));
        }
    }
    pairs.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap());
    Some(pairs)
}

/// Sign-normalise an eigenvector so its largest-magnitude component is
/// positive.
pub fn sign_normalize(v: &mut Vec) {
    let mut max_idx = 0;
    let mut max_abs = 0.0_f64;
    for i in 0..v.len() {
        let a = v[i].abs();
        if a > max_abs {
            max_abs = a;
            max_idx = i;
        }
    }
    if max_abs > 0.0 && v[max_idx] < 0.0 {
        for x in v.iter_mut() {
            *x = -*x;
        }
    }
}
