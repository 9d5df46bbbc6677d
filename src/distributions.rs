//! Member-level internal-force and deflection reconstruction — sampling
//! `Config.stations()` equally spaced stations along a member's span
//! from its local end forces, local end displacements, and the span
//! loads attached to it.

use crate::config::Config;
use crate::loads::Load;
use crate::math::Vec6;
use crate::results::MemberForces;

/// Sample axial force, shear, moment, and deflection along a member's
/// span.
///
/// `f_local` is the member's local end-force vector
/// `[N1, V1, M1, N2, V2, M2]`; `d_local` is its
/// local end-displacement vector `[u1, v1, theta1, u2, v2, theta2]`.
/// `loads` are every span load attached to this member.
///
/// Because the load model only carries transverse (local +y) loads,
/// the axial distribution has no span contribution and is
/// simply the constant `-N1`; shear and moment use the closed-form
/// per-load contributions from [`crate::loads::Load`] rather than a
/// numerical quadrature, since those contributions are themselves exact
/// antiderivatives of one another (`moment_contribution` is `-∫
/// shear_contribution`, verified in each load type's own tests).
pub fn member_forces(
    beam_number: i64,
    length: f64,
    f_local: Vec6,
    d_local: Vec6,
    loads: &[&Load],
    config: &Config,
) -> MemberForces {
    let stations = config.stations();
    let mut x = std::vec::Vec::with_capacity(stations);
    let mut axial = std::vec::Vec::with_capacity(stations);
    let mut shear = std::vec::Vec::with_capacity(stations);
    let mut moment = std::vec::Vec::with_capacity(stations);
    let mut deflection = std::vec::Vec::with_capacity(stations);

    let n1 = f_local[0];
    let v1 = f_local[1];
    let m1 = f_local[2];

    let v1d = d_local[1];
    let t1d = d_local[2];
    let v2d = d_local[4];
    let t2d = d_local[5];

    let denom = (stations - 1).max(1) as f64;
    for i in 0..stations {
        let station_x = length * (i as f64) / denom;

        let shear_sum: f64 = loads.iter().map(|l| l.shear_contribution(station_x)).sum();
        let moment_sum: f64 = loads.iter().map(|l| l.moment_contribution(station_x)).sum();

        let n_x = -n1;
        let v_x = v1 + shear_sum;
        let m_x = m1 + v1 * station_x + moment_sum;
        let v_defl = hermite_deflection(station_x, length, v1d, t1d, v2d, t2d);

        x.push(station_x);
        axial.push(n_x);
        shear.push(v_x);
        moment.push(m_x);
        deflection.push(v_defl);
    }

    MemberForces {
        beam_number,
        x,
        axial,
        shear,
        moment,
        deflection,
    }
}

/// Elastic-line deflection at `x` by direct evaluation of the Hermite
/// cubic shape functions N1..N4 on `xi = x / length`, applied to the
/// local transverse/rotational end DOFs.
fn hermite_deflection(x: f64, length: f64, v1: f64, theta1: f64, v2: f64, theta2: f64) -> f64 {
    let xi = x / length;
    let xi2 = xi * xi;
    let xi3 = xi2 * xi;

    let n1 = 1.0 - 3.0 * xi2 + 2.0 * xi3;
    let n2 = length * (xi - 2.0 * xi2 + xi3);
    let n3 = 3.0 * xi2 - 2.0 * xi3;
    let n4 = length * (-xi2 + xi3);

    n1 * v1 + n2 * theta1 + n3 * v2 + n4 * theta2
}
