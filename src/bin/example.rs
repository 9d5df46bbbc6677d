//! frame2d example - a simple portal frame
//!
//! Builds a two-column, one-beam portal frame, runs linear, second-order,
//! buckling, and modal analysis against it, and prints a summary of each.

use frame2d::prelude::*;

fn main() {
    env_logger::init();

    println!("=== frame2d example: portal frame ===\n");

    // Portal frame geometry:
    //
    //   3 -------- 4
    //   |          |
    //   |          |
    //   1          2
    //   ^          ^
    // Fixed      Fixed
    let height = 4.0;
    let span = 6.0;

    let joints = vec![
        Joint::new(1, 0.0, 0.0, SupportCode::FixedSupport),
        Joint::new(2, span, 0.0, SupportCode::FixedSupport),
        Joint::new(3, 0.0, height, SupportCode::RigidJoint),
        Joint::new(4, span, height, SupportCode::RigidJoint),
    ];

    // W12x26-ish steel section: A=0.00494 m^2, I=8.49e-5 m^4, E=200 GPa.
    let area = 0.00494;
    let e = 2.0e11;
    let i = 8.49e-5;
    let density = 7850.0;

    let members = vec![
        Member::new(1, 1, 3, area, e, i, density), // left column
        Member::new(2, 2, 4, area, e, i, density), // right column
        Member::new(3, 3, 4, area, e, i, density), // beam
    ];

    let loads = vec![
        // 20 kN/m gravity load on the beam.
        Load::Udl(Udl::new(3, -20_000.0, 0.0, span)),
        // 10 kN lateral load at roof level.
        Load::Pl(Pl::new(1, 10_000.0, height)),
    ];

    let model = Model::new(joints, members, loads).expect("model should validate");
    let config = Config::default();

    println!("Running linear analysis...\n");
    let linear = analysis::linear::solve(&model.joints, &model.members, &model.loads, &config)
        .expect("linear analysis failed");

    println!("Node displacements:");
    for d in &linear.displacements {
        println!(
            "  joint {}: u={:.4}mm v={:.4}mm theta={:.6}rad",
            d.joint_number,
            d.u * 1000.0,
            d.v * 1000.0,
            d.theta
        );
    }

    println!("\nSupport reactions:");
    for r in &linear.reactions {
        println!(
            "  joint {}: Fx={:.2}kN Fy={:.2}kN Mz={:.2}kN*m",
            r.joint_number,
            r.fx / 1000.0,
            r.fy / 1000.0,
            r.mz / 1000.0
        );
    }

    println!("\nRunning second-order (P-Delta) analysis...");
    let second = analysis::second_order::solve(&model.joints, &model.members, &model.loads, &config)
        .expect("second-order analysis failed");
    println!(
        "  converged={} after {} iteration(s)",
        second.converged, second.iterations
    );

    println!("\nRunning elastic buckling eigenanalysis...");
    match analysis::buckling::solve(&model.joints, &model.members, &model.loads, &config) {
        Ok(buckling) => match buckling.modes.first() {
            Some(mode) => println!("  lowest buckling load factor: {:.2}", mode.eigenvalue),
            None => println!("  no positive buckling modes under this load pattern"),
        },
        Err(err) => println!("  buckling analysis failed: {err}"),
    }

    println!("\nRunning free-vibration eigenanalysis...");
    let modal = analysis::modal::solve(&model.joints, &model.members, &model.loads, &config)
        .expect("modal analysis failed");
    for (idx, mode) in modal.modes.iter().take(3).enumerate() {
        println!("  mode {}: {:.3} Hz", idx + 1, mode.frequency_hz);
    }

    println!("\n=== Analysis complete ===");
}
