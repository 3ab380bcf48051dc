//! Frame Solver Example - Simple Portal Frame

use anyhow::Result;
use frame_solver::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Frame Solver Example: Portal Frame ===\n");

    // Build a simple portal frame
    //
    //   10 kN ->  B ________ C
    //             |        |
    //             |        |  4 m
    //           A |________| D
    //             ^        ^
    //           Fixed    Fixed
    //
    let height = 4.0;
    let span = 4.0;

    let e = 200e6; // kN/m^2
    let i = 1e-4; // m^4
    let a = 0.01; // m^2

    let mut model = FrameModel::new();

    model.add_node(Node::new("A", 0.0, 0.0).with_support(Support::fixed()))?;
    model.add_node(Node::new("B", 0.0, height))?;
    model.add_node(Node::new("C", span, height))?;
    model.add_node(Node::new("D", span, 0.0).with_support(Support::fixed()))?;

    model.add_member(Member::new("col1", "A", "B", e, i, a))?;
    model.add_member(Member::new("beam", "B", "C", e, i, a))?;
    model.add_member(Member::new("col2", "C", "D", e, i, a))?;

    // 10 kN lateral load at the top-left joint plus 5 kN/m on the beam
    model.add_node_load(NodeLoad::fx("B", 10.0))?;
    model.add_uniform_load(UniformLoad::transverse("beam", -5.0))?;

    let solution = model.solve()?;

    println!("Nodal displacements:");
    for (index, node) in model.nodes.iter().enumerate() {
        let disp = solution.node_displacement(index).unwrap();
        println!(
            "  {:>4}: dx = {:+.6e} m, dy = {:+.6e} m, rz = {:+.6e} rad",
            node.id, disp.dx, disp.dy, disp.rz
        );
    }

    println!("\nSupport reactions:");
    for (index, node) in model.nodes.iter().enumerate() {
        if !node.support.is_supported() {
            continue;
        }
        let reaction = solution.node_reaction(index).unwrap();
        println!(
            "  {:>4}: fx = {:+.3} kN, fy = {:+.3} kN, mz = {:+.3} kNm",
            node.id, reaction.fx, reaction.fy, reaction.mz
        );
    }

    println!("\nMember end actions:");
    for result in &solution.member_results {
        println!(
            "  {:>5}: N = {:+.3} kN, V = {:+.3} kN, M = {:+.3} / {:+.3} kNm",
            result.member_id,
            result.axial_start,
            result.shear_start,
            result.moment_start,
            result.moment_end
        );
    }

    println!("\nBeam moment diagram (21 stations):");
    let beam = solution.member_result("beam").unwrap();
    let max_moment = beam
        .m_diagram
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    for (x, m) in beam.stations.iter().zip(beam.m_diagram.iter()) {
        println!("  x = {:5.2} m: M = {:+8.3} kNm", x, m);
    }
    println!("\nPeak beam moment: {:+.3} kNm", max_moment);

    Ok(())
}
