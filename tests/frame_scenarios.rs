//! Integration scenarios for the 2D frame solver

use approx::assert_relative_eq;
use frame_solver::prelude::*;

const E: f64 = 200e6; // kN/m^2
const I: f64 = 1e-4; // m^4
const A: f64 = 0.01; // m^2

fn fixed_fixed_beam(length: f64, w: f64) -> FrameModel {
    let mut model = FrameModel::new();
    model
        .add_node(Node::new("n1", 0.0, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_node(Node::new("n2", length, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_member(Member::new("m1", "n1", "n2", E, I, A))
        .unwrap();
    model
        .add_uniform_load(UniformLoad::transverse("m1", w))
        .unwrap();
    model
}

fn portal_frame() -> FrameModel {
    //   10kN ->  B ______ C
    //            |      |
    //            |      | 4m
    //          A |______| D
    let mut model = FrameModel::new();
    model
        .add_node(Node::new("A", 0.0, 0.0).with_support(Support::fixed()))
        .unwrap();
    model.add_node(Node::new("B", 0.0, 4.0)).unwrap();
    model.add_node(Node::new("C", 4.0, 4.0)).unwrap();
    model
        .add_node(Node::new("D", 4.0, 0.0).with_support(Support::fixed()))
        .unwrap();

    model
        .add_member(Member::new("col1", "A", "B", E, I, A))
        .unwrap();
    model
        .add_member(Member::new("beam", "B", "C", E, I, A))
        .unwrap();
    model
        .add_member(Member::new("col2", "C", "D", E, I, A))
        .unwrap();

    model.add_node_load(NodeLoad::fx("B", 10.0)).unwrap();
    model
}

#[test]
fn fixed_fixed_beam_under_uniform_load() {
    // L = 6 m, w = -10 kN/m: end moments wL^2/12 = 30, end shears wL/2 = 30
    let model = fixed_fixed_beam(6.0, -10.0);
    let solution = model.solve().unwrap();

    // Both joints are clamped, so the end actions are the fixed-end actions
    let beam = solution.member_result("m1").unwrap();
    assert_relative_eq!(beam.moment_start, 30.0, epsilon = 1e-6);
    assert_relative_eq!(beam.moment_end, -30.0, epsilon = 1e-6);
    assert_relative_eq!(beam.shear_start, 30.0, epsilon = 1e-6);

    // Internal shear runs from +30 at the start to -30 at the end
    assert_relative_eq!(beam.v_diagram[0], 30.0, epsilon = 1e-6);
    assert_relative_eq!(*beam.v_diagram.last().unwrap(), -30.0, epsilon = 1e-6);

    // Hogging wL^2/12 at the ends, sagging wL^2/24 at midspan
    assert_relative_eq!(beam.m_diagram[0], -30.0, epsilon = 1e-6);
    assert_relative_eq!(beam.m_diagram[10], 15.0, epsilon = 1e-6);
    assert_relative_eq!(*beam.m_diagram.last().unwrap(), -30.0, epsilon = 1e-6);

    // All displacements at the clamped joints are zero
    for value in &solution.displacements {
        assert_relative_eq!(*value, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn portal_frame_under_lateral_load() {
    let model = portal_frame();
    let solution = model.solve().unwrap();

    // Sum of horizontal reactions balances the 10 kN push
    let sum_rx: f64 = (0..model.nodes.len())
        .filter(|&i| model.nodes[i].support.is_supported())
        .map(|i| solution.node_reaction(i).unwrap().fx)
        .sum();
    assert_relative_eq!(sum_rx, -10.0, epsilon = 1e-6);

    // Equilibrium residual at free DOFs is numerically zero
    for (index, node) in model.nodes.iter().enumerate() {
        if node.support.is_supported() {
            continue;
        }
        let residual = solution.node_reaction(index).unwrap();
        assert_relative_eq!(residual.fx, 0.0, epsilon = 1e-6);
        assert_relative_eq!(residual.fy, 0.0, epsilon = 1e-6);
        assert_relative_eq!(residual.mz, 0.0, epsilon = 1e-6);
    }

    // Moment equilibrium at the loaded joint: the column's end moment and
    // the beam's start moment cancel
    let col1 = solution.member_result("col1").unwrap();
    let beam = solution.member_result("beam").unwrap();
    assert_relative_eq!(col1.moment_end + beam.moment_start, 0.0, epsilon = 1e-6);

    // The frame sways toward the load
    let top_left = solution.node_displacement(1).unwrap();
    assert!(top_left.dx > 0.0);
}

#[test]
fn portal_frame_global_equilibrium_with_member_loads() {
    let mut model = portal_frame();
    model
        .add_uniform_load(UniformLoad::transverse("beam", -5.0))
        .unwrap();
    let solution = model.solve().unwrap();

    let mut sum_rx = 0.0;
    let mut sum_ry = 0.0;
    for index in 0..model.nodes.len() {
        let reaction = solution.node_reaction(index).unwrap();
        sum_rx += reaction.fx;
        sum_ry += reaction.fy;
    }

    // 10 kN applied in x, 5 kN/m * 4 m = 20 kN applied downward in y
    assert_relative_eq!(sum_rx, -10.0, epsilon = 1e-6);
    assert_relative_eq!(sum_ry, 20.0, epsilon = 1e-6);
}

#[test]
fn fully_restrained_structure_is_a_degenerate_success() {
    // Every DOF clamped: nothing to solve, all displacements stay zero
    let mut model = fixed_fixed_beam(6.0, -10.0);
    model.add_node_load(NodeLoad::fy("n2", -50.0)).unwrap();

    let solution = model.solve().unwrap();
    assert_eq!(solution.displacements.len(), 6);
    for value in &solution.displacements {
        assert_eq!(*value, 0.0);
    }
    // Reactions still reported from R = K*u - F
    assert!(solution.reactions.iter().any(|r| r.abs() > 1.0));
}

#[test]
fn unrestrained_structure_reports_instability() {
    let mut model = FrameModel::new();
    model.add_node(Node::new("n1", 0.0, 0.0)).unwrap();
    model.add_node(Node::new("n2", 6.0, 0.0)).unwrap();
    model
        .add_member(Member::new("m1", "n1", "n2", E, I, A))
        .unwrap();
    model.add_node_load(NodeLoad::fy("n2", -10.0)).unwrap();

    let err = model.solve().unwrap_err();
    assert!(matches!(err, FrameError::Unstable));

    // The boundary response converts the failure, never panics
    let response = model.solve_response();
    assert!(!response.success);
    assert!(response.displacements.is_empty());
    assert!(response.member_results.is_empty());
    assert!(response.error_message.is_some());
}

#[test]
fn propped_member_moment_is_zero_at_the_pinned_end() {
    // Clamped joints isolate the fixed-end actions; release at the far end
    let p = -10.0;
    let length = 4.0;

    let mut model = FrameModel::new();
    model
        .add_node(Node::new("n1", 0.0, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_node(Node::new("n2", length, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_member(Member::new("m1", "n1", "n2", E, I, A).pin_end())
        .unwrap();
    model
        .add_member_point_load(MemberPointLoad::transverse("m1", p))
        .unwrap();

    let solution = model.solve().unwrap();
    let beam = solution.member_result("m1").unwrap();

    // Midspan load on a propped span: pinned end carries exactly no moment,
    // the rigid end carries 3PL/16 (the Pab(L+b)/(2L^2) family)
    assert_eq!(beam.moment_end, 0.0);
    assert_relative_eq!(beam.moment_start, -3.0 * p * length / 16.0, epsilon = 1e-9);

    // Mirrored release
    let mut model = FrameModel::new();
    model
        .add_node(Node::new("n1", 0.0, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_node(Node::new("n2", length, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_member(Member::new("m1", "n1", "n2", E, I, A).pin_start())
        .unwrap();
    model
        .add_member_point_load(MemberPointLoad::transverse("m1", p))
        .unwrap();

    let solution = model.solve().unwrap();
    let beam = solution.member_result("m1").unwrap();
    assert_eq!(beam.moment_start, 0.0);
    assert_relative_eq!(beam.moment_end, 3.0 * p * length / 16.0, epsilon = 1e-9);
}

#[test]
fn moment_diagram_splits_into_free_and_end_components() {
    let mut model = portal_frame();
    model
        .add_uniform_load(UniformLoad::transverse("beam", -8.0))
        .unwrap();
    model
        .add_member_point_load(MemberPointLoad::transverse("beam", -12.0).at(1.0))
        .unwrap();

    let solution = model.solve().unwrap();

    for result in &solution.member_results {
        assert_eq!(result.stations.len(), 21);
        for station in 0..result.stations.len() {
            let total = result.m_diagram[station];
            let fmd = result.fmd_diagram[station];
            let emd = result.emd_diagram[station];
            assert_relative_eq!(fmd + emd, total, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    // An unloaded member's free moment is identically zero
    let col2 = solution.member_result("col2").unwrap();
    for fmd in &col2.fmd_diagram {
        assert_eq!(*fmd, 0.0);
    }
}

#[test]
fn solving_twice_yields_identical_results() {
    let mut model = portal_frame();
    model
        .add_uniform_load(UniformLoad::transverse("beam", -5.0))
        .unwrap();

    let first = model.solve().unwrap();
    let second = model.solve().unwrap();

    assert_eq!(first.displacements, second.displacements);
    assert_eq!(first.reactions, second.reactions);
    for (a, b) in first.member_results.iter().zip(second.member_results.iter()) {
        assert_eq!(a.m_diagram, b.m_diagram);
        assert_eq!(a.v_diagram, b.v_diagram);
    }
}

#[test]
fn pin_pin_member_carries_axial_force_only() {
    // Two-bar truss: pin-pin ties from fixed abutments up to a loaded apex
    let mut model = FrameModel::new();
    model
        .add_node(Node::new("n1", 0.0, 0.0).with_support(Support::fixed()))
        .unwrap();
    model
        .add_node(Node::new("n3", 8.0, 0.0).with_support(Support::fixed()))
        .unwrap();
    // The apex rotation has no stiffness from two pin-pin ties, so only its
    // translations stay free
    let mut apex = Node::new("n2", 4.0, 3.0);
    apex.support.fix_r = true;
    model.add_node(apex).unwrap();

    model
        .add_member(Member::new("tie1", "n1", "n2", E, I, A).with_releases(true, true))
        .unwrap();
    model
        .add_member(Member::new("tie2", "n2", "n3", E, I, A).with_releases(true, true))
        .unwrap();
    model.add_node_load(NodeLoad::fy("n2", -10.0)).unwrap();

    let solution = model.solve().unwrap();
    let tie = solution.member_result("tie1").unwrap();

    // No bending anywhere in a pin-pin member
    assert_relative_eq!(tie.moment_start, 0.0, epsilon = 1e-9);
    assert_relative_eq!(tie.moment_end, 0.0, epsilon = 1e-9);
    for m in &tie.m_diagram {
        assert_relative_eq!(*m, 0.0, epsilon = 1e-9);
    }

    // Axial force is constant along the span; by symmetry each 5 m tie
    // carries half the load over its vertical projection (compression)
    let expected = -10.0 / 2.0 * 5.0 / 3.0;
    for n in &tie.n_diagram {
        assert_relative_eq!(*n, expected, epsilon = 1e-6);
    }
}
