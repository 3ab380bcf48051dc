//! Mathematical kernels for the direct stiffness method

pub mod fer;

use nalgebra::{DMatrix, DVector, Matrix3, Matrix6, Vector6};

use crate::elements::ReleaseState;

pub use fer::{fea_point_load, fea_uniform_load};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;

/// 6x6 matrix for member stiffness and transformation
pub type Mat6 = Matrix6<f64>;
/// 6-element vector for member end forces/displacements
pub type Vec6 = Vector6<f64>;

/// Compute the transformation matrix for a 2D frame element.
///
/// # Arguments
/// * `c` - Direction cosine dx/L
/// * `s` - Direction cosine dy/L
///
/// # Returns
/// 6x6 transformation matrix from global to local coordinates. The 3x3
/// rotation block `[[c, s, 0], [-s, c, 0], [0, 0, 1]]` is replicated on the
/// diagonal, one block per member end.
pub fn member_transformation_matrix(c: f64, s: f64) -> Mat6 {
    let r = Mat3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    );

    let mut t = Mat6::zeros();
    for block in 0..2 {
        let offset = block * 3;
        for row in 0..3 {
            for col in 0..3 {
                t[(offset + row, offset + col)] = r[(row, col)];
            }
        }
    }

    t
}

/// Compute the local stiffness matrix for a 2D frame element.
///
/// Row/column order is [axial-start, shear-start, moment-start, axial-end,
/// shear-end, moment-end]. Released configurations use the statically
/// condensed closed forms, not a masked copy of the rigid-rigid matrix.
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `i` - Second moment of area
/// * `a` - Cross-sectional area
/// * `length` - Member length
/// * `release` - Rotational end-release configuration
pub fn member_local_stiffness(e: f64, i: f64, a: f64, length: f64, release: ReleaseState) -> Mat6 {
    match release {
        ReleaseState::RigidRigid => stiffness_rigid_rigid(e, i, a, length),
        ReleaseState::PinnedRigid => stiffness_pinned_rigid(e, i, a, length),
        ReleaseState::RigidPinned => stiffness_rigid_pinned(e, i, a, length),
        ReleaseState::PinnedPinned => stiffness_pinned_pinned(e, a, length),
    }
}

/// Canonical rigid-rigid beam-column stiffness
fn stiffness_rigid_rigid(e: f64, i: f64, a: f64, l: f64) -> Mat6 {
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let k1 = 12.0 * e * i / l3;
    let k2 = 6.0 * e * i / l2;
    let k3 = 4.0 * e * i / l;
    let k4 = 2.0 * e * i / l;

    #[rustfmt::skip]
    let data = [
        ea_l,  0.0,  0.0,  -ea_l, 0.0,  0.0,
        0.0,   k1,   k2,   0.0,   -k1,  k2,
        0.0,   k2,   k3,   0.0,   -k2,  k4,
        -ea_l, 0.0,  0.0,  ea_l,  0.0,  0.0,
        0.0,   -k1,  -k2,  0.0,   k1,   -k2,
        0.0,   k2,   k4,   0.0,   -k2,  k3,
    ];

    Mat6::from_row_slice(&data)
}

/// Condensed stiffness for a moment release at the start node.
///
/// The moment-start row and column are zero; bending terms collapse to the
/// 3EI family acting on (shear-start, shear-end, moment-end).
fn stiffness_pinned_rigid(e: f64, i: f64, a: f64, l: f64) -> Mat6 {
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let k1 = 3.0 * e * i / l3;
    let k2 = 3.0 * e * i / l2;
    let k3 = 3.0 * e * i / l;

    #[rustfmt::skip]
    let data = [
        ea_l,  0.0,  0.0,  -ea_l, 0.0,  0.0,
        0.0,   k1,   0.0,  0.0,   -k1,  k2,
        0.0,   0.0,  0.0,  0.0,   0.0,  0.0,
        -ea_l, 0.0,  0.0,  ea_l,  0.0,  0.0,
        0.0,   -k1,  0.0,  0.0,   k1,   -k2,
        0.0,   k2,   0.0,  0.0,   -k2,  k3,
    ];

    Mat6::from_row_slice(&data)
}

/// Condensed stiffness for a moment release at the end node (mirror of
/// [`stiffness_pinned_rigid`]).
fn stiffness_rigid_pinned(e: f64, i: f64, a: f64, l: f64) -> Mat6 {
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let k1 = 3.0 * e * i / l3;
    let k2 = 3.0 * e * i / l2;
    let k3 = 3.0 * e * i / l;

    #[rustfmt::skip]
    let data = [
        ea_l,  0.0,  0.0,  -ea_l, 0.0,  0.0,
        0.0,   k1,   k2,   0.0,   -k1,  0.0,
        0.0,   k2,   k3,   0.0,   -k2,  0.0,
        -ea_l, 0.0,  0.0,  ea_l,  0.0,  0.0,
        0.0,   -k1,  -k2,  0.0,   k1,   0.0,
        0.0,   0.0,  0.0,  0.0,   0.0,  0.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Pin-pin member: bending stiffness collapses entirely, only the axial
/// 2x2 block survives (truss element).
fn stiffness_pinned_pinned(e: f64, a: f64, l: f64) -> Mat6 {
    let ea_l = e * a / l;

    let mut k = Mat6::zeros();
    k[(0, 0)] = ea_l;
    k[(0, 3)] = -ea_l;
    k[(3, 0)] = -ea_l;
    k[(3, 3)] = ea_l;
    k
}

/// Solve a dense linear system using LU decomposition.
///
/// Returns `None` when the matrix is singular, which the analysis layer maps
/// to an instability error.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}
