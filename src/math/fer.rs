//! Fixed-end actions for member span loads
//!
//! Each function returns the local end-force vector `[Fx1, Fy1, M1, Fx2, Fy2,
//! M2]` that would develop if the loaded member's ends were held against the
//! deformations its release configuration permits. Sign convention: a
//! downward (negative) transverse load produces upward (positive) reactions
//! and counter-clockwise-positive end moments.

use crate::elements::ReleaseState;

use super::Vec6;

/// Fixed-end actions for a uniform load over the full span.
///
/// `wx` and `wy` are local intensities per unit length (axial and transverse).
/// Rotational releases change the transverse terms only; the axial reactions
/// split evenly between the ends regardless of the release state.
pub fn fea_uniform_load(wx: f64, wy: f64, length: f64, release: ReleaseState) -> Vec6 {
    let l = length;
    let l2 = l * l;
    let w = wy;

    let mut fea = Vec6::zeros();

    fea[0] = -wx * l / 2.0;
    fea[3] = -wx * l / 2.0;

    let (fy_start, m_start, fy_end, m_end) = match release {
        ReleaseState::RigidRigid => (
            -(w * l) / 2.0,
            -(w * l2) / 12.0,
            -(w * l) / 2.0,
            (w * l2) / 12.0,
        ),
        ReleaseState::PinnedPinned => (w * l / 2.0, 0.0, w * l / 2.0, 0.0),
        ReleaseState::PinnedRigid => (
            3.0 * w * l / 8.0,
            0.0,
            5.0 * w * l / 8.0,
            -(w * l2) / 8.0,
        ),
        ReleaseState::RigidPinned => (
            5.0 * w * l / 8.0,
            (w * l2) / 8.0,
            3.0 * w * l / 8.0,
            0.0,
        ),
    };

    fea[1] = fy_start;
    fea[2] = m_start;
    fea[4] = fy_end;
    fea[5] = m_end;
    fea
}

/// Fixed-end actions for a concentrated load at distance `a` from the start.
///
/// `px` and `py` are local components (axial and transverse). The single-pin
/// cases release the pinned-end moment, carry half of it over to the opposite
/// end, and recover the shears from moment equilibrium about each end.
pub fn fea_point_load(px: f64, py: f64, a: f64, length: f64, release: ReleaseState) -> Vec6 {
    let l = length;
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;
    let p = py;

    let mut fea = Vec6::zeros();

    fea[0] = -px * b / l;
    fea[3] = -px * a / l;

    let m_fix_start = -(p * a * b * b) / l2;
    let m_fix_end = (p * b * a * a) / l2;

    let (fy_start, m_start, fy_end, m_end) = match release {
        ReleaseState::RigidRigid => (
            -(p * b * b * (3.0 * a + b)) / l3,
            m_fix_start,
            -(p * a * a * (3.0 * b + a)) / l3,
            m_fix_end,
        ),
        ReleaseState::PinnedPinned => (-p * b / l, 0.0, -p * a / l, 0.0),
        ReleaseState::PinnedRigid => {
            let m_end = m_fix_end - 0.5 * m_fix_start;
            let fy_start = -(m_end + p * b) / l;
            let fy_end = -p - fy_start;
            (fy_start, 0.0, fy_end, m_end)
        }
        ReleaseState::RigidPinned => {
            let m_start = m_fix_start - 0.5 * m_fix_end;
            let fy_end = -(m_start + p * a) / l;
            let fy_start = -p - fy_end;
            (fy_start, m_start, fy_end, 0.0)
        }
    };

    fea[1] = fy_start;
    fea[2] = m_start;
    fea[4] = fy_end;
    fea[5] = m_end;
    fea
}
