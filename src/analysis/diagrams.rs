//! Post-processing: member end actions and internal force diagrams

use std::collections::HashMap;

use crate::elements::Member;
use crate::error::FrameResult;
use crate::math::{self, Vec as FVec, Vec6};
use crate::model::FrameModel;
use crate::results::MemberResult;

use super::assembly::{member_dof_indices, member_geometry};
use super::DIAGRAM_STATIONS;

/// Recover a member's local end actions and sample its internal force
/// distributions.
///
/// End actions are `f = k_local * (T * u_global) + FEA`. Shear and moment are
/// carried along the span from the start-end actions, picking up each uniform
/// load continuously and each point load through a Macaulay bracket. The
/// free-moment diagram is the simple-beam moment under the span loads alone;
/// the end-moment diagram is defined as the stationwise difference so that
/// FMD + EMD reproduces the total moment exactly.
pub(crate) fn member_result(
    model: &FrameModel,
    member: &Member,
    dof_map: &HashMap<String, usize>,
    u_total: &FVec,
    fea_local: Vec6,
) -> FrameResult<MemberResult> {
    let geom = member_geometry(model, member)?;
    let l = geom.length;

    let indices = member_dof_indices(member, dof_map);
    let mut u_global = Vec6::zeros();
    for (i, &dof) in indices.iter().enumerate() {
        u_global[i] = u_total[dof];
    }

    let t = math::member_transformation_matrix(geom.cos, geom.sin);
    let u_local = t * u_global;

    let k_local = math::member_local_stiffness(
        member.elastic_modulus,
        member.moment_of_inertia,
        member.cross_section_area,
        l,
        member.release_state(),
    );

    let f_local = k_local * u_local + fea_local;

    // Span loads gathered once: (intensity) for uniforms, (magnitude,
    // position) for point loads, transverse components only
    let uniform_loads: Vec<f64> = model
        .member_uniform_loads(&member.id)
        .map(|ul| ul.magnitude_y)
        .collect();
    let point_loads: Vec<(f64, f64)> = model
        .member_point_loads(&member.id)
        .map(|pl| (pl.magnitude_y, pl.position_on(l)))
        .collect();

    // Simple-beam start reaction for the free-moment diagram
    let mut r_simple_start = 0.0;
    for &w in &uniform_loads {
        r_simple_start -= w * l / 2.0;
    }
    for &(p, a) in &point_loads {
        r_simple_start -= p * (l - a) / l;
    }

    let mut stations = Vec::with_capacity(DIAGRAM_STATIONS);
    let mut n_diagram = Vec::with_capacity(DIAGRAM_STATIONS);
    let mut v_diagram = Vec::with_capacity(DIAGRAM_STATIONS);
    let mut m_diagram = Vec::with_capacity(DIAGRAM_STATIONS);
    let mut fmd_diagram = Vec::with_capacity(DIAGRAM_STATIONS);
    let mut emd_diagram = Vec::with_capacity(DIAGRAM_STATIONS);

    for station in 0..DIAGRAM_STATIONS {
        let x = l * station as f64 / (DIAGRAM_STATIONS - 1) as f64;

        // Axial force is constant along the span; axial span loads shift the
        // end actions only
        let n = -f_local[0];
        let mut v = f_local[1];
        let mut m = -f_local[2] + f_local[1] * x;
        let mut m_free = r_simple_start * x;

        for &w in &uniform_loads {
            if x > 0.0 {
                v += w * x;
                let step = w * x * x / 2.0;
                m += step;
                m_free += step;
            }
        }
        for &(p, a) in &point_loads {
            if x > a {
                v += p;
                let step = p * (x - a);
                m += step;
                m_free += step;
            }
        }

        stations.push(x);
        n_diagram.push(n);
        v_diagram.push(v);
        m_diagram.push(m);
        fmd_diagram.push(m_free);
        emd_diagram.push(m - m_free);
    }

    Ok(MemberResult {
        member_id: member.id.clone(),
        axial_start: f_local[0],
        shear_start: f_local[1],
        moment_start: f_local[2],
        axial_end: f_local[3],
        shear_end: f_local[4],
        moment_end: f_local[5],
        stations,
        n_diagram,
        v_diagram,
        m_diagram,
        fmd_diagram,
        emd_diagram,
    })
}
