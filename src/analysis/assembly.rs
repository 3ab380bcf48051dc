//! Global stiffness and load-vector assembly

use std::collections::HashMap;

use crate::elements::{Member, Node};
use crate::error::{FrameError, FrameResult};
use crate::loads::PointLoad;
use crate::math::{self, Mat, Mat6, Vec as FVec, Vec6};
use crate::model::FrameModel;

/// Length and direction cosines of a member
#[derive(Debug)]
pub(crate) struct MemberGeometry {
    pub length: f64,
    pub cos: f64,
    pub sin: f64,
}

/// Compute a member's length and direction cosines, rejecting zero-length
/// geometry.
pub(crate) fn member_geometry(model: &FrameModel, member: &Member) -> FrameResult<MemberGeometry> {
    let start = model.node(&member.start_node_id)?;
    let end = model.node(&member.end_node_id)?;

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = (dx * dx + dy * dy).sqrt();

    if length < 1e-10 {
        return Err(FrameError::ZeroLengthMember(member.id.clone()));
    }

    Ok(MemberGeometry {
        length,
        cos: dx / length,
        sin: dy / length,
    })
}

/// Map node ids to their base global DOF index, three DOFs per node in
/// insertion order.
pub(crate) fn map_dofs(nodes: &[Node]) -> HashMap<String, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.clone(), 3 * i))
        .collect()
}

/// The six global DOF indices addressed by a member (start node then end node)
pub(crate) fn member_dof_indices(member: &Member, dof_map: &HashMap<String, usize>) -> [usize; 6] {
    let start = dof_map[&member.start_node_id];
    let end = dof_map[&member.end_node_id];
    [start, start + 1, start + 2, end, end + 1, end + 2]
}

/// Assemble the global stiffness matrix by scatter-adding every member's
/// transformed stiffness into the rows/columns its DOF indices address.
pub(crate) fn assemble_stiffness(
    model: &FrameModel,
    dof_map: &HashMap<String, usize>,
    n_dofs: usize,
) -> FrameResult<Mat> {
    let mut k_global = Mat::zeros(n_dofs, n_dofs);

    for member in &model.members {
        let geom = member_geometry(model, member)?;

        let k_local = math::member_local_stiffness(
            member.elastic_modulus,
            member.moment_of_inertia,
            member.cross_section_area,
            geom.length,
            member.release_state(),
        );

        let t = math::member_transformation_matrix(geom.cos, geom.sin);
        let k_member: Mat6 = t.transpose() * k_local * t;

        let indices = member_dof_indices(member, dof_map);
        for (i, &row) in indices.iter().enumerate() {
            for (j, &col) in indices.iter().enumerate() {
                k_global[(row, col)] += k_member[(i, j)];
            }
        }
    }

    Ok(k_global)
}

/// Assemble the global load vector.
///
/// Nodal loads enter their three DOF slots directly. Member loads produce
/// local fixed-end actions which are transformed to global axes and
/// subtracted (equivalent nodal loads oppose the fixed-end reactions). The
/// local FEA vector of every loaded member is kept for force recovery.
pub(crate) fn assemble_loads(
    model: &FrameModel,
    dof_map: &HashMap<String, usize>,
    n_dofs: usize,
) -> FrameResult<(FVec, HashMap<String, Vec6>)> {
    let mut f_global = FVec::zeros(n_dofs);

    for load in &model.point_loads {
        if let PointLoad::Node(nl) = load {
            let base = dof_map[&nl.target_id];
            for (offset, value) in nl.as_array().into_iter().enumerate() {
                f_global[base + offset] += value;
            }
        }
    }

    let mut fixed_actions: HashMap<String, Vec6> = HashMap::new();

    for member in &model.members {
        let geom = member_geometry(model, member)?;
        let release = member.release_state();

        let mut fea = Vec6::zeros();
        let mut loaded = false;

        for load in model.member_point_loads(&member.id) {
            let a = load.position_on(geom.length);
            fea += math::fea_point_load(
                load.magnitude_x,
                load.magnitude_y,
                a,
                geom.length,
                release,
            );
            loaded = true;
        }
        for load in model.member_uniform_loads(&member.id) {
            fea += math::fea_uniform_load(load.magnitude_x, load.magnitude_y, geom.length, release);
            loaded = true;
        }

        if !loaded {
            continue;
        }

        let t = math::member_transformation_matrix(geom.cos, geom.sin);
        let fea_global = t.transpose() * fea;

        let indices = member_dof_indices(member, dof_map);
        for (i, &dof) in indices.iter().enumerate() {
            f_global[dof] -= fea_global[i];
        }

        fixed_actions.insert(member.id.clone(), fea);
    }

    Ok((f_global, fixed_actions))
}
