//! Linear static analysis pipeline
//!
//! The stages run in a fixed order: DOF mapping, global stiffness and load
//! assembly, free/restrained partitioning, dense solve, then reaction and
//! member-force recovery. Each invocation owns its matrices; nothing is
//! shared across solves.

mod assembly;
mod diagrams;

use log::debug;

use crate::error::{FrameError, FrameResult};
use crate::math::{self, Mat, Vec as FVec};
use crate::model::FrameModel;
use crate::results::Solution;

/// Number of sampling stations per member diagram, both ends included
pub const DIAGRAM_STATIONS: usize = 21;

/// Run the direct stiffness analysis of a frame model.
///
/// A structure with no free DOFs is a valid degenerate case: the solve is
/// skipped and all displacements stay zero. A singular free-DOF submatrix
/// (mechanism or missing restraint) surfaces as [`FrameError::Unstable`].
pub fn analyze(model: &FrameModel) -> FrameResult<Solution> {
    model.validate()?;

    let dof_map = assembly::map_dofs(&model.nodes);
    let n_dofs = 3 * model.nodes.len();
    debug!(
        "mapped {} nodes onto {} global dofs",
        model.nodes.len(),
        n_dofs
    );

    let k_global = assembly::assemble_stiffness(model, &dof_map, n_dofs)?;
    let (f_global, fixed_actions) = assembly::assemble_loads(model, &dof_map, n_dofs)?;

    // Partition by boundary flags, node by node in DOF order
    let mut free_dofs: Vec<usize> = Vec::new();
    let mut restrained_count = 0usize;
    for (index, node) in model.nodes.iter().enumerate() {
        for (offset, &restrained) in node.support.restraints().iter().enumerate() {
            if restrained {
                restrained_count += 1;
            } else {
                free_dofs.push(3 * index + offset);
            }
        }
    }
    debug!(
        "{} free / {} restrained dofs",
        free_dofs.len(),
        restrained_count
    );

    let mut u_total = FVec::zeros(n_dofs);
    if !free_dofs.is_empty() {
        let u_free = solve_free_subsystem(&k_global, &f_global, &free_dofs)?;
        for (i, &dof) in free_dofs.iter().enumerate() {
            u_total[dof] = u_free[i];
        }
    }

    // Reactions over the full DOF set; entries at free DOFs are the
    // equilibrium residual and stay near zero
    let reactions = &k_global * &u_total - &f_global;

    let mut member_results = Vec::with_capacity(model.members.len());
    for member in &model.members {
        let fea = fixed_actions
            .get(&member.id)
            .copied()
            .unwrap_or_else(math::Vec6::zeros);
        member_results.push(diagrams::member_result(
            model, member, &dof_map, &u_total, fea,
        )?);
    }
    debug!("solve complete: {} member results", member_results.len());

    Ok(Solution {
        displacements: u_total.iter().copied().collect(),
        reactions: reactions.iter().copied().collect(),
        member_results,
    })
}

/// Extract and solve `K_ff * u_f = F_f` for the free DOFs
fn solve_free_subsystem(
    k_global: &Mat,
    f_global: &FVec,
    free_dofs: &[usize],
) -> FrameResult<FVec> {
    let n_free = free_dofs.len();
    let mut k_ff = Mat::zeros(n_free, n_free);
    let mut f_f = FVec::zeros(n_free);

    for (i, &di) in free_dofs.iter().enumerate() {
        f_f[i] = f_global[di];
        for (j, &dj) in free_dofs.iter().enumerate() {
            k_ff[(i, j)] = k_global[(di, dj)];
        }
    }

    let u_free = math::solve_linear_system(&k_ff, &f_f).ok_or(FrameError::Unstable)?;

    // An exactly zero pivot surfaces as a failed solve above. A mechanism
    // whose pivots cancel only down to rounding noise instead yields a huge
    // garbage solution, which the equilibrium residual exposes: a valid
    // solution satisfies K*u = F to machine precision relative to the loads.
    if !u_free.iter().all(|v| v.is_finite()) {
        return Err(FrameError::Unstable);
    }
    let residual = (&k_ff * &u_free - &f_f).norm();
    if residual > 1e-6 * f_f.norm() {
        return Err(FrameError::Unstable);
    }

    Ok(u_free)
}
