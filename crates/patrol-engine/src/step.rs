//! The patrol step and the three tick-level operations.
//!
//! These functions work on caller-owned state. [`PatrolWorld`](crate::PatrolWorld)
//! wraps the same calls around an owned context and adds logging and
//! metrics.

use patrol_core::Cell;
use patrol_space::Grid;

use crate::agent::AgentState;
use crate::config::{validate_interval, validate_start, ConfigError};
use crate::select::{select, Selection};
use crate::weights::WeightField;

/// What a single [`advance_tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Mid-step frame: only the phase moved.
    Advanced {
        /// The new frame index within the step.
        phase: u32,
    },
    /// The phase wrapped and a new step was committed.
    Committed {
        /// Cell the agent now occupies (and whose weight was zeroed).
        from: Cell,
        /// Cell chosen for the next step. Equal to `from` when idling.
        to: Cell,
        /// Weight of `to` at selection time; 0 when idling.
        weight: u8,
    },
}

impl StepOutcome {
    /// `true` if this frame committed a step.
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Decay the field around `current`, then pick the next cell.
///
/// The two halves always run together so selection sees the counters of
/// this tick, never last tick's.
pub fn patrol_step(grid: &Grid, field: &mut WeightField, current: Cell) -> Selection {
    field.decay(grid, current);
    select(grid, field, current)
}

/// Build the initial field and agent for a patrol starting on `start`.
///
/// Fails if the grid has no floor, if `start` is outside the grid or a
/// wall, or if `step_interval` is zero.
pub fn initialize(
    grid: &Grid,
    start: Cell,
    step_interval: u32,
) -> Result<(WeightField, AgentState), ConfigError> {
    validate_start(grid, start)?;
    let interval = validate_interval(step_interval)?;
    Ok((WeightField::new(grid), AgentState::new(start, interval)))
}

/// Advance one display frame.
///
/// When the phase wraps, the pending step is committed (`previous` takes
/// the old `next`), the field decays around the new position and a fresh
/// `next` is selected. Otherwise only the phase moves.
pub fn advance_tick(grid: &Grid, field: &mut WeightField, agent: &mut AgentState) -> StepOutcome {
    if !agent.advance_phase() {
        return StepOutcome::Advanced {
            phase: agent.phase(),
        };
    }
    let from = agent.next();
    let sel = patrol_step(grid, field, from);
    agent.commit(sel.cell);
    StepOutcome::Committed {
        from,
        to: sel.cell,
        weight: sel.weight,
    }
}

/// Where to draw the agent this frame, as `(x, y)` in grid units.
pub fn interpolated_position(agent: &AgentState) -> (f32, f32) {
    agent.position()
}
