//! Agent state: the committed step and the tween phase across it.

use patrol_core::{interpolate, phase_fraction, Cell};
use std::num::NonZeroU32;

/// Where the agent was, where it is heading, and how far along it is.
///
/// `previous` is the agent's logical position; `next` is the cell chosen
/// by the last step. `phase` counts display frames within the current
/// step and runs `0..interval`. The pair only changes when `phase` wraps
/// back to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentState {
    previous: Cell,
    next: Cell,
    phase: u32,
    interval: NonZeroU32,
}

impl AgentState {
    /// Place the agent on `start` with nothing scheduled.
    ///
    /// The phase starts on the last frame of an interval, so the first
    /// advance wraps and evaluates a step immediately.
    pub fn new(start: Cell, interval: NonZeroU32) -> Self {
        Self {
            previous: start,
            next: start,
            phase: interval.get() - 1,
            interval,
        }
    }

    /// The last committed cell.
    pub fn previous(&self) -> Cell {
        self.previous
    }

    /// The cell the agent is moving towards.
    pub fn next(&self) -> Cell {
        self.next
    }

    /// Frame index within the current step, in `0..interval`.
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Display frames per logical step.
    pub fn interval(&self) -> NonZeroU32 {
        self.interval
    }

    /// `phase / interval`, in `[0, 1)`.
    pub fn phase_fraction(&self) -> f32 {
        phase_fraction(self.phase, self.interval.get())
    }

    /// `true` when the current step goes nowhere.
    pub fn is_idle(&self) -> bool {
        self.previous == self.next
    }

    /// Tweened `(x, y)` position in grid units for the current frame.
    pub fn position(&self) -> (f32, f32) {
        interpolate(self.previous, self.next, self.phase_fraction())
    }

    /// Move to the next frame. Returns `true` if the phase wrapped to 0,
    /// meaning a new step is due.
    pub(crate) fn advance_phase(&mut self) -> bool {
        self.phase = (self.phase + 1) % self.interval.get();
        self.phase == 0
    }

    /// Commit the pending step and schedule `next`.
    pub(crate) fn commit(&mut self, next: Cell) {
        self.previous = self.next;
        self.next = next;
    }
}
