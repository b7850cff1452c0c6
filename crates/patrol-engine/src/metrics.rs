//! Cumulative patrol metrics.
//!
//! [`StepMetrics`] counts frames and committed steps and records the order
//! in which cells were first visited, which is what coverage plots want.

use indexmap::IndexMap;
use patrol_core::{Cell, TickId};

/// Counters and coverage collected by a [`PatrolWorld`](crate::PatrolWorld).
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Display frames advanced since construction or reset.
    pub frames: u64,
    /// Logical steps committed.
    pub steps: u64,
    /// Committed steps where the agent could not move.
    pub idle_steps: u64,
    /// Wall-clock time of the most recent committed step, in microseconds.
    pub last_step_us: u64,
    /// Cells in the order they were first stood on, with the frame it
    /// happened on.
    pub first_visits: IndexMap<Cell, TickId>,
}

impl StepMetrics {
    /// Count a frame.
    pub(crate) fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Count a committed step from `from` to `to` at `tick`.
    pub(crate) fn record_step(&mut self, tick: TickId, from: Cell, to: Cell, elapsed_us: u64) {
        self.steps += 1;
        if from == to {
            self.idle_steps += 1;
        }
        self.last_step_us = elapsed_us;
        self.first_visits.entry(from).or_insert(tick);
    }

    /// Number of distinct cells visited so far.
    pub fn visited(&self) -> usize {
        self.first_visits.len()
    }

    /// Fraction of `passable` cells visited so far.
    pub fn coverage_ratio(&self, passable: usize) -> f64 {
        if passable == 0 {
            return 0.0;
        }
        self.visited() as f64 / passable as f64
    }

    /// Frame on which every one of `passable` cells had been visited, if
    /// that has happened.
    pub fn full_coverage_tick(&self, passable: usize) -> Option<TickId> {
        if passable == 0 || self.visited() < passable {
            return None;
        }
        self.first_visits.values().max().copied()
    }
}
