//! Owned patrol simulation context.
//!
//! [`PatrolWorld`] is the primary user-facing API. It owns the grid, the
//! weight field, and the agent, and is driven by one
//! [`advance_tick()`](PatrolWorld::advance_tick) call per display frame.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, so there is exactly one writer
//! and no hidden global state. Accessors hand out shared borrows for the
//! renderer to read between frames.

use std::time::Instant;

use patrol_core::{Cell, TickId};
use patrol_space::Grid;
use tracing::{debug, info, trace};

use crate::agent::AgentState;
use crate::config::{ConfigError, PatrolConfig};
use crate::metrics::StepMetrics;
use crate::step::{self, StepOutcome};
use crate::weights::WeightField;

/// A single agent patrolling a fixed grid.
///
/// # Example
///
/// ```
/// use patrol_core::Cell;
/// use patrol_engine::{PatrolConfig, PatrolWorld};
///
/// let config = PatrolConfig::from_map("...\n.#.\n...", Cell::new(0, 0)).unwrap();
/// let mut world = PatrolWorld::new(config).unwrap();
/// for _ in 0..50 {
///     world.advance_tick();
///     let (_x, _y) = world.interpolated_position();
/// }
/// assert_eq!(world.metrics().steps, 10);
/// ```
pub struct PatrolWorld {
    grid: Grid,
    start: Cell,
    weights: WeightField,
    agent: AgentState,
    tick: TickId,
    metrics: StepMetrics,
}

impl PatrolWorld {
    /// Create a world from a [`PatrolConfig`].
    ///
    /// Validates the configuration and builds the initial field and agent.
    /// Consumes the config.
    pub fn new(config: PatrolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let PatrolConfig {
            grid,
            start,
            step_interval,
        } = config;
        let (weights, agent) = step::initialize(&grid, start, step_interval)?;
        info!(
            cols = grid.cols(),
            rows = grid.rows(),
            passable = grid.passable_count(),
            %start,
            step_interval,
            "patrol world created"
        );
        Ok(Self {
            grid,
            start,
            weights,
            agent,
            tick: TickId(0),
            metrics: StepMetrics::default(),
        })
    }

    /// Advance one display frame.
    ///
    /// Every `step_interval` frames (starting with the first) this commits
    /// the pending step and picks a new target cell; the frames in between
    /// only move the tween phase.
    pub fn advance_tick(&mut self) -> StepOutcome {
        self.tick = TickId(self.tick.0 + 1);
        self.metrics.record_frame();

        let started = Instant::now();
        let outcome = step::advance_tick(&self.grid, &mut self.weights, &mut self.agent);
        match outcome {
            StepOutcome::Committed { from, to, weight } => {
                let elapsed_us = started.elapsed().as_micros() as u64;
                self.metrics.record_step(self.tick, from, to, elapsed_us);
                if from == to {
                    debug!(tick = %self.tick, cell = %from, "agent idle: no passable neighbour");
                } else {
                    debug!(tick = %self.tick, %from, %to, weight, "step committed");
                }
            }
            StepOutcome::Advanced { phase } => {
                trace!(tick = %self.tick, phase, "frame advanced");
            }
        }
        outcome
    }

    /// Advance `frames` display frames, returning how many committed a step.
    pub fn run(&mut self, frames: u64) -> u64 {
        (0..frames)
            .filter(|_| self.advance_tick().is_commit())
            .count() as u64
    }

    /// Where to draw the agent this frame, as `(x, y)` in grid units.
    pub fn interpolated_position(&self) -> (f32, f32) {
        step::interpolated_position(&self.agent)
    }

    /// Return to the initial state: fresh field, agent on the start cell,
    /// tick 0, metrics cleared.
    pub fn reset(&mut self) {
        self.weights = WeightField::new(&self.grid);
        self.agent = AgentState::new(self.start, self.agent.interval());
        self.tick = TickId(0);
        self.metrics = StepMetrics::default();
        debug!(start = %self.start, "patrol world reset");
    }

    /// The map.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The weight field.
    pub fn weights(&self) -> &WeightField {
        &self.weights
    }

    /// Weight of `cell`, or `None` for walls and out-of-bounds cells.
    pub fn weight(&self, cell: Cell) -> Option<u8> {
        self.weights.get(&self.grid, cell)
    }

    /// The agent.
    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    /// The starting cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Frames advanced since construction or the last reset.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics collected since construction or the last reset.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Fingerprint of the field and agent, for determinism checks.
    pub fn state_hash(&self) -> u64 {
        let mut h = patrol_core::Fingerprint::new();
        h.u64(self.weights.fingerprint(&self.grid))
            .u32(self.agent.previous().col)
            .u32(self.agent.previous().row)
            .u32(self.agent.next().col)
            .u32(self.agent.next().row)
            .u32(self.agent.phase());
        h.finish()
    }
}

impl std::fmt::Debug for PatrolWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatrolWorld")
            .field("current_tick", &self.tick)
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("previous", &self.agent.previous())
            .field("next", &self.agent.next())
            .field("phase", &self.agent.phase())
            .finish()
    }
}
